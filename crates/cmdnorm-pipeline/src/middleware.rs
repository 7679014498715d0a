use std::future::Future;

use serde::Serialize;
use tracing::{debug, trace};

use cmdnorm_core::{AddressingConfig, CmdnormConfig, NormalizeConfig};

use crate::error::Result;
use crate::marker::MarkerMatcher;
use crate::reconstruct::build_command;
use crate::resolve::resolve;
use crate::session::CommandSession;
use crate::tag::strip_leading_tag;

/// Why a message was forwarded unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassReason {
    /// Markers are configured and the message does not start with one.
    NoMarker,
    /// Addressed to the bot, but no command could be resolved.
    NotACommand,
}

/// Outcome of running one message through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision", content = "value")]
pub enum Decision {
    /// Hand this command string to the dispatcher.
    Execute(String),
    /// Forward the original message to the next handler.
    Passthrough(PassReason),
}

/// Per-message middleware: tag strip, marker check, marker strip, resolve, execute.
///
/// Holds only read-only state, so one instance can serve concurrent messages
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
    markers: MarkerMatcher,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig, addressing: &AddressingConfig) -> Result<Self> {
        Ok(Self {
            config,
            markers: MarkerMatcher::from_addressing(addressing)?,
        })
    }

    /// Build from a loaded config file, reporting failures as config-level errors.
    pub fn from_config(config: &CmdnormConfig) -> cmdnorm_core::Result<Self> {
        Ok(Self::new(config.normalize.clone(), &config.addressing)?)
    }

    /// Re-derive the marker set after the host's addressing settings changed.
    ///
    /// On error the previous marker set stays in place.
    pub fn rebuild_markers(&mut self, addressing: &AddressingConfig) -> Result<()> {
        self.markers = MarkerMatcher::from_addressing(addressing)?;
        Ok(())
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    pub fn markers(&self) -> &MarkerMatcher {
        &self.markers
    }

    /// Decide what to do with `content` without touching any host.
    pub fn decide(&self, content: &str, quoted: Option<&str>) -> Decision {
        trace!(content, "normalizing message");

        let mut text = content.trim();
        if self.config.ignore_mention_tag {
            text = strip_leading_tag(text);
        }

        if !self.markers.matches(text) {
            debug!(reason = "no_marker", "passing message through");
            return Decision::Passthrough(PassReason::NoMarker);
        }
        let text = self.markers.strip(text);

        let Some(resolved) = resolve(text, &self.config) else {
            debug!(reason = "not_a_command", "passing message through");
            return Decision::Passthrough(PassReason::NotACommand);
        };

        let command = build_command(&resolved, quoted, !self.config.ignore_quote);
        debug!(
            command = %resolved.command,
            from = ?resolved.from,
            "rewrote message into command"
        );
        Decision::Execute(command)
    }

    /// Middleware entry point.
    ///
    /// Awaits exactly one of `session.execute(..)` or `next()` and returns its
    /// result unchanged.
    pub async fn handle<S, N, F>(&self, session: &S, next: N) -> S::Output
    where
        S: CommandSession + ?Sized,
        N: FnOnce() -> F,
        F: Future<Output = S::Output>,
    {
        match self.decide(session.content(), session.quoted_text()) {
            Decision::Execute(command) => session.execute(&command).await,
            Decision::Passthrough(_) => next().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(prefixes: &[&str], nicknames: &[&str]) -> Normalizer {
        let addressing = AddressingConfig::new(
            prefixes.iter().map(|s| s.to_string()).collect(),
            nicknames.iter().map(|s| s.to_string()).collect(),
        );
        Normalizer::new(NormalizeConfig::default(), &addressing).unwrap()
    }

    #[test]
    fn marker_check_runs_after_tag_strip() {
        let n = normalizer(&["!"], &[]);
        assert_eq!(
            n.decide("<at:1> !help me", None),
            Decision::Execute("help me".into())
        );
    }

    #[test]
    fn tag_strip_can_be_disabled() {
        let mut cfg = NormalizeConfig::default();
        cfg.ignore_mention_tag = false;
        let n = Normalizer::new(cfg, &AddressingConfig::default()).unwrap();
        // The leading tag stays, so the tag path sees no command name.
        assert_eq!(
            n.decide("<at:1> help me", None),
            Decision::Passthrough(PassReason::NotACommand)
        );
    }

    #[test]
    fn marker_without_command_passes_through() {
        let n = normalizer(&["!"], &[]);
        assert_eq!(
            n.decide("!", None),
            Decision::Passthrough(PassReason::NotACommand)
        );
        assert_eq!(
            n.decide("!dance", None),
            Decision::Passthrough(PassReason::NotACommand)
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let n = normalizer(&["!"], &[]);
        assert_eq!(
            n.decide("  \t!help   me  \n", None),
            Decision::Execute("help me".into())
        );
    }

    #[test]
    fn quote_excluded_by_default() {
        let n = normalizer(&["!"], &[]);
        assert_eq!(
            n.decide("!help me", Some("quoted")),
            Decision::Execute("help me".into())
        );
    }

    #[test]
    fn quote_included_when_not_ignored() {
        let mut cfg = NormalizeConfig::default();
        cfg.ignore_quote = false;
        let n = Normalizer::new(cfg, &AddressingConfig::new(vec!["!".into()], vec![])).unwrap();
        assert_eq!(
            n.decide("!help me", Some("quoted")),
            Decision::Execute("help me quoted".into())
        );
    }

    #[test]
    fn rebuild_replaces_marker_set() {
        let mut n = normalizer(&["!"], &[]);
        assert!(matches!(n.decide(".help", None), Decision::Passthrough(PassReason::NoMarker)));

        n.rebuild_markers(&AddressingConfig::new(vec![".".into()], vec![]))
            .unwrap();
        assert_eq!(n.decide(".help", None), Decision::Execute("help".into()));
        assert!(matches!(n.decide("!help", None), Decision::Passthrough(PassReason::NoMarker)));

        n.rebuild_markers(&AddressingConfig::default()).unwrap();
        assert!(n.markers().is_absent());
    }

    #[test]
    fn from_config_uses_both_sections() {
        let config = CmdnormConfig {
            normalize: NormalizeConfig {
                allow_list: vec!["echo".into()],
                ..NormalizeConfig::default()
            },
            addressing: AddressingConfig::new(vec![], vec!["Bot".into()]),
        };
        let n = Normalizer::from_config(&config).unwrap();
        assert_eq!(n.decide("Bot, echo  hi", None), Decision::Execute("echo hi".into()));
        assert_eq!(
            n.decide("Bot, help", None),
            Decision::Passthrough(PassReason::NotACommand)
        );
    }

    #[test]
    fn decision_serializes_with_tag() {
        let json = serde_json::to_string(&Decision::Passthrough(PassReason::NoMarker)).unwrap();
        assert_eq!(json, r#"{"decision":"passthrough","value":"no_marker"}"#);

        let json = serde_json::to_string(&Decision::Execute("help me".into())).unwrap();
        assert_eq!(json, r#"{"decision":"execute","value":"help me"}"#);
    }
}
