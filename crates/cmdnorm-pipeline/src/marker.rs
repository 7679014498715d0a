//! Prefix / nickname matching at the start of a message.
//!
//! All configured literals are folded into one anchored alternation:
//! prefixes verbatim, nicknames with an optional `,` or `:` after them, and
//! any whitespace that follows. Alternatives are tried in declaration order
//! (prefixes first), so the first configured literal that fits wins.

use regex::Regex;
use tracing::info;

use cmdnorm_core::AddressingConfig;

use crate::error::Result;

/// Characters that may directly follow a nickname, e.g. `Bot:` or `Bot,`.
const NICKNAME_SEPARATORS: &str = "[,:]";

#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    /// `None` when no prefix or nickname is configured.
    pattern: Option<Regex>,
}

impl MarkerMatcher {
    /// Build the matcher from ordered prefix and nickname literals.
    pub fn build(prefixes: &[String], nicknames: &[String]) -> Result<Self> {
        if prefixes.is_empty() && nicknames.is_empty() {
            info!("no prefixes or nicknames configured, every message is addressed");
            return Ok(Self { pattern: None });
        }

        let alternatives: Vec<String> = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .chain(
                nicknames
                    .iter()
                    .map(|n| format!("{}{}?", regex::escape(n), NICKNAME_SEPARATORS)),
            )
            .collect();

        let pattern = Regex::new(&format!(r"^(?:{})\s*", alternatives.join("|")))?;
        info!(
            prefixes = prefixes.len(),
            nicknames = nicknames.len(),
            "marker set built"
        );
        Ok(Self { pattern: Some(pattern) })
    }

    /// Build from the host's addressing section, flattening the nickname field.
    pub fn from_addressing(addressing: &AddressingConfig) -> Result<Self> {
        Self::build(&addressing.prefixes, &addressing.nicknames())
    }

    /// True when there is nothing to match against.
    pub fn is_absent(&self) -> bool {
        self.pattern.is_none()
    }

    /// Whether `text` starts with a marker. Always true without a matcher.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.as_ref().map_or(true, |re| re.is_match(text))
    }

    /// Remove the leading marker and the whitespace after it, if present.
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        match self.pattern.as_ref().and_then(|re| re.find(text)) {
            Some(m) => &text[m.end()..],
            None => text,
        }
    }
}
