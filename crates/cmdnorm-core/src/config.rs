use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Commands eligible for space normalization when nothing is configured.
pub const DEFAULT_ALLOW_LIST: &[&str] = &["help"];
/// Full command invocations checked ahead of the allow-list by default.
pub const DEFAULT_DENY_LIST: &[&str] = &["help-H"];

/// Top-level config (cmdnorm.toml + CMDNORM_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmdnormConfig {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub addressing: AddressingConfig,
}

/// Behaviour switches for the normalization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Strip one leading `<...>` tag (usually a mention) before matching.
    #[serde(default = "bool_true")]
    pub ignore_mention_tag: bool,
    /// When true, quoted-message text is left out of the rewritten command.
    #[serde(default = "bool_true")]
    pub ignore_quote: bool,
    /// Command names rewritten when the message starts with them.
    #[serde(default = "default_allow_list")]
    pub allow_list: Vec<String>,
    /// Checked before `allow_list`; the first prefix match wins.
    #[serde(default = "default_deny_list")]
    pub deny_list: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            ignore_mention_tag: true,
            ignore_quote: true,
            allow_list: default_allow_list(),
            deny_list: default_deny_list(),
        }
    }
}

/// Host-wide addressing settings: how users address the bot directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressingConfig {
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Accepts `nickname = "Bot"` as well as `nickname = ["Bot", "bot"]`.
    #[serde(default)]
    pub nickname: Option<Nicknames>,
}

/// The nickname field as hosts write it: one name or several.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Nicknames {
    One(String),
    Many(Vec<String>),
}

impl AddressingConfig {
    pub fn new(prefixes: Vec<String>, nicknames: Vec<String>) -> Self {
        Self {
            prefixes,
            nickname: Some(Nicknames::Many(nicknames)),
        }
    }

    /// Nicknames flattened to an ordered list. Empty names are dropped.
    pub fn nicknames(&self) -> Vec<String> {
        let names = match &self.nickname {
            None => Vec::new(),
            Some(Nicknames::One(name)) => vec![name.clone()],
            Some(Nicknames::Many(names)) => names.clone(),
        };
        names.into_iter().filter(|n| !n.is_empty()).collect()
    }
}

fn bool_true() -> bool {
    true
}
fn default_allow_list() -> Vec<String> {
    DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect()
}
fn default_deny_list() -> Vec<String> {
    DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect()
}

impl CmdnormConfig {
    /// Load config from a TOML file with CMDNORM_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.cmdnorm/cmdnorm.toml
    ///
    /// A missing file is not an error: every field has a default. Nested keys
    /// are separated by a double underscore, e.g.
    /// `CMDNORM_NORMALIZE__IGNORE_QUOTE=false`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        tracing::debug!(path = %path, "loading config");

        let config: CmdnormConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("CMDNORM_").split("__"))
            .extract()
            .map_err(|e| crate::error::CmdnormError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.cmdnorm/cmdnorm.toml", home)
}
