use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmdnormError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Marker pattern error: {0}")]
    Pattern(String),
}

impl CmdnormError {
    /// Short error code string, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            CmdnormError::Config(_) => "CONFIG_ERROR",
            CmdnormError::Pattern(_) => "PATTERN_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, CmdnormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(CmdnormError::Config("x".into()).code(), "CONFIG_ERROR");
        assert_eq!(CmdnormError::Pattern("x".into()).code(), "PATTERN_ERROR");
    }

    #[test]
    fn display_includes_detail() {
        let e = CmdnormError::Config("missing [normalize]".into());
        assert_eq!(e.to_string(), "Configuration error: missing [normalize]");
    }
}
