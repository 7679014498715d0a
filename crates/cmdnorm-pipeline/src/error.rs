use thiserror::Error;

use cmdnorm_core::CmdnormError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The marker alternation could not be compiled. Literals are escaped, so
    /// in practice this only fires when the regex engine's size limit is hit.
    #[error("Marker pattern rejected: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<PipelineError> for CmdnormError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Pattern(inner) => CmdnormError::Pattern(inner.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
