//! Message-to-command normalization.
//!
//! Incoming chat text is cleaned up in a fixed order: one leading mention tag
//! is dropped, the bot's prefix or nickname is matched and removed, and what
//! remains is resolved against the configured command lists. A recognized
//! command is rebuilt as `command arguments [quote]` and handed to the host;
//! anything else is passed through untouched.

pub mod error;
pub mod marker;
pub mod middleware;
pub mod reconstruct;
pub mod resolve;
pub mod session;
pub mod tag;

pub use error::PipelineError;
pub use marker::MarkerMatcher;
pub use middleware::{Decision, Normalizer, PassReason};
pub use reconstruct::build_command;
pub use resolve::{resolve, Resolved, ResolvedFrom};
pub use session::CommandSession;
