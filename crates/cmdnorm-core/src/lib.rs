pub mod config;
pub mod error;

pub use config::{AddressingConfig, CmdnormConfig, Nicknames, NormalizeConfig};
pub use error::{CmdnormError, Result};
