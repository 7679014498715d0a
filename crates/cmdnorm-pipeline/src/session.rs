//! The slice of a chat host the pipeline needs.
//!
//! Hosts keep their own session/context types and implement this trait on a
//! thin wrapper. The pipeline only reads the message text and the optional
//! quoted text, and asks the host to run a command string.

use async_trait::async_trait;

#[async_trait]
pub trait CommandSession: Send + Sync {
    /// Whatever the host's dispatcher returns; passthrough must yield the same type.
    type Output: Send;

    /// Raw text of the inbound message.
    fn content(&self) -> &str;

    /// Text of the message being replied to, if any.
    fn quoted_text(&self) -> Option<&str>;

    /// Dispatch `command` as if the user had typed it verbatim.
    ///
    /// Failures at dispatch time belong to the host and surface through
    /// `Output`; the pipeline awaits this without a timeout.
    async fn execute(&self, command: &str) -> Self::Output;
}
