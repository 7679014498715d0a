//! Console host: "executing" a command just reports it.

use async_trait::async_trait;
use serde::Serialize;

use cmdnorm_pipeline::CommandSession;

/// What the console host did with one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    Exec { message: String, command: String },
    Pass { message: String },
}

impl Outcome {
    pub fn pass(message: &str) -> Self {
        Outcome::Pass { message: message.to_string() }
    }

    /// Tab-separated line for plain output.
    pub fn to_line(&self) -> String {
        match self {
            Outcome::Exec { command, .. } => format!("exec\t{}", command),
            Outcome::Pass { message } => format!("pass\t{}", message),
        }
    }
}

pub struct ConsoleSession {
    content: String,
    quote: Option<String>,
}

impl ConsoleSession {
    pub fn new(content: impl Into<String>, quote: Option<String>) -> Self {
        Self { content: content.into(), quote }
    }
}

#[async_trait]
impl CommandSession for ConsoleSession {
    type Output = Outcome;

    fn content(&self) -> &str {
        &self.content
    }

    fn quoted_text(&self) -> Option<&str> {
        self.quote.as_deref()
    }

    async fn execute(&self, command: &str) -> Outcome {
        Outcome::Exec {
            message: self.content.clone(),
            command: command.to_string(),
        }
    }
}
