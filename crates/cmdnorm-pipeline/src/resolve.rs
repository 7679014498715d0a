//! Turn marker-free text into a command name and its argument tail.

use serde::Serialize;

use cmdnorm_core::NormalizeConfig;

use crate::tag;

/// Which rule produced a [`Resolved`] command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedFrom {
    /// The text carried `<...>` tags; lists were not consulted.
    Tags,
    DenyList,
    AllowList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub command: String,
    /// Already trimmed. Empty when the command has no arguments.
    pub args: String,
    pub from: ResolvedFrom,
}

/// Resolve `text` (trimmed, tag- and marker-stripped) to a command.
///
/// Text containing `<` takes the tag path: the name is whatever precedes the
/// first `<` and the arguments are the tags themselves, space-joined. All
/// other text must start with a deny-list entry or, failing that, an
/// allow-list entry. Entries are compared case-sensitively in list order and
/// the first hit wins. `None` means the message is not a command.
pub fn resolve(text: &str, config: &NormalizeConfig) -> Option<Resolved> {
    if let Some(idx) = text.find('<') {
        let command = text[..idx].trim();
        if command.is_empty() {
            return None;
        }
        return Some(Resolved {
            command: command.to_string(),
            args: tag::find_tags(&text[idx..]).join(" "),
            from: ResolvedFrom::Tags,
        });
    }

    let (command, from) = first_prefix(&config.deny_list, text)
        .map(|c| (c, ResolvedFrom::DenyList))
        .or_else(|| first_prefix(&config.allow_list, text).map(|c| (c, ResolvedFrom::AllowList)))?;

    Some(Resolved {
        command: command.to_string(),
        args: text[command.len()..].trim().to_string(),
        from,
    })
}

/// First non-empty entry that `text` starts with.
fn first_prefix<'a>(list: &'a [String], text: &str) -> Option<&'a str> {
    list.iter()
        .map(String::as_str)
        .find(|entry| !entry.is_empty() && text.starts_with(entry))
}
