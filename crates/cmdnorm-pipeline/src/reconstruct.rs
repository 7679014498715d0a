use crate::resolve::Resolved;

/// Assemble `command [args] [quote]` with single spaces and no trailing space.
///
/// The quote is appended only when `include_quote` is set and the quoted text
/// is non-blank.
pub fn build_command(resolved: &Resolved, quoted: Option<&str>, include_quote: bool) -> String {
    let mut out = resolved.command.clone();

    if !resolved.args.is_empty() {
        out.push(' ');
        out.push_str(&resolved.args);
    }

    if include_quote {
        if let Some(q) = quoted.map(str::trim).filter(|q| !q.is_empty()) {
            out.push(' ');
            out.push_str(q);
        }
    }

    out
}
