//! Angle-bracket markup tags such as `<at:123>` or `<at id="42"/>`.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<.*?>\s*").expect("invalid leading tag regex"));

static TAG_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("invalid tag span regex"));

/// Drop one tag sitting at the very start of `text`, plus the whitespace after it.
///
/// Only the first tag is removed; `"<a> <b> help"` becomes `"<b> help"`.
pub fn strip_leading_tag(text: &str) -> &str {
    match LEADING_TAG.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Every `<...>` span in `text`, shortest match first, in order of appearance.
pub fn find_tags(text: &str) -> Vec<&str> {
    TAG_SPAN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_leading_tag() {
        assert_eq!(strip_leading_tag("<at:123> help y"), "help y");
        assert_eq!(strip_leading_tag("<at:123>help"), "help");
        assert_eq!(strip_leading_tag(r#"<at id="1"/>   help"#), "help");
    }

    #[test]
    fn strips_at_most_one_tag() {
        assert_eq!(strip_leading_tag("<a> <b> help"), "<b> help");
    }

    #[test]
    fn leaves_inner_tags_alone() {
        assert_eq!(strip_leading_tag("help <at:1>"), "help <at:1>");
        assert_eq!(strip_leading_tag(" <at:1> help"), " <at:1> help");
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(strip_leading_tag("<at:1 help"), "<at:1 help");
    }

    #[test]
    fn finds_tags_non_greedily() {
        assert_eq!(
            find_tags("help <at:123> and <at:456>"),
            vec!["<at:123>", "<at:456>"]
        );
        assert_eq!(find_tags("<a><b>"), vec!["<a>", "<b>"]);
        assert!(find_tags("help me").is_empty());
        assert!(find_tags("a < b").is_empty());
    }
}
