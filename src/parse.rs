//! Line-level parsing for the settings file dialect.
//!
//! One setting per line, `KEY=VALUE` or `KEY="VALUE"`. The dialect is
//! deliberately small: no sections, no escapes, no line continuations.

/// Parse a single line into an upper-cased key and a cleaned value.
///
/// Returns `None` for lines that carry no setting: lines without `=`,
/// lines whose key trims to nothing, and comment lines.
pub(crate) fn parse_line(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = line.split_once('=')?;
    let key = raw_key.trim().to_uppercase();
    if key.is_empty() {
        return None;
    }
    // Comment markers are only recognized in the key segment; a line
    // without `=` never reaches this check.
    if key.starts_with(';') || key.starts_with('#') {
        return None;
    }
    Some((key, clean_value(raw_value)))
}

/// Trim a raw value and strip one matching pair of wrapping double quotes.
fn clean_value(raw: &str) -> String {
    let value = raw.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> (String, String) {
        parse_line(line).expect("line should parse")
    }

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(parsed("A=b=c"), ("A".to_string(), "b=c".to_string()));
    }

    #[test]
    fn line_without_equals_is_ignored() {
        assert_eq!(parse_line("just some text"), None);
        assert_eq!(parse_line(""), None);
        // No `=`, so this never reaches the comment check either.
        assert_eq!(parse_line("; commented out"), None);
    }

    #[test]
    fn empty_key_is_ignored() {
        assert_eq!(parse_line("=value"), None);
        assert_eq!(parse_line("   =value"), None);
    }

    #[test]
    fn comment_keys_are_skipped() {
        assert_eq!(parse_line("; disabled = 1"), None);
        assert_eq!(parse_line("#port=6667"), None);
        assert_eq!(parse_line("  # port = 6667"), None);
    }

    #[test]
    fn keys_are_trimmed_and_uppercased() {
        assert_eq!(parsed("  port  = 6667"), ("PORT".to_string(), "6667".to_string()));
        assert_eq!(parsed("MixedCase=x"), ("MIXEDCASE".to_string(), "x".to_string()));
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(parsed("A=  spaced out  "), ("A".to_string(), "spaced out".to_string()));
    }

    #[test]
    fn matched_quotes_are_stripped() {
        assert_eq!(parsed(r#"NAME="hub one""#), ("NAME".to_string(), "hub one".to_string()));
        // Whitespace inside the quotes survives.
        assert_eq!(parsed(r#"PAD="  x  ""#), ("PAD".to_string(), "  x  ".to_string()));
        assert_eq!(parsed(r#"EMPTY="""#), ("EMPTY".to_string(), String::new()));
    }

    #[test]
    fn unmatched_quotes_pass_through() {
        assert_eq!(parsed(r#"A="open"#), ("A".to_string(), "\"open".to_string()));
        assert_eq!(parsed(r#"B=close""#), ("B".to_string(), "close\"".to_string()));
        // A lone quote is not a pair.
        assert_eq!(parsed(r#"C=""#), ("C".to_string(), "\"".to_string()));
    }

    #[test]
    fn inner_quotes_are_kept() {
        assert_eq!(
            parsed(r#"MOTD="say "hi" twice""#),
            ("MOTD".to_string(), r#"say "hi" twice"#.to_string())
        );
    }
}
