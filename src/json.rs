use serde_json::Value;
use tracing::{debug, trace};

use crate::{errors::Error, utils::after};

/// Cut the first balanced json object out of the source, dropping whatever trails it.
///
/// The source is trusted to hold valid json; the scan only matches curly braces outside of
/// string literals until they even out. Everything read up to that point is returned,
/// which includes any text that precedes the first `{`. Use [`extract_after`] to anchor the
/// scan on a known marker instead.
///
/// An escaped backslash right before a closing quote (`"\\"`) is taken as an escaped quote.
/// If the braces never even out the whole source is returned.
pub fn extract(source: &str) -> &str {
    let mut depth: i64 = 0;
    let mut opened = false;
    let mut inside_string = false;
    let mut prev = None;

    for (i, c) in source.char_indices() {
        match c {
            '"' if prev != Some('\\') => inside_string = !inside_string,
            '{' if !inside_string => {
                depth += 1;
                opened |= depth > 0;
            }
            '}' if !inside_string => depth -= 1,
            _ => {}
        }
        prev = Some(c);

        if opened && depth == 0 {
            return &source[..i + c.len_utf8()];
        }
    }

    trace!(depth, "json island never balanced");
    source
}

/// Locate `marker` and extract the object that starts at the first `{` following it,
/// e.g. `extract_after(html, "ytInitialPlayerResponse = ")`.
pub fn extract_after<'a>(source: &'a str, marker: &str) -> Option<&'a str> {
    let tail = after(source, marker)?;
    let start = tail.find('{')?;
    Some(extract(&tail[start..]))
}

/// Parse a whole document, failing if it is not valid json.
pub fn parse(raw: &str) -> Result<Value, Error> {
    Ok(serde_json::from_str(raw)?)
}

/// Like [`parse`] but for speculative input, where malformed json just means absent.
pub fn try_parse(raw: &str) -> Option<Value> {
    match parse(raw) {
        Ok(value) => Some(value),
        Err(why) => {
            debug!("discarding malformed json: {why}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_prefix_and_drops_suffix() {
        assert_eq!(extract(r#"prefix{"a":{"b":1}}suffix"#), r#"prefix{"a":{"b":1}}"#);
    }

    #[test]
    fn escaped_quote_stays_inside_string() {
        let source = r#"{"a":"x\"y"}"#;
        assert_eq!(extract(source), source);
    }

    #[test]
    fn braces_inside_strings_are_ignored() {
        assert_eq!(extract(r#"{"a":"}{"};tail"#), r#"{"a":"}{"}"#);
    }

    #[test]
    fn unbalanced_returns_everything() {
        assert_eq!(extract(r#"{"a":{"b":1}"#), r#"{"a":{"b":1}"#);
        assert_eq!(extract("no braces"), "no braces");
    }

    #[test]
    fn multibyte_text_is_kept_intact() {
        assert_eq!(extract(r#"{"t":"ünï"}rest"#), r#"{"t":"ünï"}"#);
    }

    #[test]
    fn anchored_extraction() {
        let html = r#"<script>var ytInitialData = {"x":[1,{"y":2}]};var other = {}</script>"#;
        assert_eq!(
            extract_after(html, "ytInitialData = "),
            Some(r#"{"x":[1,{"y":2}]}"#)
        );
        assert_eq!(extract_after(html, "missingMarker"), None);
        assert_eq!(extract_after("marker= no object", "marker="), None);
    }

    #[test]
    fn parse_and_try_parse() {
        assert!(parse(r#"{"a":1}"#).is_ok());
        assert!(matches!(parse("{oops"), Err(Error::Json(_))));
        assert!(try_parse("{oops").is_none());
        assert_eq!(try_parse("[1]"), Some(serde_json::json!([1])));
    }
}
