use html_escape::encode_text;
use regex::RegexBuilder;

/// Longest query accepted from user input, in characters.
pub const DEFAULT_MAX_QUERY_LEN: usize = 50;

const MARKUP_CHARS: &[char] = &['<', '>', '&', '"', '\'', '`'];

/// Clean raw user input before it is matched or echoed back: drop markup and
/// control characters, trim, and cap the length.
pub fn sanitize_query(raw: &str, max_len: usize) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !MARKUP_CHARS.contains(c) && !c.is_control())
        .collect();
    cleaned.trim().chars().take(max_len).collect::<String>().trim_end().to_string()
}

/// HTML-escape `text` and wrap every case-insensitive occurrence of `query`
/// in `<mark>` tags. The query is matched literally.
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return encode_text(text).into_owned();
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return encode_text(text).into_owned(),
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&encode_text(&text[last..found.start()]));
        out.push_str("<mark>");
        out.push_str(&encode_text(found.as_str()));
        out.push_str("</mark>");
        last = found.end();
    }
    out.push_str(&encode_text(&text[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        assert_eq!(
            sanitize_query("<script>Wires</script>", DEFAULT_MAX_QUERY_LEN),
            "scriptWires/script"
        );
        assert_eq!(sanitize_query("  Metal \"Parts\" ", DEFAULT_MAX_QUERY_LEN), "Metal Parts");
    }

    #[test]
    fn test_truncates() {
        let long = "a".repeat(80);
        assert_eq!(sanitize_query(&long, DEFAULT_MAX_QUERY_LEN).len(), 50);
        assert_eq!(sanitize_query("Metal Parts", 6), "Metal");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(
            highlight("Metal Parts", "parts"),
            "Metal <mark>Parts</mark>"
        );
        assert_eq!(highlight("A & B", "b"), "A &amp; <mark>B</mark>");
    }

    #[test]
    fn test_highlight_treats_query_literally() {
        assert_eq!(highlight("ARC (Alloy)", "(a"), "ARC <mark>(A</mark>lloy)");
        assert_eq!(highlight("Wires", ".*"), "Wires");
    }
}
