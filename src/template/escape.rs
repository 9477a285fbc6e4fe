//! HTML-safe escaping of untrusted text.

/// Makes `text` safe to embed in HTML markup.
///
/// The substitution table is `<` → `&lt;`, `>` → `&gt;`, `"` → `&quot;` and
/// `'` → `&quot;`. The apostrophe maps to the double-quote entity, and `&` is
/// left alone; existing generated markup depends on this exact table.
///
/// Injections created with [`inj`](super::inj) apply this at render time. Call
/// it directly to pre-escape text passed as a literal fragment.
///
/// # Example
///
/// ```rust
/// use dumb_templates::escape;
///
/// assert_eq!(escape("<meta/>"), "&lt;meta/&gt;");
/// assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Writes the escaped form of `text` onto `out`.
pub(crate) fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' | '\'' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_document() {
        assert_eq!(
            escape("<html><head><title>title</title></head><body>text</body></html>"),
            "&lt;html&gt;&lt;head&gt;&lt;title&gt;title&lt;/title&gt;&lt;/head&gt;&lt;body&gt;text&lt;/body&gt;&lt;/html&gt;"
        );
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape("\"a\""), "&quot;a&quot;");
        assert_eq!(escape("it's"), "it&quot;s");
    }

    #[test]
    fn test_escape_leaves_ampersand() {
        assert_eq!(escape("a & b"), "a & b");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_unicode_passthrough() {
        assert_eq!(escape("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }
}
