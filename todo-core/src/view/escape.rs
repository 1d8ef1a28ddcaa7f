//! HTML escaping for user-entered text.

/// Escape `& < > " '` so text can be placed inside markup or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('x')">"#),
            "&lt;img src=x onerror=&quot;alert(&#039;x&#039;)&quot;&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_html("fish & chips &amp;"), "fish &amp; chips &amp;amp;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Café in Temple Bar"), "Café in Temple Bar");
    }
}
