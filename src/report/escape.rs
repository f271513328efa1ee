//! HTML entity escaping for report rendering
//!
//! Reports embed untrusted free text (prompts, sub-agent output, branch
//! names, file paths) in both element content and double-quoted attribute
//! values, so all five significant characters are escaped, matching the
//! template engine's own HTML escaping. A partially escaped report is a
//! stored-XSS vector in a file humans and tools open later.

/// Escape a string for safe insertion into HTML
///
/// Safe for element content and for double-quoted attribute values:
/// `&`, `<`, `>`, `"` and `'` all become entities.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
