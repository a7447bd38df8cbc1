//! HTML escaping for attribute values and card text

/// Escape the five HTML-significant characters
///
/// `&` goes first so entities produced for the others are not escaped again.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape, then collapse newlines to spaces
pub fn escape_text(text: &str) -> String {
    escape_html(text).replace('\n', " ")
}
