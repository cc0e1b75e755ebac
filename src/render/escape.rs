//! HTML entity escaping.

/// Escape text for use in HTML content and attribute values.
///
/// This is the only sanitization the serializer performs.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
