mod html;
mod text;

pub use html::{index_page, message_page, result_page};
pub use text::render_text;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
