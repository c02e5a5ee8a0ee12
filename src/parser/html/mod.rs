mod html_parser;
mod text;

#[cfg(test)]
mod tests;

pub use html_parser::{extract_fields, HtmlExtractor};
pub use text::visible_lines;
