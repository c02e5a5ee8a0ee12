use scraper::Html;

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Visible text of a parsed document as trimmed, non-empty lines in document order.
///
/// Each text node is split on line breaks, so a node spanning several source
/// lines yields several lines here.
pub fn visible_lines(document: &Html) -> Vec<String> {
    let mut lines = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        lines.extend(
            text.split(is_line_break)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    lines
}
