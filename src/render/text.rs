use crate::parser::ExtractedRecord;
use std::fmt::Write;

/// Plain terminal rendering: one `== label ==` block per field.
pub fn render_text(fields: &ExtractedRecord) -> String {
    let mut out = String::new();
    if fields.is_empty() {
        out.push_str("(no fields extracted)\n");
        return out;
    }

    for (label, value) in fields.iter() {
        let _ = writeln!(out, "== {} ==", label);
        for item in value.items() {
            let mut lines = item.lines();
            if let Some(first) = lines.next() {
                let _ = writeln!(out, "- {}", first);
            }
            for line in lines {
                let _ = writeln!(out, "  {}", line);
            }
        }
        out.push('\n');
    }
    out
}
