// src/core/render.rs
use crate::core::section::{Document, Section};

/// Pushes the lines of `sections` (and their descendants) onto `out`.
fn render_sections<'a>(sections: &'a [Section], marker: char, out: &mut Vec<String>) {
    let mut pending: Vec<&'a Section> = sections.iter().rev().collect();
    while let Some(section) = pending.pop() {
        out.push(section.header_line(marker));
        out.extend(section.text.iter().cloned());
        pending.extend(section.children.iter().rev());
    }
}

/// Only the last line of a document may lack a terminator. Sorting can move
/// that line into the middle: give it the document's line ending. The last
/// line is left as it is, so nothing is dropped.
fn close_interior_lines(lines: &mut [String]) {
    let eol = if lines.iter().any(|line| line.ends_with("\r\n")) {
        "\r\n"
    } else {
        "\n"
    };
    let Some((_, interior)) = lines.split_last_mut() else {
        return;
    };
    for line in interior.iter_mut().filter(|line| !line.ends_with('\n')) {
        line.push_str(eol);
    }
}

/// Reconstructs the document's lines in current child order.
///
/// For a document that was built and not sorted, the output equals the input.
#[must_use]
pub fn render(doc: &Document, marker: char) -> Vec<String> {
    let mut out = doc.preamble.clone();
    render_sections(&doc.sections, marker, &mut out);
    close_interior_lines(&mut out);
    out
}

/// Same as [`render`], joined into one string.
#[must_use]
pub fn render_string(doc: &Document, marker: char) -> String {
    render(doc, marker).concat()
}
