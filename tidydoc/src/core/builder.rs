// src/core/builder.rs
use crate::core::section::{Document, HeaderLayout, Section};
use tracing::debug;

/// Header fields split out of a raw line.
struct Header<'a> {
    depth: usize,
    name: &'a str,
    leading: &'a str,
    trailing: &'a str,
}

/// Recognizes a header line: one or more `marker` characters followed by
/// whitespace. Anything else (including `#tag`) is plain text.
fn parse_header(line: &str, marker: char) -> Option<Header<'_>> {
    let rest = line.trim_start_matches(marker);
    let run = line.len().saturating_sub(rest.len());
    if run == 0 || !rest.starts_with(char::is_whitespace) {
        return None;
    }

    // The line terminator counts as whitespace for `##\n`, but it belongs to
    // `trailing`, not to the separator.
    let body = rest.trim_start_matches([' ', '\t']);
    let leading = rest.get(..rest.len().saturating_sub(body.len()))?;
    let name = body.trim_end();
    let trailing = body.get(name.len()..)?;

    Some(Header {
        depth: run / marker.len_utf8(),
        name,
        leading,
        trailing,
    })
}

/// Closes the innermost open section, handing it to its parent or the roots.
fn close_top(stack: &mut Vec<Section>, roots: &mut Vec<Section>) {
    if let Some(completed) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(completed);
        } else {
            roots.push(completed);
        }
    }
}

/// Builds the section forest from raw lines (terminators included).
///
/// Lines before the first header are kept in [`Document::preamble`].
/// Depth gaps are allowed: a depth-4 header directly under a depth-2 header
/// becomes its child.
#[must_use]
pub fn build<I, S>(lines: I, marker: char) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut doc = Document::default();
    let mut stack: Vec<Section> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let Some(header) = parse_header(line, marker) else {
            if let Some(current) = stack.last_mut() {
                current.text.push(line.to_owned());
            } else {
                doc.preamble.push(line.to_owned());
            }
            continue;
        };

        while stack.last().is_some_and(|top| top.depth >= header.depth) {
            close_top(&mut stack, &mut doc.sections);
        }

        let mut section = Section::new(header.name, header.depth);
        section.layout = HeaderLayout {
            leading: header.leading.to_owned(),
            trailing: header.trailing.to_owned(),
        };
        let mut ancestors = stack.iter().rev();
        section.parent_name = ancestors.next().map(|parent| parent.name.clone());
        section.grandparent_name = ancestors.next().map(|grandparent| grandparent.name.clone());

        debug!("Added section: {} at depth {}", section.name, section.depth);
        stack.push(section);
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut doc.sections);
    }

    doc
}

/// Splits `content` into lines, keeping each line's terminator, and builds
/// the forest.
#[must_use]
pub fn build_str(content: &str, marker: char) -> Document {
    build(content.split_inclusive('\n'), marker)
}
