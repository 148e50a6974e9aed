// src/core/section.rs
use std::fmt::Write as _;

/// Whitespace surrounding a header name in its original line.
///
/// Keeping it lets a header be regenerated from `depth` and `name` without
/// touching separators, trailing blanks, or the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Whitespace between the marker run and the name.
    pub leading: String,
    /// Whitespace after the name, line terminator included (empty on an
    /// unterminated final line).
    pub trailing: String,
}

impl Default for HeaderLayout {
    #[inline]
    fn default() -> Self {
        Self {
            leading: String::from(" "),
            trailing: String::from("\n"),
        }
    }
}

/// One header and the content up to the next header of equal or lesser depth.
///
/// The derived `Clone`, `PartialEq` and `Debug` recurse once per nesting
/// level. They suit tests and shallow documents; walking an arbitrarily deep
/// tree goes through [`Section::outline`], [`Document::section_count`], the
/// sorter and the renderer, which use explicit work lists, and `Drop` is
/// iterative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub depth: usize,
    /// Raw lines between this header and the first child header.
    pub text: Vec<String>,
    pub children: Vec<Section>,
    /// Name of the enclosing section when this one was built.
    pub parent_name: Option<String>,
    /// Name of the section enclosing the parent when this one was built.
    pub grandparent_name: Option<String>,
    pub layout: HeaderLayout,
}

impl Section {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            text: Vec::new(),
            children: Vec::new(),
            parent_name: None,
            grandparent_name: None,
            layout: HeaderLayout::default(),
        }
    }

    /// Regenerates the header line for this section.
    #[must_use]
    pub fn header_line(&self, marker: char) -> String {
        let mut line = String::with_capacity(
            self.depth + self.layout.leading.len() + self.name.len() + self.layout.trailing.len(),
        );
        line.extend(std::iter::repeat_n(marker, self.depth));
        line.push_str(&self.layout.leading);
        line.push_str(&self.name);
        line.push_str(&self.layout.trailing);
        line
    }

    /// Child names in their current order.
    #[must_use]
    pub fn child_names(&self) -> Vec<String> {
        self.children.iter().map(|child| child.name.clone()).collect()
    }

    /// Indented, human-readable dump of this section and its descendants.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0_usize)];
        while let Some((section, indent)) = stack.pop() {
            let pad = " ".repeat(indent.saturating_mul(2));
            let _ = writeln!(
                out,
                "{pad}Section(name: {}, depth: {})",
                section.name, section.depth
            );
            if !section.text.is_empty() {
                let _ = writeln!(out, "{pad}  Text: {:?}", section.text);
            }
            stack.extend(
                section
                    .children
                    .iter()
                    .rev()
                    .map(|child| (child, indent.saturating_add(1))),
            );
        }
        out
    }
}

impl Drop for Section {
    // Flatten the subtree so dropping a deeply nested document does not
    // recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut section) = pending.pop() {
            pending.append(&mut section.children);
        }
    }
}

/// A parsed document: lines before the first header plus the section forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub preamble: Vec<String>,
    pub sections: Vec<Section>,
}

impl Document {
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        if !self.preamble.is_empty() {
            let _ = writeln!(out, "Preamble: {:?}", self.preamble);
        }
        for section in &self.sections {
            out.push_str(&section.outline());
        }
        out
    }

    /// Number of sections in the whole forest.
    #[must_use]
    pub fn section_count(&self) -> usize {
        let mut count: usize = 0;
        let mut stack: Vec<&Section> = self.sections.iter().collect();
        while let Some(section) = stack.pop() {
            count = count.saturating_add(1);
            stack.extend(section.children.iter());
        }
        count
    }
}
