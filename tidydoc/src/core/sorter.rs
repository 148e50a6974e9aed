// src/core/sorter.rs
use crate::core::name::SortKey;
use crate::core::report::{Reporter, movements};
use crate::core::section::{Document, Section};
use crate::models::{SortOutcome, SortReport};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Parent sections whose depth-3 children are sorted when nothing else is
/// configured.
pub const DEFAULT_SECTIONS: &[&str] = &["Speakers", "Organizers", "Mentors", "Getting Started"];

/// Depth of the sections whose children get sorted.
pub const DEFAULT_DEPTH: usize = 3;

/// Decides which sections have their children sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPolicy {
    /// Names a candidate's parent must have.
    pub sections: BTreeSet<String>,
    /// Depth a candidate must have.
    pub depth: usize,
}

impl Default for SortPolicy {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_SECTIONS.iter().copied())
    }
}

impl SortPolicy {
    #[must_use]
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            depth: DEFAULT_DEPTH,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Whether `section`'s children should be sorted.
    #[inline]
    #[must_use]
    pub fn is_candidate(&self, section: &Section) -> bool {
        section.depth == self.depth
            && section
                .parent_name
                .as_ref()
                .is_some_and(|parent| self.sections.contains(parent))
    }
}

/// Sorts the children of one candidate section and reports the result.
fn sort_children<K, R>(section: &mut Section, key: &K, reporter: &mut R)
where
    K: SortKey + ?Sized,
    R: Reporter + ?Sized,
{
    if section.children.is_empty() {
        debug!("No subsections in section '{}'", section.name);
        return;
    }

    let before = section.child_names();
    // Stable: equal keys keep their document order.
    section
        .children
        .sort_by_cached_key(|child| key.key(&child.name));
    let after = section.child_names();

    let parent = section.parent_name.as_deref().unwrap_or("");
    let grandparent = section.grandparent_name.as_deref().unwrap_or("No grandparent");
    debug!(
        "Before sorting in section '{}', Parent: '{parent}', Grandparent: '{grandparent}': {before:?}",
        section.name
    );
    debug!(
        "After sorting in section '{}', Parent: '{parent}', Grandparent: '{grandparent}': {after:?}",
        section.name
    );

    let outcome = if before == after {
        info!(
            "No change in order in section '{}', Parent: '{parent}'",
            section.name
        );
        SortOutcome::Unchanged
    } else {
        info!(
            "Reordered section '{}', Parent: '{parent}', Grandparent: '{grandparent}'",
            section.name
        );
        let moved = movements(&before, &after);
        SortOutcome::Reordered {
            before,
            after,
            moved,
        }
    };

    reporter.report(SortReport {
        section: section.name.clone(),
        parent: section.parent_name.clone(),
        grandparent: section.grandparent_name.clone(),
        total: section.children.len(),
        outcome,
    });
}

/// Sorts every candidate section in `sections`, visiting the forest depth
/// first in document order.
///
/// Non-candidates keep their children's order, but their descendants are
/// still visited.
pub fn sort_sections<K, R>(sections: &mut [Section], policy: &SortPolicy, key: &K, reporter: &mut R)
where
    K: SortKey + ?Sized,
    R: Reporter + ?Sized,
{
    let mut pending: Vec<&mut Section> = sections.iter_mut().rev().collect();
    while let Some(section) = pending.pop() {
        if policy.is_candidate(section) {
            sort_children(section, key, reporter);
        } else {
            debug!(
                "Not processing as a chosen section: '{}' at depth {} with parent '{}'",
                section.name,
                section.depth,
                section.parent_name.as_deref().unwrap_or("")
            );
        }
        pending.extend(section.children.iter_mut().rev());
    }
}

/// Sorts every candidate section of `doc`.
#[inline]
pub fn sort<K, R>(doc: &mut Document, policy: &SortPolicy, key: &K, reporter: &mut R)
where
    K: SortKey + ?Sized,
    R: Reporter + ?Sized,
{
    sort_sections(&mut doc.sections, policy, key, reporter);
}
