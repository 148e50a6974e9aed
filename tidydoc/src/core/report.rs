// src/core/report.rs
use crate::models::{Movement, Position, SortReport};
use std::collections::{HashMap, HashSet};

/// Receives a report for every sorted section.
pub trait Reporter {
    fn report(&mut self, report: SortReport);
}

impl Reporter for Vec<SortReport> {
    #[inline]
    fn report(&mut self, report: SortReport) {
        self.push(report);
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    #[inline]
    fn report(&mut self, _report: SortReport) {}
}

fn position_of(names: &[String], index: usize) -> Position {
    index
        .checked_sub(1)
        .and_then(|prev| names.get(prev))
        .map_or(Position::First, |prev| Position::After(prev.clone()))
}

/// A name and the number of earlier occurrences of it.
type Entry<'a> = (&'a str, usize);

/// Tags each name with how often it appeared earlier, so repeated names stay
/// distinct entries.
fn occurrences(names: &[String]) -> Vec<Entry<'_>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    names
        .iter()
        .map(|name| {
            let count = counts.entry(name.as_str()).or_insert(0);
            let tagged = (name.as_str(), *count);
            *count += 1;
            tagged
        })
        .collect()
}

fn adjacent_pairs<'a>(entries: &[Entry<'a>]) -> HashSet<(Entry<'a>, Entry<'a>)> {
    entries
        .windows(2)
        .filter_map(|pair| Some((*pair.first()?, *pair.get(1)?)))
        .collect()
}

/// Entries whose neighbour changed between `before` and `after`, in `after`
/// order.
///
/// An entry counts as moved when it belongs to an adjacent pair present in one
/// ordering but not the other. Repeated names are matched by occurrence (the
/// second `Bob Smith` before is the second one after, since sorting is
/// stable), and every moved occurrence is reported.
#[must_use]
pub fn movements(before: &[String], after: &[String]) -> Vec<Movement> {
    let before_entries = occurrences(before);
    let after_entries = occurrences(after);
    let before_pairs = adjacent_pairs(&before_entries);
    let after_pairs = adjacent_pairs(&after_entries);

    let mut touched: HashSet<Entry<'_>> = HashSet::new();
    for &(left, right) in before_pairs.symmetric_difference(&after_pairs) {
        touched.insert(left);
        touched.insert(right);
    }

    let mut moved = Vec::new();
    for (new_index, entry) in after_entries.iter().enumerate() {
        if !touched.contains(entry) {
            continue;
        }
        let Some(old_index) = before_entries.iter().position(|candidate| candidate == entry)
        else {
            continue;
        };
        moved.push(Movement {
            name: entry.0.to_owned(),
            was: position_of(before, old_index),
            now: position_of(after, new_index),
        });
    }
    moved
}
