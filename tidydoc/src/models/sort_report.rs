// src/models/sort_report.rs
use crate::models::Movement;
use std::fmt;

/// What sorting did to one candidate section's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Unchanged,
    Reordered {
        before: Vec<String>,
        after: Vec<String>,
        moved: Vec<Movement>,
    },
}

/// Change report for one sorted section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub section: String,
    pub parent: Option<String>,
    pub grandparent: Option<String>,
    pub total: usize,
    pub outcome: SortOutcome,
}

impl SortReport {
    #[inline]
    #[must_use]
    pub const fn is_reordered(&self) -> bool {
        matches!(self.outcome, SortOutcome::Reordered { .. })
    }

    #[inline]
    #[must_use]
    pub fn moved_count(&self) -> usize {
        match &self.outcome {
            SortOutcome::Unchanged => 0,
            SortOutcome::Reordered { moved, .. } => moved.len(),
        }
    }

    /// Share of children that moved, rounded to the nearest whole percent
    /// (halves round up).
    #[inline]
    #[must_use]
    pub fn calculate_percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.moved_count()
            .saturating_mul(200)
            .saturating_add(self.total)
            / self.total.saturating_mul(2)
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.parent.as_deref().unwrap_or("");
        match &self.outcome {
            SortOutcome::Unchanged => {
                write!(f, "{parent}:{}: no change in order", self.section)
            }
            SortOutcome::Reordered { moved, .. } => {
                write!(
                    f,
                    "{parent}:{}: alphabetized {} out of {} names ({}%):",
                    self.section,
                    moved.len(),
                    self.total,
                    self.calculate_percentage()
                )?;
                for movement in moved {
                    write!(f, "\n{movement}")?;
                }
                Ok(())
            }
        }
    }
}
