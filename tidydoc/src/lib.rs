//! Alphabetize name lists nested under selected markdown sections.
//!
//! A document is read as a flat list of header lines and text, rebuilt into a
//! section tree, and the children of every depth-3 section whose parent has
//! one of the configured names are sorted by last name. Everything else,
//! including whitespace and line endings, is written back unchanged.
//!
//! ```
//! use tidydoc::{SortPolicy, tidy_str};
//!
//! let input = "## Speakers\n### Online\n#### Zed Young\n#### Anna Park\n";
//! let (output, reports) = tidy_str(input, &SortPolicy::default());
//! assert_eq!(output, "## Speakers\n### Online\n#### Anna Park\n#### Zed Young\n");
//! assert_eq!(reports[0].calculate_percentage(), 100);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, init_logging, run};
pub use config::{Config, load_config};
pub use crate::core::builder::{build, build_str};
pub use crate::core::name::{HumanName, HumanNameKey, SortKey};
pub use crate::core::render::{render, render_string};
pub use crate::core::report::{NullReporter, Reporter};
pub use crate::core::section::{Document, HeaderLayout, Section};
pub use crate::core::sorter::{SortPolicy, sort};
pub use models::{Movement, Position, SortOutcome, SortReport};

/// Runs the whole transform over raw lines with the default marker and name
/// key, sending reports to `reporter`.
pub fn tidy_lines<I, S, R>(lines: I, policy: &SortPolicy, reporter: &mut R) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Reporter + ?Sized,
{
    let mut doc = build(lines, config::DEFAULT_MARKER);
    sort(&mut doc, policy, &HumanNameKey, reporter);
    render(&doc, config::DEFAULT_MARKER)
}

/// [`tidy_lines`] over a whole string, collecting the reports.
#[must_use]
pub fn tidy_str(content: &str, policy: &SortPolicy) -> (String, Vec<SortReport>) {
    let mut reports = Vec::new();
    let output = tidy_lines(content.split_inclusive('\n'), policy, &mut reports).concat();
    (output, reports)
}
