// src/models.rs
pub mod movement;
pub mod sort_report;

pub use movement::{Movement, Position};
pub use sort_report::{SortOutcome, SortReport};
