// src/models/movement.rs
use std::fmt;

/// Where a name sits among its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    First,
    After(String),
}

/// A name whose neighbours changed when its section was sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub name: String,
    pub was: Position,
    pub now: Position,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.was, &self.now) {
            (Position::First, Position::First) => write!(f, "* {} (was first, still first)", self.name),
            (Position::First, Position::After(now)) => {
                write!(f, "* {} (was first, now is after {now})", self.name)
            }
            (Position::After(was), Position::First) => {
                write!(f, "* {} (was after {was}, now is first)", self.name)
            }
            (Position::After(was), Position::After(now)) => {
                write!(f, "* {} (was after {was}, now is after {now})", self.name)
            }
        }
    }
}
