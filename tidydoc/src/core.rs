// src/core.rs
pub mod builder;
pub mod name;
pub mod render;
pub mod report;
pub mod section;
pub mod sorter;
