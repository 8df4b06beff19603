//! Subcommand implementations
//!
//! Each command returns a report; `startup` decides how to print it and
//! which exit code it maps to.

pub mod backpressure;
pub mod heap_sort;
pub mod report;
pub mod stress;

pub use report::{BackpressureReport, StressReport};
