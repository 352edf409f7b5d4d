//! Flows module - The counting pipeline
//!
//! Provides:
//! - tally: Per-author post counts over data lines
//! - top: Top-K selection by descending count
//! - report: Load, count, rank and print in one run

pub mod report;
pub mod tally;
pub mod top;
