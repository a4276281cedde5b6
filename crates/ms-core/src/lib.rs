//! Core data structures for ModelSweep
//!
//! This crate provides the numeric table consumed by the screening
//! pipeline: named, ordered columns of `f64` with NaN-coded missing
//! values and complete-case row selection per variable subset.

pub mod data;

pub use data::{DataError, NumericFrame, NumericFrameBuilder};
