//! Strategy selection, batch analysis, and evaluation.
//!
//! Callers (CLI, HTTP) only go through [`Analyzer`] or the process-wide
//! [`analyze`] / [`analyze_score`] helpers.

pub mod eval;
mod strategy;

pub use eval::{Evaluation, evaluate};
pub use strategy::{Analyzer, analyze, analyze_score, shared};
