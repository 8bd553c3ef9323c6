//! Output rendering for batch results and evaluation reports.

pub mod human;
mod jsonl;

pub use jsonl::JsonlWriter;
