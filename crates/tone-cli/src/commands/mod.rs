pub mod analyze;
pub mod batch;
pub mod eval;
pub mod serve;
