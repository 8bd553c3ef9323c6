//! Tone core domain types, traits, config, and errors.

pub mod config;
mod error;
mod types;

pub use config::ToneConfig;
pub use error::ToneError;
pub use types::{
    Analysis, ClassProbabilities, Sentiment, SentimentScorer, Thresholds, clamp_unit,
    label_from_score,
};
