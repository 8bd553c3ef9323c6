//! Text normalization, tokenization, and lexicon-based sentiment scoring.

mod fallback;
pub mod lexicon;
mod tokenizer;

pub use fallback::{LexiconScorer, lexicon_score};
pub use tokenizer::{normalize, strip_punctuation, tokenize};
