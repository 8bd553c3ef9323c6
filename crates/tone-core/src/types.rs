use crate::ToneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete sentiment label.
///
/// `Neutral` is a real verdict (the band between the two thresholds),
/// not a stand-in for "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// All labels in stable (alphabetical) order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }

    /// Position in [`Sentiment::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Negative => 0,
            Self::Neutral => 1,
            Self::Positive => 2,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            "positive" => Ok(Self::Positive),
            other => Err(ToneError::Parse(format!("unknown sentiment label: {other:?}"))),
        }
    }
}

/// Score cut-offs for mapping a continuous score onto a [`Sentiment`].
///
/// Both bounds are inclusive. Ordering is the caller's responsibility:
/// nothing checks that `negative < positive`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.10,
            negative: -0.10,
        }
    }
}

impl Thresholds {
    pub fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    pub fn label(&self, score: f64) -> Sentiment {
        label_from_score(score, self.positive, self.negative)
    }
}

/// Map a score to a label: `>= pos` is positive, else `<= neg` is negative,
/// else neutral.
pub fn label_from_score(score: f64, pos_threshold: f64, neg_threshold: f64) -> Sentiment {
    if score >= pos_threshold {
        Sentiment::Positive
    } else if score <= neg_threshold {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Clamp a value to `[-1.0, 1.0]`.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Per-class probabilities from a statistical model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl ClassProbabilities {
    pub fn get(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
            Sentiment::Positive => self.positive,
        }
    }

    pub fn set(&mut self, label: Sentiment, p: f64) {
        match label {
            Sentiment::Negative => self.negative = p,
            Sentiment::Neutral => self.neutral = p,
            Sentiment::Positive => self.positive = p,
        }
    }

    pub fn total(&self) -> f64 {
        self.negative + self.neutral + self.positive
    }

    /// `P(positive) - P(negative)`, clamped to the unit interval.
    pub fn score(&self) -> f64 {
        clamp_unit(self.positive - self.negative)
    }
}

/// Result of analyzing one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub label: Sentiment,
    pub score: f64,
}

/// A scoring backend that turns raw text into a score in `[-1.0, 1.0]`.
pub trait SentimentScorer: Send + Sync {
    /// Short backend name for logs and output headers.
    fn name(&self) -> &'static str;

    fn score(&self, text: &str) -> f64;

    fn analyze(&self, text: &str, thresholds: &Thresholds) -> Analysis {
        let score = self.score(text);
        Analysis {
            label: thresholds.label(score),
            score,
        }
    }
}
