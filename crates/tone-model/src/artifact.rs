use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use tone_core::{ClassProbabilities, Sentiment, SentimentScorer, ToneError};

/// The only artifact layout this crate understands.
pub const ARTIFACT_VERSION: &str = "v1";

/// On-disk form of a trained TF-IDF + multinomial logistic regression model.
///
/// Produced by an external training pipeline; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    /// Class label for each row of `classifier.coef`.
    pub labels: Vec<String>,
    pub vectorizer: VectorizerParams,
    pub classifier: ClassifierParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerParams {
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Term (or space-joined n-gram) to feature column.
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierParams {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// A validated, ready-to-query sentiment model.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    ngram_range: (usize, usize),
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// Indexed by [`Sentiment::index`].
    rows: [ClassRow; 3],
}

#[derive(Debug, Clone, Default)]
struct ClassRow {
    coef: Vec<f64>,
    intercept: f64,
}

impl TryFrom<ModelArtifact> for SentimentModel {
    type Error = ToneError;

    fn try_from(artifact: ModelArtifact) -> Result<Self, Self::Error> {
        if artifact.version != ARTIFACT_VERSION {
            return Err(ToneError::Model(format!(
                "unsupported artifact version {:?} (expected {ARTIFACT_VERSION:?})",
                artifact.version
            )));
        }

        let VectorizerParams {
            ngram_range,
            vocabulary,
            idf,
        } = artifact.vectorizer;
        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ToneError::Model(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        let width = idf.len();
        if vocabulary.len() != width {
            return Err(ToneError::Model(format!(
                "vocabulary has {} terms but idf has {width} weights",
                vocabulary.len()
            )));
        }
        if let Some((term, idx)) = vocabulary.iter().find(|(_, idx)| **idx >= width) {
            return Err(ToneError::Model(format!(
                "term {term:?} maps to column {idx}, out of range for {width} features"
            )));
        }

        let ClassifierParams { coef, intercept } = artifact.classifier;
        let n = artifact.labels.len();
        if n != 3 || coef.len() != n || intercept.len() != n {
            return Err(ToneError::Model(format!(
                "expected 3 labels with matching coef/intercept rows, got {n} labels, {} coef rows, {} intercepts",
                coef.len(),
                intercept.len()
            )));
        }

        let mut rows: [Option<ClassRow>; 3] = Default::default();
        for ((name, coef), intercept) in artifact.labels.iter().zip(coef).zip(intercept) {
            let label: Sentiment = name
                .parse()
                .map_err(|e| ToneError::Model(format!("bad label in artifact: {e}")))?;
            if coef.len() != width {
                return Err(ToneError::Model(format!(
                    "coef row for {label} has {} weights, expected {width}",
                    coef.len()
                )));
            }
            let slot = &mut rows[label.index()];
            if slot.is_some() {
                return Err(ToneError::Model(format!("duplicate label {label}")));
            }
            *slot = Some(ClassRow { coef, intercept });
        }

        let [negative, neutral, positive] = rows;
        let (Some(negative), Some(neutral), Some(positive)) = (negative, neutral, positive) else {
            return Err(ToneError::Model("artifact is missing a sentiment label".into()));
        };

        Ok(Self {
            ngram_range,
            vocabulary,
            idf,
            rows: [negative, neutral, positive],
        })
    }
}

impl SentimentModel {
    /// Number of feature columns.
    pub fn feature_count(&self) -> usize {
        self.idf.len()
    }

    /// Class probabilities for `text`. Sums to 1 up to rounding.
    pub fn predict_probabilities(&self, text: &str) -> ClassProbabilities {
        let features = self.features(text);

        let logits: Vec<f64> = self
            .rows
            .iter()
            .map(|row| {
                row.intercept
                    + features
                        .iter()
                        .map(|&(col, value)| row.coef[col] * value)
                        .sum::<f64>()
            })
            .collect();

        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let total: f64 = exps.iter().sum();

        let mut probs = ClassProbabilities::default();
        for (label, e) in Sentiment::ALL.into_iter().zip(exps) {
            probs.set(label, e / total);
        }
        probs
    }

    /// L2-normalized TF-IDF vector as sorted `(column, weight)` pairs.
    fn features(&self, text: &str) -> Vec<(usize, f64)> {
        let words = terms(text);
        let (min_n, max_n) = self.ngram_range;

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for n in min_n..=max_n.min(words.len()) {
            for window in words.windows(n) {
                if let Some(&col) = self.vocabulary.get(&window.join(" ")) {
                    *counts.entry(col).or_default() += 1.0;
                }
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();
        weighted.sort_by_key(|&(col, _)| col);

        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weighted {
                *w /= norm;
            }
        }
        weighted
    }
}

impl SentimentScorer for SentimentModel {
    fn name(&self) -> &'static str {
        "model"
    }

    fn score(&self, text: &str) -> f64 {
        self.predict_probabilities(text).score()
    }
}

/// Lowercased, accent-stripped word terms: runs of alphanumerics or `_`,
/// at least two characters.
fn terms(text: &str) -> Vec<String> {
    let folded: String = text
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    folded
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
