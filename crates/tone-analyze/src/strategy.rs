use rayon::prelude::*;
use std::path::Path;
use std::sync::OnceLock;
use tone_core::{Analysis, Sentiment, SentimentScorer, Thresholds};
use tone_score::LexiconScorer;

/// Single entry point for sentiment analysis.
///
/// Holds exactly one backend, chosen once: the trained model when one loads,
/// the lexicon scorer otherwise.
pub struct Analyzer {
    scorer: Box<dyn SentimentScorer>,
    thresholds: Thresholds,
}

impl Analyzer {
    /// Analyzer backed by the built-in lexicon.
    pub fn lexicon() -> Self {
        Self::with_scorer(LexiconScorer::new())
    }

    pub fn with_scorer(scorer: impl SentimentScorer + 'static) -> Self {
        Self {
            scorer: Box::new(scorer),
            thresholds: Thresholds::default(),
        }
    }

    /// Probe `path` for a model artifact. Never fails: a missing artifact
    /// or one that does not load selects the lexicon backend.
    pub fn from_model_path(path: &Path) -> Self {
        match tone_model::load(path) {
            Ok(Some(model)) => {
                tracing::debug!(
                    "Loaded sentiment model from {} ({} features)",
                    path.display(),
                    model.feature_count()
                );
                Self::with_scorer(model)
            }
            Ok(None) => {
                tracing::debug!("No model at {}, using lexicon scorer", path.display());
                Self::lexicon()
            }
            Err(e) => {
                tracing::warn!("Model unavailable ({:#}), using lexicon scorer", e);
                Self::lexicon()
            }
        }
    }

    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn current_thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Name of the selected backend (`"model"` or `"lexicon"`).
    pub fn backend(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        self.analysis(text).label
    }

    pub fn analyze_score(&self, text: &str) -> f64 {
        self.scorer.score(text)
    }

    pub fn analysis(&self, text: &str) -> Analysis {
        self.scorer.analyze(text, &self.thresholds)
    }

    /// Analyze many texts in parallel. Output order matches input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Analysis> {
        texts
            .par_iter()
            .map(|text| self.analysis(text.as_ref()))
            .collect()
    }
}

static SHARED: OnceLock<Analyzer> = OnceLock::new();

/// Process-wide analyzer, initialized on first call.
///
/// Only the first caller's `model_path` is probed; the outcome, including
/// "no model", is kept for the life of the process.
pub fn shared(model_path: &Path) -> &'static Analyzer {
    SHARED.get_or_init(|| Analyzer::from_model_path(model_path))
}

/// Label `text` with the process-wide analyzer.
pub fn analyze(text: &str, model_path: &Path) -> Sentiment {
    shared(model_path).analyze(text)
}

/// Score `text` with the process-wide analyzer.
pub fn analyze_score(text: &str, model_path: &Path) -> f64 {
    shared(model_path).analyze_score(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../tone-model/tests/fixtures/toy_model.json")
    }

    #[test]
    fn lexicon_end_to_end() {
        let analyzer = Analyzer::lexicon();
        assert_eq!(analyzer.backend(), "lexicon");
        assert_eq!(analyzer.analyze("I love this!"), Sentiment::Positive);
        assert_eq!(analyzer.analyze("I hate this"), Sentiment::Negative);
        assert_eq!(analyzer.analyze("It exists"), Sentiment::Neutral);
        assert!(analyzer.analyze_score("I love this!") > 0.10);
    }

    #[test]
    fn emoji_end_to_end() {
        let analyzer = Analyzer::lexicon();
        assert_eq!(analyzer.analyze("This is okay 😊"), Sentiment::Positive);
        assert_eq!(analyzer.analyze("This is okay 😡"), Sentiment::Negative);
    }

    #[test]
    fn missing_model_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::from_model_path(&dir.path().join("sentiment.json"));
        assert_eq!(analyzer.backend(), "lexicon");
        assert_eq!(analyzer.analyze("I love this!"), Sentiment::Positive);
    }

    #[test]
    fn corrupt_model_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.json");
        std::fs::write(&path, b"\x00\x01 definitely not a model").unwrap();

        let analyzer = Analyzer::from_model_path(&path);
        assert_eq!(analyzer.backend(), "lexicon");
        assert_eq!(analyzer.analyze("I hate this"), Sentiment::Negative);
    }

    #[test]
    fn directory_as_model_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::from_model_path(dir.path());
        assert_eq!(analyzer.backend(), "lexicon");
    }

    #[test]
    fn model_backend_selected() {
        let analyzer = Analyzer::from_model_path(&fixture_path());
        assert_eq!(analyzer.backend(), "model");
        assert_eq!(analyzer.analyze("I love this!"), Sentiment::Positive);
        assert_eq!(analyzer.analyze("This is terrible"), Sentiment::Negative);
        let score = analyzer.analyze_score("I love this!");
        assert!(score > 0.10 && score <= 1.0);
    }

    #[test]
    fn custom_thresholds() {
        let analyzer = Analyzer::lexicon().thresholds(Thresholds::new(0.9, -0.9));
        // 0.8 / 1.8 falls inside the widened neutral band.
        assert_eq!(analyzer.analyze("I love this!"), Sentiment::Neutral);
        assert_eq!(analyzer.current_thresholds().positive, 0.9);
    }

    #[test]
    fn batch_preserves_order() {
        let analyzer = Analyzer::lexicon();
        let texts = vec!["I love this!", "It exists", "I hate this"];
        let results = analyzer.analyze_batch(&texts);
        let labels: Vec<Sentiment> = results.iter().map(|a| a.label).collect();
        assert_eq!(
            labels,
            vec![Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
        );
    }

    #[test]
    fn batch_matches_single() {
        let analyzer = Analyzer::lexicon();
        let texts: Vec<String> = (0..200).map(|i| format!("item {i} is good")).collect();
        let results = analyzer.analyze_batch(&texts);
        for (text, result) in texts.iter().zip(&results) {
            assert_eq!(result, &analyzer.analysis(text));
        }
    }
}
