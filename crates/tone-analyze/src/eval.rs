use crate::Analyzer;
use rayon::prelude::*;
use serde::Serialize;
use tone_core::Sentiment;
use tone_model::LabeledText;

/// Precision, recall and F1 for one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub label: Sentiment,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Gold rows carrying this label.
    pub support: usize,
}

/// Classification report over a labeled dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub backend: String,
    pub total: usize,
    pub accuracy: f64,
    pub macro_f1: f64,
    pub per_class: Vec<ClassMetrics>,
    /// `confusion[gold][predicted]`, indexed by [`Sentiment::index`].
    pub confusion: [[usize; 3]; 3],
}

impl Evaluation {
    /// Build a report from `(gold, predicted)` pairs.
    pub fn from_pairs<I>(backend: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (Sentiment, Sentiment)>,
    {
        let mut confusion = [[0usize; 3]; 3];
        for (gold, predicted) in pairs {
            confusion[gold.index()][predicted.index()] += 1;
        }

        let total: usize = confusion.iter().flatten().sum();
        let correct: usize = (0..3).map(|i| confusion[i][i]).sum();

        let per_class: Vec<ClassMetrics> = Sentiment::ALL
            .into_iter()
            .map(|label| {
                let i = label.index();
                let tp = confusion[i][i];
                let predicted: usize = (0..3).map(|g| confusion[g][i]).sum();
                let support: usize = confusion[i].iter().sum();
                let precision = ratio(tp, predicted);
                let recall = ratio(tp, support);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                ClassMetrics {
                    label,
                    precision,
                    recall,
                    f1,
                    support,
                }
            })
            .collect();

        // Macro average over labels seen in gold or predictions.
        let seen: Vec<f64> = per_class
            .iter()
            .filter(|m| {
                let i = m.label.index();
                m.support > 0 || (0..3).any(|g| confusion[g][i] > 0)
            })
            .map(|m| m.f1)
            .collect();
        let macro_f1 = if seen.is_empty() {
            0.0
        } else {
            seen.iter().sum::<f64>() / seen.len() as f64
        };

        Self {
            backend: backend.to_string(),
            total,
            accuracy: ratio(correct, total),
            macro_f1,
            per_class,
            confusion,
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Run `analyzer` over every row and compare against the gold labels.
pub fn evaluate(analyzer: &Analyzer, rows: &[LabeledText]) -> Evaluation {
    let predicted: Vec<Sentiment> = rows
        .par_iter()
        .map(|row| analyzer.analyze(&row.text))
        .collect();
    let pairs = rows.iter().map(|row| row.label).zip(predicted);
    Evaluation::from_pairs(analyzer.backend(), pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tone_core::Sentiment::{Negative as Neg, Neutral as Neu, Positive as Pos};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hand_computed_report() {
        let eval = Evaluation::from_pairs(
            "test",
            [
                (Pos, Pos),
                (Pos, Pos),
                (Pos, Neg),
                (Neg, Neg),
                (Neg, Neu),
                (Neu, Neu),
            ],
        );

        assert_eq!(eval.total, 6);
        assert!(approx(eval.accuracy, 4.0 / 6.0));

        let pos = &eval.per_class[Pos.index()];
        assert!(approx(pos.precision, 1.0));
        assert!(approx(pos.recall, 2.0 / 3.0));
        assert!(approx(pos.f1, 0.8));
        assert_eq!(pos.support, 3);

        let neg = &eval.per_class[Neg.index()];
        assert!(approx(neg.f1, 0.5));

        let neu = &eval.per_class[Neu.index()];
        assert!(approx(neu.f1, 2.0 / 3.0));

        assert!(approx(eval.macro_f1, (0.8 + 0.5 + 2.0 / 3.0) / 3.0));
        assert_eq!(eval.confusion[Pos.index()][Neg.index()], 1);
        assert_eq!(eval.confusion[Neg.index()][Neu.index()], 1);
    }

    #[test]
    fn macro_skips_unseen_labels() {
        let eval = Evaluation::from_pairs("test", [(Pos, Pos), (Neg, Neg)]);
        assert!(approx(eval.macro_f1, 1.0));
        assert_eq!(eval.per_class[Neu.index()].support, 0);
    }

    #[test]
    fn never_predicted_label_scores_zero() {
        let eval = Evaluation::from_pairs("test", [(Neu, Pos), (Pos, Pos)]);
        let neu = &eval.per_class[Neu.index()];
        assert_eq!(neu.precision, 0.0);
        assert_eq!(neu.f1, 0.0);
        // Positive: p = 0.5, r = 1.0, f1 = 2/3; neutral 0.
        assert!(approx(eval.macro_f1, (2.0 / 3.0) / 2.0));
    }

    #[test]
    fn empty_dataset() {
        let eval = Evaluation::from_pairs("test", std::iter::empty());
        assert_eq!(eval.total, 0);
        assert_eq!(eval.accuracy, 0.0);
        assert_eq!(eval.macro_f1, 0.0);
    }

    #[test]
    fn evaluate_lexicon() {
        let rows = tone_model::dataset::parse_tsv(
            "I love this!\tpositive\nI hate this\tnegative\nIt exists\tneutral\nnot bad\tnegative\n",
        );
        let eval = evaluate(&Analyzer::lexicon(), &rows);
        assert_eq!(eval.backend, "lexicon");
        assert_eq!(eval.total, 4);
        assert!(approx(eval.accuracy, 0.75));
        assert_eq!(eval.confusion[Neg.index()][Pos.index()], 1);
    }
}
