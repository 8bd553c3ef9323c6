use crate::jsonl::round3;
use tone_analyze::Evaluation;
use tone_core::{Analysis, Sentiment};

/// Texts longer than this are shortened in tables.
const MAX_TEXT_CHARS: usize = 60;

/// One line per result: label, score, text.
pub fn render_batch(texts: &[String], results: &[Analysis]) -> String {
    texts
        .iter()
        .zip(results)
        .map(|(text, result)| {
            format!(
                "{:<9} {:>6.3}  {}\n",
                result.label.as_str(),
                round3(result.score),
                truncate(text)
            )
        })
        .collect()
}

/// Plain-text classification report.
pub fn render_evaluation(eval: &Evaluation) -> String {
    let mut out = format!(
        "Backend: {}\nSamples: {}\nAccuracy: {:.3}\nMacro-F1: {:.3}\n\n",
        eval.backend, eval.total, eval.accuracy, eval.macro_f1
    );

    out.push_str(&format!(
        "  {:<9} {:>9} {:>7} {:>7} {:>8}\n",
        "label", "precision", "recall", "f1", "support"
    ));
    for m in &eval.per_class {
        out.push_str(&format!(
            "  {:<9} {:>9.3} {:>7.3} {:>7.3} {:>8}\n",
            m.label.as_str(),
            m.precision,
            m.recall,
            m.f1,
            m.support
        ));
    }

    out.push_str("\nConfusion (rows = gold, columns = predicted):\n");
    out.push_str(&format!("  {:<9}", ""));
    for label in Sentiment::ALL {
        out.push_str(&format!(" {:>8}", label.as_str()));
    }
    out.push('\n');
    for gold in Sentiment::ALL {
        out.push_str(&format!("  {:<9}", gold.as_str()));
        for count in eval.confusion[gold.index()] {
            out.push_str(&format!(" {count:>8}"));
        }
        out.push('\n');
    }
    out
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_TEXT_CHARS - 1).collect();
    short.push('…');
    short
}
