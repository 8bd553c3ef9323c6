use serde::Serialize;
use std::io::Write;
use tone_core::{Analysis, Sentiment, Thresholds};

/// Writes batch analysis results as JSONL: a header line, one line per
/// input text, and a footer with label counts.
pub struct JsonlWriter {
    backend: String,
    thresholds: Thresholds,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header {
    version: String,
    backend: String,
    thresholds: ThresholdsOut,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ThresholdsOut {
    positive: f64,
    negative: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry<'a> {
    line: usize,
    text: &'a str,
    label: Sentiment,
    score: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total: usize,
    positive: usize,
    negative: usize,
    neutral: usize,
}

impl JsonlWriter {
    pub fn new(backend: &str) -> Self {
        Self {
            backend: backend.to_string(),
            thresholds: Thresholds::default(),
        }
    }

    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Render results as a JSONL string. `texts` and `results` are paired by position.
    pub fn render(&self, texts: &[String], results: &[Analysis]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, texts, results)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        texts: &[String],
        results: &[Analysis],
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            texts.len() == results.len(),
            "{} texts but {} results",
            texts.len(),
            results.len()
        );

        let header = Header {
            version: "1".to_string(),
            backend: self.backend.clone(),
            thresholds: ThresholdsOut {
                positive: self.thresholds.positive,
                negative: self.thresholds.negative,
            },
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        let mut counts = [0usize; 3];
        for (i, (text, result)) in texts.iter().zip(results).enumerate() {
            let entry = Entry {
                line: i + 1,
                text,
                label: result.label,
                score: round3(result.score),
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
            counts[result.label.index()] += 1;
        }

        let footer = Footer {
            total: results.len(),
            positive: counts[Sentiment::Positive.index()],
            negative: counts[Sentiment::Negative.index()],
            neutral: counts[Sentiment::Neutral.index()],
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}

/// Scores are reported to three decimals everywhere.
pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
