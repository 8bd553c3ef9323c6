use anyhow::{Context, Result};
use std::path::Path;
use tone_core::Sentiment;

/// One row of a labeled dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledText {
    pub text: String,
    pub label: Sentiment,
}

/// Load a `text<TAB>label` file.
pub fn load_tsv(path: &Path) -> Result<Vec<LabeledText>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    Ok(parse_tsv(&content))
}

/// Parse `text<TAB>label` rows. Blank lines and lines without a tab are
/// skipped silently; unknown labels are skipped with a warning.
pub fn parse_tsv(content: &str) -> Vec<LabeledText> {
    let mut rows = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((text, label)) = line.split_once('\t') else {
            continue;
        };
        match label.parse::<Sentiment>() {
            Ok(label) => rows.push(LabeledText {
                text: text.to_string(),
                label,
            }),
            Err(e) => tracing::warn!(line = lineno + 1, "Skipping dataset row: {}", e),
        }
    }
    rows
}

/// Texts to analyze, one per non-blank line. When a line has a tab, only
/// the part before it is kept, so labeled files can be fed in unchanged.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split_once('\t').map_or(line, |(text, _)| text).trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rows() {
        let rows = parse_tsv("I love it\tpositive\nmeh\tneutral\n\nawful\tNEGATIVE\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text, "I love it");
        assert_eq!(rows[0].label, Sentiment::Positive);
        assert_eq!(rows[2].label, Sentiment::Negative);
    }

    #[test]
    fn skip_malformed_rows() {
        let rows = parse_tsv("no tab here\nfine\tmixed\nok\tneutral\n");
        assert_eq!(
            rows,
            vec![LabeledText {
                text: "ok".into(),
                label: Sentiment::Neutral
            }]
        );
    }

    #[test]
    fn split_on_first_tab_only() {
        let rows = parse_tsv("a\tb\tpositive\n");
        // Label "b\tpositive" is not a sentiment.
        assert!(rows.is_empty());
    }

    #[test]
    fn lines_strip_labels() {
        let texts = parse_lines("great stuff\tpositive\n\n  plain line  \n\tneutral\n");
        assert_eq!(texts, vec!["great stuff", "plain line"]);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        std::fs::write(&path, "good\tpositive\nbad\tnegative\n").unwrap();
        let rows = load_tsv(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_tsv(&dir.path().join("missing.tsv")).is_err());
    }
}
