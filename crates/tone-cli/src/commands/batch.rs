use crate::{BatchFormat, build_analyzer};
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;
use tone_core::ToneConfig;
use tone_model::dataset::parse_lines;
use tone_render::{JsonlWriter, human};

pub fn run(config: &ToneConfig, file: &Path, format: BatchFormat) -> Result<()> {
    let content = read_input(file)?;
    let texts = parse_lines(&content);
    if texts.is_empty() {
        tracing::warn!("No texts in {}", file.display());
    }

    let analyzer = build_analyzer(config);
    let results = analyzer.analyze_batch(&texts);
    tracing::info!("Analyzed {} texts with {}", results.len(), analyzer.backend());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        BatchFormat::Jsonl => JsonlWriter::new(analyzer.backend())
            .thresholds(analyzer.current_thresholds())
            .write_to(&mut out, &texts, &results)?,
        BatchFormat::Human => out.write_all(human::render_batch(&texts, &results).as_bytes())?,
    }
    Ok(())
}

/// Read the whole input; `-` means stdin.
fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
