use crate::{ReportFormat, build_analyzer};
use anyhow::Result;
use std::path::Path;
use tone_analyze::evaluate;
use tone_core::{ToneConfig, ToneError};
use tone_render::human;

pub fn run(config: &ToneConfig, file: &Path, format: ReportFormat) -> Result<()> {
    let rows = tone_model::load_tsv(file)?;
    if rows.is_empty() {
        return Err(ToneError::Dataset(format!("no labeled rows in {}", file.display())).into());
    }

    let analyzer = build_analyzer(config);
    let report = evaluate(&analyzer, &rows);
    tracing::info!(
        "Evaluated {} rows: accuracy={:.3} macro_f1={:.3}",
        report.total,
        report.accuracy,
        report.macro_f1
    );

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Human => print!("{}", human::render_evaluation(&report)),
    }
    Ok(())
}
