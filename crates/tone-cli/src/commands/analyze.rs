use crate::build_analyzer;
use anyhow::Result;
use tone_core::ToneConfig;

pub fn run(config: &ToneConfig, text: &str, score: bool, json: bool) -> Result<()> {
    let analyzer = build_analyzer(config);
    let analysis = analyzer.analysis(text);
    tracing::info!("backend={} score={:.4}", analyzer.backend(), analysis.score);

    if json {
        println!("{}", serde_json::to_string(&analysis)?);
    } else if score {
        println!("{:.3}", analysis.score);
    } else {
        println!("{}", analysis.label);
    }
    Ok(())
}
