use crate::artifact::{ModelArtifact, SentimentModel};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tone_core::ToneError;

/// Read and validate a model artifact.
///
/// Returns `Ok(None)` when nothing exists at `path`; an unreadable or
/// invalid artifact is an error.
pub fn load(path: &Path) -> Result<Option<SentimentModel>> {
    let Some(artifact) = load_artifact(path)? else {
        return Ok(None);
    };
    let model = SentimentModel::try_from(artifact)
        .with_context(|| format!("Invalid model artifact at {}", path.display()))?;
    Ok(Some(model))
}

/// Read the raw artifact without validating it.
pub fn load_artifact(path: &Path) -> Result<Option<ModelArtifact>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read(path)
        .with_context(|| format!("Failed to read model artifact: {}", path.display()))?;
    let artifact = serde_json::from_slice(&data)
        .with_context(|| format!("Failed to parse model artifact: {}", path.display()))?;
    Ok(Some(artifact))
}

/// Write an artifact as JSON, creating parent directories as needed.
pub fn save(artifact: &ModelArtifact, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ToneError::io(parent, e))?;
    }
    let data = serde_json::to_vec_pretty(artifact)?;
    fs::write(path, data)
        .map_err(|e| ToneError::io(path, e))
        .context("Failed to write model artifact")?;
    Ok(())
}
