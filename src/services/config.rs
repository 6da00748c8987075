use crate::domain::models::HintConfig;
use std::path::Path;

/// Loads the YAML hint config. Missing required fields and unknown hint
/// types surface here as parse errors, before any cipher work starts.
pub fn load(path: &Path) -> anyhow::Result<HintConfig> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}
