//! JSON configuration for the `edge_map` tool.
use crate::filter::{BorderFill, DEFAULT_WORKERS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeMapConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub filter: FilterToolConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterToolConfig {
    pub workers: usize,
    pub border: BorderFill,
}

impl Default for FilterToolConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            border: BorderFill::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeMapConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_filter_defaults() {
        let config: EdgeMapConfig = serde_json::from_str(
            r#"{ "input": "img.jpg", "output": { "image": "result.png" } }"#,
        )
        .expect("valid config");
        assert_eq!(config.filter.workers, DEFAULT_WORKERS);
        assert_eq!(config.filter.border, BorderFill::Zero);
        assert!(config.output.report_json.is_none());
    }

    #[test]
    fn border_policy_parses_from_snake_case() {
        let config: EdgeMapConfig = serde_json::from_str(
            r#"{
                "input": "img.jpg",
                "filter": { "workers": 4, "border": "source" },
                "output": { "image": "result.png", "report_json": "timings.json" }
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.filter.workers, 4);
        assert_eq!(config.filter.border, BorderFill::Source);
        assert!(config.output.report_json.is_some());
    }
}
