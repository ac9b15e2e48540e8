//! Runtime configuration for the demo binaries.
use crate::metrics::DistanceMetric;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Merge operation selected in a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Pointwise mean of the stack.
    Average,
    /// Nearest-to-reference against the stack mean.
    Nearest,
    /// Nearest, flipping to farthest past `farthest_threshold`.
    NearestFarthest,
    /// Brightest contributor per pixel.
    Lightest,
    /// Darkest contributor per pixel.
    Darkest,
    /// Sharpest contributor per pixel.
    Focus,
}

/// Config consumed by `merge_demo`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Frames to merge, in stack order (order decides tie-breaks).
    pub inputs: Vec<PathBuf>,
    /// Where the merged image is written; format follows the extension.
    pub output: PathBuf,
    pub mode: MergeMode,
    /// Distance metric for `nearest` mode.
    #[serde(default = "default_metric")]
    pub metric: DistanceMetric,
    /// 8-bit-scale threshold for `nearest_farthest`; omit for unbounded.
    #[serde(default)]
    pub farthest_threshold: Option<u32>,
}

fn default_metric() -> DistanceMetric {
    DistanceMetric::ChannelDelta
}

/// Read a [`MergeConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<MergeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: MergeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn full_config_parses() {
        let json = r#"{
            "inputs": ["a.png", "b.png"],
            "output": "out.png",
            "mode": "nearest_farthest",
            "metric": "perceptual",
            "farthest_threshold": 120
        }"#;
        let config: MergeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.mode, MergeMode::NearestFarthest);
        assert_eq!(config.metric, DistanceMetric::Perceptual);
        assert_eq!(config.farthest_threshold, Some(120));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"inputs": ["a.png"], "output": "out.png", "mode": "focus"}"#;
        let config: MergeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.metric, DistanceMetric::ChannelDelta);
        assert_eq!(config.farthest_threshold, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{"inputs": [], "output": "o.png", "mode": "focus", "sigma": 3}"#;
        assert!(serde_json::from_str::<MergeConfig>(json).is_err());
    }

    #[test]
    fn load_config_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"inputs": ["x.png", "y.png"], "output": "merged.png", "mode": "lightest"}}"#
        )
        .unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.mode, MergeMode::Lightest);
        assert_eq!(config.output, PathBuf::from("merged.png"));
    }

    #[test]
    fn load_config_reports_missing_files() {
        let err = load_config(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.contains("Failed to read config"), "{err}");
    }
}
