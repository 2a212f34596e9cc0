//! Configuration schema types for `hqscale.toml`
//!
//! Every section and field is optional; missing values take the defaults
//! documented on each field.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bitmap::BitDepth;
use crate::classify::{Classifier, Metric, Thresholds};
use crate::scaler::ScaleFactor;

/// Scaling section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Enlargement factor, 2 or 3
    #[serde(default = "default_factor")]
    pub factor: u32,
    /// Pixel difference formula
    #[serde(default)]
    pub metric: Metric,
    /// Process rows on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Worker threads for the parallel path (0 = one per core)
    #[serde(default)]
    pub threads: usize,
}

fn default_factor() -> u32 {
    2
}

fn default_parallel() -> bool {
    true
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            factor: default_factor(),
            metric: Metric::default(),
            parallel: default_parallel(),
            threads: 0,
        }
    }
}

/// Output section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Bits per pixel for BMP output, 24 or 32
    #[serde(default = "default_bit_depth")]
    pub bit_depth: u16,
    /// Directory for derived output paths (defaults to the input's directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_bit_depth() -> u16 {
    32
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            bit_depth: default_bit_depth(),
            dir: None,
        }
    }
}

/// Root configuration structure for `hqscale.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HqConfig {
    #[serde(default)]
    pub scale: ScaleConfig,
    /// Per-channel difference thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "scale.factor")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hqscale.toml: '{}' {}", self.field, self.message)
    }
}

impl HqConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if ScaleFactor::try_from(self.scale.factor).is_err() {
            errors.push(ConfigValidationError {
                field: "scale.factor".to_string(),
                message: format!("must be 2 or 3, got {}", self.scale.factor),
            });
        }

        if BitDepth::try_from(self.output.bit_depth).is_err() {
            errors.push(ConfigValidationError {
                field: "output.bit_depth".to_string(),
                message: format!("must be 24 or 32, got {}", self.output.bit_depth),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Scale factor, falling back to 2x if the configured one is invalid.
    ///
    /// Call [`HqConfig::validate`] first to report bad values.
    pub fn factor(&self) -> ScaleFactor {
        ScaleFactor::try_from(self.scale.factor).unwrap_or(ScaleFactor::X2)
    }

    /// Output bit depth, falling back to 32 if the configured one is invalid.
    pub fn bit_depth(&self) -> BitDepth {
        BitDepth::try_from(self.output.bit_depth).unwrap_or(BitDepth::Bits32)
    }

    /// Classifier built from the metric and thresholds.
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.scale.metric, self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: HqConfig = toml::from_str("").unwrap();
        assert_eq!(config, HqConfig::default());
        assert_eq!(config.scale.factor, 2);
        assert_eq!(config.scale.metric, Metric::Sharp);
        assert!(config.scale.parallel);
        assert_eq!(config.output.bit_depth, 32);
        assert_eq!(config.output.dir, None);
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[scale]
factor = 3
metric = "smooth"
parallel = false
threads = 4

[thresholds]
y = 32
u = 5
v = 4
a = 64

[output]
bit_depth = 24
dir = "out"
"#;
        let config: HqConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.factor(), ScaleFactor::X3);
        assert_eq!(config.scale.metric, Metric::Smooth);
        assert!(!config.scale.parallel);
        assert_eq!(config.scale.threads, 4);
        assert_eq!(
            config.thresholds,
            Thresholds {
                y: 32,
                u: 5,
                v: 4,
                a: 64
            }
        );
        assert_eq!(config.bit_depth(), BitDepth::Bits24);
        assert_eq!(config.output.dir, Some(PathBuf::from("out")));

        let classifier = config.classifier();
        assert_eq!(classifier.metric(), Metric::Smooth);
        assert_eq!(classifier.thresholds().y, 32);
    }

    #[test]
    fn test_partial_thresholds_keep_defaults() {
        let config: HqConfig = toml::from_str("[thresholds]\ny = 10\n").unwrap();
        assert_eq!(config.thresholds.y, 10);
        assert_eq!(config.thresholds.u, 7);
        assert_eq!(config.thresholds.a, 80);
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let result: Result<HqConfig, _> = toml::from_str("[scale]\nmetric = \"blurry\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let toml = r#"
[scale]
factor = 4

[output]
bit_depth = 16
"#;
        let config: HqConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "scale.factor"));
        assert!(errors.iter().any(|e| e.field == "output.bit_depth"));
        assert_eq!(
            errors[0].to_string(),
            "hqscale.toml: 'scale.factor' must be 2 or 3, got 4"
        );
    }
}
