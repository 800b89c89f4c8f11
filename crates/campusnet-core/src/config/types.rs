//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// Numeric type used for edge weights in graph input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightKind {
    /// Whole-number weights (`i64`)
    #[default]
    Integer,
    /// Floating-point weights (`f64`)
    Real,
}

/// Planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Weight type used when parsing graph input
    #[serde(default)]
    pub weights: WeightKind,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Text printed for unreachable vertices in human and records output
    #[serde(default = "default_unreachable")]
    pub unreachable: String,
}

fn default_unreachable() -> String {
    "INF".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            unreachable: default_unreachable(),
        }
    }
}
