//! Grading configuration: formula weights, thresholds, and rounding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{RoundingPolicy, EXCELLENT_TARGET, PASSING_TARGET, PASS_THRESHOLD};

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Weights and policy for the record-system final grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Weight of the lab average.
    #[serde(default = "default_record_lab_weight")]
    pub lab_weight: f64,
    /// Weight of the prelim exam.
    #[serde(default = "default_record_prelim_weight")]
    pub prelim_weight: f64,
    /// Weight of the attendance grade.
    #[serde(default = "default_record_attendance_weight")]
    pub attendance_weight: f64,
    /// Minimum rounded grade that passes.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: i64,
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

fn default_record_lab_weight() -> f64 {
    0.40
}
fn default_record_prelim_weight() -> f64 {
    0.40
}
fn default_record_attendance_weight() -> f64 {
    0.20
}
fn default_pass_threshold() -> i64 {
    PASS_THRESHOLD
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            lab_weight: default_record_lab_weight(),
            prelim_weight: default_record_prelim_weight(),
            attendance_weight: default_record_attendance_weight(),
            pass_threshold: default_pass_threshold(),
            rounding: RoundingPolicy::default(),
        }
    }
}

/// Weights and targets for the required-exam calculator.
///
/// `class_standing = attendance_weight * attendance + lab_weight * lab_average`
/// and `grade = exam_weight * exam + standing_weight * class_standing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_calc_attendance_weight")]
    pub attendance_weight: f64,
    #[serde(default = "default_calc_lab_weight")]
    pub lab_weight: f64,
    #[serde(default = "default_exam_weight")]
    pub exam_weight: f64,
    #[serde(default = "default_standing_weight")]
    pub standing_weight: f64,
    #[serde(default = "default_passing_target")]
    pub passing_target: f64,
    #[serde(default = "default_excellent_target")]
    pub excellent_target: f64,
}

fn default_calc_attendance_weight() -> f64 {
    0.40
}
fn default_calc_lab_weight() -> f64 {
    0.60
}
fn default_exam_weight() -> f64 {
    0.30
}
fn default_standing_weight() -> f64 {
    0.70
}
fn default_passing_target() -> f64 {
    PASSING_TARGET
}
fn default_excellent_target() -> f64 {
    EXCELLENT_TARGET
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            attendance_weight: default_calc_attendance_weight(),
            lab_weight: default_calc_lab_weight(),
            exam_weight: default_exam_weight(),
            standing_weight: default_standing_weight(),
            passing_target: default_passing_target(),
            excellent_target: default_excellent_target(),
        }
    }
}

/// Top-level gradebook configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    #[serde(default)]
    pub record: RecordConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Validate a configuration.
/// Returns every problem found, not just the first.
pub fn validate_config(config: &GradebookConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let record = &config.record;
    check_weights(
        &mut errors,
        "record",
        &[
            ("lab_weight", record.lab_weight),
            ("prelim_weight", record.prelim_weight),
            ("attendance_weight", record.attendance_weight),
        ],
    );

    let calc = &config.calculator;
    check_weights(
        &mut errors,
        "calculator",
        &[
            ("attendance_weight", calc.attendance_weight),
            ("lab_weight", calc.lab_weight),
        ],
    );
    check_weights(
        &mut errors,
        "calculator",
        &[
            ("exam_weight", calc.exam_weight),
            ("standing_weight", calc.standing_weight),
        ],
    );
    if calc.exam_weight <= 0.0 {
        errors.push("calculator.exam_weight: must be positive".to_string());
    }
    if calc.passing_target > calc.excellent_target {
        errors.push(format!(
            "calculator.passing_target: {} exceeds excellent_target {}",
            calc.passing_target, calc.excellent_target
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_weights(errors: &mut Vec<String>, section: &str, weights: &[(&str, f64)]) {
    for (name, weight) in weights {
        if !weight.is_finite() || *weight < 0.0 {
            errors.push(format!("{section}.{name}: must be non-negative"));
        }
    }
    let sum: f64 = weights.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        let names: Vec<&str> = weights.iter().map(|(n, _)| *n).collect();
        errors.push(format!(
            "{section}: {} must sum to 1.0 (got {sum})",
            names.join(" + ")
        ));
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable overrides: `GRADEBOOK_PASS_THRESHOLD`, `GRADEBOOK_ROUNDING`.
pub fn load_config() -> Result<GradebookConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            parse_config_file(&path)?
        }
        None => GradebookConfig::default(),
    };

    apply_env_overrides(&mut config)?;

    if let Err(errors) = validate_config(&config) {
        anyhow::bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<GradebookConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<GradebookConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn apply_env_overrides(config: &mut GradebookConfig) -> Result<()> {
    if let Ok(threshold) = std::env::var("GRADEBOOK_PASS_THRESHOLD") {
        config.record.pass_threshold = threshold
            .trim()
            .parse()
            .with_context(|| format!("GRADEBOOK_PASS_THRESHOLD is not an integer: {threshold}"))?;
    }

    if let Ok(rounding) = std::env::var("GRADEBOOK_ROUNDING") {
        config.record.rounding = rounding
            .parse()
            .map_err(|e: String| anyhow::anyhow!("GRADEBOOK_ROUNDING: {e}"))?;
    }

    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
