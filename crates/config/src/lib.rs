//! Configuration models and loaders for aerodynamic evaluation cases.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default tolerance for truth comparisons.
pub const DEFAULT_TRUTH_TOLERANCE: f64 = 1.0e-6;

/// A single evaluation case: geometry, model settings, samples and curves.
#[derive(Debug, Deserialize, Clone)]
pub struct CaseConfig {
    pub name: String,
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub settings: AeroSettingsConfig,
    #[serde(default)]
    pub angle_unit: AngleUnitConfig,
    pub angle_of_attack: Vec<f64>,
    pub pre_stall: BTreeMap<String, CurveConfig>,
    pub post_stall: BTreeMap<String, CurveConfig>,
    #[serde(default)]
    pub truth: Option<TruthConfig>,
}

/// Aircraft reference area and the wings summed over.
#[derive(Debug, Deserialize, Clone)]
pub struct GeometryConfig {
    pub reference_area_m2: f64,
    pub wings: Vec<WingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WingConfig {
    pub tag: String,
    pub reference_area_m2: f64,
    #[serde(default)]
    pub vertical: bool,
}

/// AERODAS tunables. Both default to zero.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct AeroSettingsConfig {
    /// Radians, regardless of `angle_unit`.
    #[serde(default)]
    pub section_zero_lift_angle_of_attack: f64,
    #[serde(default)]
    pub drag_coefficient_increment: f64,
}

/// Unit of the `angle_of_attack` samples.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnitConfig {
    #[default]
    #[serde(rename = "deg")]
    Degrees,
    #[serde(rename = "rad")]
    Radians,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurveConfig {
    pub lift_coefficient: Vec<f64>,
    pub drag_coefficient: Vec<f64>,
}

/// Stored reference results for regression checks.
#[derive(Debug, Deserialize, Clone)]
pub struct TruthConfig {
    pub lift_coefficient: Vec<f64>,
    pub drag_coefficient: Vec<f64>,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TRUTH_TOLERANCE
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read case file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("case name '{0}' appears more than once")]
    DuplicateCase(String),
}

/// Load cases from a YAML list, a single TOML case, or a directory of TOML cases.
///
/// Directory entries are read in file-name order. Case names must be unique
/// (ignoring ASCII case) since [`find_case`] looks them up by name.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<CaseConfig>, ConfigError> {
    let path = path.as_ref();
    let cases = match CaseSource::of(path) {
        CaseSource::Directory => toml_files_in(path)?
            .iter()
            .map(|file| read_toml_case(file))
            .collect::<Result<Vec<_>, _>>()?,
        CaseSource::TomlFile => vec![read_toml_case(path)?],
        CaseSource::YamlFile => serde_yaml::from_reader(File::open(path)?)?,
    };
    debug!(path = %path.display(), cases = cases.len(), "loaded cases");

    let mut seen = BTreeSet::new();
    for case in &cases {
        if !seen.insert(case.name.to_ascii_lowercase()) {
            return Err(ConfigError::DuplicateCase(case.name.clone()));
        }
    }
    Ok(cases)
}

/// Find a case by name (case-insensitive).
pub fn find_case<'a>(cases: &'a [CaseConfig], name: &str) -> Option<&'a CaseConfig> {
    cases.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

enum CaseSource {
    Directory,
    TomlFile,
    YamlFile,
}

impl CaseSource {
    fn of(path: &Path) -> Self {
        if path.is_dir() {
            CaseSource::Directory
        } else if is_toml(path) {
            CaseSource::TomlFile
        } else {
            CaseSource::YamlFile
        }
    }
}

fn toml_files_in(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let file = entry?.path();
        if is_toml(&file) {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

fn read_toml_case(file: &Path) -> Result<CaseConfig, ConfigError> {
    let contents = std::fs::read_to_string(file)?;
    Ok(toml::from_str(&contents)?)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
