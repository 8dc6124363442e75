// Configuration for the glossary tools, loaded from glossary.toml
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{GlossaryError, Result, DEFAULT_LETTER_PLACEHOLDER};

pub const DEFAULT_CONFIG_FILE: &str = "glossary.toml";
pub const CONFIG_ENV_VAR: &str = "GLOSSARY_CONFIG";

pub const DEFAULT_SOURCE: &str = "Williamson, K. and Johanson, G. (eds) (2018) Research Methods: Information, Systems, and Contexts. 2nd edn.";
pub const DEFAULT_CUSTOM_SOURCE: &str = "Custom entry (user-defined)";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GlossaryConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub custom: CustomConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_input_pdf")]
    pub input_pdf: PathBuf,
    #[serde(default = "default_output_json")]
    pub output_json: PathBuf,
    #[serde(default = "default_custom_json")]
    pub custom_json: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_pdf: default_input_pdf(),
            output_json: default_output_json(),
            custom_json: default_custom_json(),
        }
    }
}

/// Everything the extractor needs, passed in explicitly rather than read from globals.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExtractionSettings {
    #[serde(default = "default_source")]
    pub source: String,
    /// Literal strings removed from terms (PDF header bleed).
    #[serde(default = "default_strip_artifacts")]
    pub strip_artifacts: Vec<String>,
    /// Terms dropped entirely, compared case-insensitively.
    #[serde(default = "default_excluded_terms")]
    pub excluded_terms: Vec<String>,
    #[serde(default = "default_placeholder")]
    pub letter_placeholder: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            strip_artifacts: default_strip_artifacts(),
            excluded_terms: default_excluded_terms(),
            letter_placeholder: default_placeholder(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomConfig {
    #[serde(default = "default_custom_source")]
    pub default_source: String,
}

impl Default for CustomConfig {
    fn default() -> Self {
        Self {
            default_source: default_custom_source(),
        }
    }
}

fn default_input_pdf() -> PathBuf { PathBuf::from("public/docs/Glossary-of-terms.pdf") }
fn default_output_json() -> PathBuf { PathBuf::from("public/docs/index.json") }
fn default_custom_json() -> PathBuf { PathBuf::from("public/docs/custom.json") }
fn default_source() -> String { DEFAULT_SOURCE.to_string() }
fn default_strip_artifacts() -> Vec<String> { vec!["Glossaryoftermsusedinresearch".to_string()] }
fn default_excluded_terms() -> Vec<String> { vec!["california".to_string(), "variable".to_string()] }
fn default_placeholder() -> String { DEFAULT_LETTER_PLACEHOLDER.to_string() }
fn default_custom_source() -> String { DEFAULT_CUSTOM_SOURCE.to_string() }

impl GlossaryConfig {
    /// Resolve and load the configuration.
    ///
    /// Order: `explicit` path, then `$GLOSSARY_CONFIG`, then `./glossary.toml` if it
    /// exists, then built-in defaults. A named file that is missing is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }
        log::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GlossaryError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = toml::from_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
