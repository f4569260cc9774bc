//! Seeder configuration
//!
//! Sources, later ones win:
//! 1. Built-in defaults (the public demo server and the demo extension URL)
//! 2. `seeder.toml` in the working directory, or an explicit `--config` file
//! 3. Environment variables prefixed with `SEEDER__`, e.g.
//!    `SEEDER__FHIR_BASE`, `SEEDER__LOGGING__LEVEL`
//!
//! With nothing configured the seeder targets the fixed demo endpoint and
//! writes `uti_demo_patients.json`.

use crate::cases::{builtin_cases, load_cases, DemoDefinition};
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FHIR_BASE: &str = "https://thas.mohw.gov.tw/v/r4/fhir";
pub const DEFAULT_EXTENSION_URL: &str =
    "https://cch.org.tw/fhir/StructureDefinition/uti-demo-input";
pub const DEFAULT_OUTPUT_PATH: &str = "uti_demo_patients.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct SeederConfig {
    /// FHIR server base, without the resource type
    pub fhir_base: String,

    /// Extension slot the demo case is stored under
    pub extension_url: String,

    pub timeout_seconds: u64,

    /// Where the run manifest is written
    pub output_path: PathBuf,

    /// Alternate demo case catalogue; the built-in six are used when unset
    #[serde(default)]
    pub cases_path: Option<PathBuf>,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level for the seeder's own targets; `RUST_LOG` overrides
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: PathBuf,
    pub file_prefix: String,
    pub file_rotation: FileRotation,
}

/// How often the log file rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRotation {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl SeederConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// An explicitly given file must exist; the implicit `seeder.toml` is optional.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let builder = config::Config::builder()
            .set_default("fhir_base", DEFAULT_FHIR_BASE)?
            .set_default("extension_url", DEFAULT_EXTENSION_URL)?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS as i64)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("logging.file_enabled", false)?
            .set_default("logging.file_directory", "logs")?
            .set_default("logging.file_prefix", "uti-demo-seed")?
            .set_default("logging.file_rotation", "never")?;

        let builder = match file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("seeder").required(false)),
        };

        let settings = builder
            .add_source(config::Environment::with_prefix("SEEDER").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.fhir_base.trim().is_empty() {
            return Err("fhir_base must not be empty".to_string());
        }
        if self.extension_url.trim().is_empty() {
            return Err("extension_url must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than zero".to_string());
        }
        if self.output_path.as_os_str().is_empty() {
            return Err("output_path must not be empty".to_string());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The catalogue this run will submit.
    pub fn demo_cases(&self) -> Result<Vec<DemoDefinition>> {
        match &self.cases_path {
            Some(path) => load_cases(path),
            None => builtin_cases(),
        }
    }
}
