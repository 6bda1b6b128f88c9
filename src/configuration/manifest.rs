use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use config::{Config, ConfigError, File};
use serde_derive::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Session manifest: names the run and reconfigures sections that were
/// registered in code. Sections themselves cannot be defined here; the
/// manifest only flips enabled state, assigns timeout budgets, sets the
/// pacing delay and optionally requests a report file.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub name: String,
    /// Delay inserted between sections during a full run.
    #[serde(default, with = "crate::configuration::deserialize::opt_duration")]
    pub pacing: Option<Duration>,
    #[serde(default)]
    pub report: Option<PathBuf>,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SectionEntry {
    pub section: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Per-case wall time budget for the section. Zero means no budget.
    #[serde(default, with = "crate::configuration::deserialize::opt_duration")]
    pub timeout: Option<Duration>,
}

fn enabled_by_default() -> bool {
    true
}

impl Manifest {
    pub fn from(file: PathBuf) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from(file))?;
        config.try_into()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: CARGO_PKG_NAME.to_owned(),
            pacing: None,
            report: None,
            sections: Vec::new(),
        }
    }
}
