//! Persisted settings: input folder and output file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default folder scanned by a batch run.
pub const DEFAULT_INPUT_FOLDER: &str = "./input";

/// Default output file of a batch run.
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Batch settings stored between runs.
///
/// Keys missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder scanned for documents
    pub input_folder: PathBuf,

    /// File the rows are written to
    #[serde(alias = "output_xlsx")]
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from(DEFAULT_INPUT_FOLDER),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Read settings from `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Read settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("serialization failed: {}", e)))?;
        fs::write(path.as_ref(), json)?;
        log::debug!("Saved settings to {}", path.as_ref().display());
        Ok(())
    }

    /// Set the input folder.
    pub fn with_input_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.input_folder = folder.into();
        self
    }

    /// Set the output file.
    pub fn with_output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.output_file = file.into();
        self
    }
}
