//! Application settings, read from `.config/cappella.json` when present

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = ".config/cappella.json";
pub const LIBRARY_ENV_VAR: &str = "CAPPELLA_LIBRARY";

/// Tuning for the incremental search controller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet interval after the last keystroke before a query fires
    pub debounce_ms: u64,
    /// Upper bound on items requested from the catalog per query
    pub result_limit: usize,
    /// Shorter whitespace-separated fragments are ignored
    pub min_fragment_len: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            result_limit: 10,
            min_fragment_len: 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library_path: PathBuf,
    pub log_dir: PathBuf,
    pub search: SearchConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from("library.json"),
            log_dir: PathBuf::from(".logs"),
            search: SearchConfig::default(),
        }
    }
}

impl Settings {
    /// Settings from `path`, or defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Settings file, then `CAPPELLA_LIBRARY`, then the first command line
    /// argument; later sources win for the library path.
    pub fn load(cli_library: Option<PathBuf>) -> Result<Self> {
        let mut settings = Self::load_from(Path::new(SETTINGS_FILE))?;
        settings.apply_overrides(std::env::var_os(LIBRARY_ENV_VAR).map(PathBuf::from), cli_library);
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, env_library: Option<PathBuf>, cli_library: Option<PathBuf>) {
        if let Some(path) = cli_library.or(env_library) {
            self.library_path = path;
        }
    }
}
