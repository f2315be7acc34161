use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tfd_domain::*;

pub const TFD_HOME_VAR: &str = "TFD_HOME";
pub const TFD_SHELL_VAR: &str = "TFD_SHELL";

const DEFAULT_SHELL: &str = "/bin/bash";

/// Where the solver is installed and which shell runs its entry script.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct TfdConfig {
    pub home: PathBuf,
    #[serde(default = "default_shell")]
    pub shell: PathBuf,
}

fn default_shell() -> PathBuf {
    which::which("bash").unwrap_or_else(|_| PathBuf::from(DEFAULT_SHELL))
}

impl TfdConfig {
    pub fn new(home: impl Into<PathBuf>) -> TfdConfig {
        TfdConfig {
            home: home.into(),
            shell: default_shell(),
        }
    }

    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> TfdConfig {
        self.shell = shell.into();
        self
    }

    pub fn from_env() -> TfdResult<TfdConfig> {
        let home = std::env::var_os(TFD_HOME_VAR).ok_or(TfdError::MissingEnv(TFD_HOME_VAR))?;
        let config = TfdConfig::new(home);
        Ok(match std::env::var_os(TFD_SHELL_VAR) {
            Some(shell) => config.with_shell(shell),
            None => config,
        })
    }

    pub fn from_json_file(path: &Path) -> TfdResult<TfdConfig> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// `<home>/downward/plan`
    pub fn script_path(&self) -> PathBuf {
        self.home.join("downward").join("plan")
    }
}
