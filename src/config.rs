//! Path context configuration: environment variables and config files.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::PathContext;
use crate::error::{Error, Result};
use crate::types::{CaseRule, OsType};

/// Environment variable overriding the detected OS type (`unix` or `windows`).
pub const OS_TYPE_ENV: &str = "ABSTRACT_FS_OS_TYPE";

/// Environment variable selecting the equality case rule (`filesystem` or `legacy`).
pub const CASE_RULE_ENV: &str = "ABSTRACT_FS_CASE_RULE";

/// Settings that resolve to a [`PathContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Forced OS type. `None` probes the platform.
    pub os_type: Option<OsType>,
    pub case_rule: CaseRule,
}

impl PathConfig {
    /// Read the configuration from the process environment. Unset variables
    /// keep their defaults; unknown values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(OS_TYPE_ENV) {
            match raw.parse::<OsType>() {
                Ok(os_type) => config.os_type = Some(os_type),
                Err(e) => log::warn!("Ignoring {}: {}", OS_TYPE_ENV, e),
            }
        }
        if let Some(raw) = lookup(CASE_RULE_ENV) {
            match raw.parse::<CaseRule>() {
                Ok(case_rule) => config.case_rule = case_rule,
                Err(e) => log::warn!("Ignoring {}: {}", CASE_RULE_ENV, e),
            }
        }
        config
    }

    /// Resolve to a context, probing the platform when no OS type is forced.
    pub fn into_context(self) -> PathContext {
        let os_type = self.os_type.unwrap_or_else(OsType::detect);
        PathContext::new(os_type).with_case_rule(self.case_rule)
    }
}

impl From<PathContext> for PathConfig {
    fn from(context: PathContext) -> Self {
        Self {
            os_type: Some(context.os_type),
            case_rule: context.case_rule,
        }
    }
}

/// Load a configuration file. The format follows the extension:
/// `.json`, `.json5`, `.yaml` or `.yml`.
pub async fn load_path_config(path: &Path) -> Result<PathConfig> {
    let display = path.display().to_string();
    let lower = display.to_lowercase();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(&display, e))?;

    let parsed: std::result::Result<PathConfig, String> =
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else if lower.ends_with(".json5") {
            json5::from_str(&content).map_err(|e| e.to_string())
        } else if lower.ends_with(".json") {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            return Err(Error::config(display, "unsupported extension"));
        };

    match parsed {
        Ok(config) => {
            log::debug!("Loaded path configuration from {}", display);
            Ok(config)
        }
        Err(problem) => {
            log::error!(
                "{} was unable to be parsed. Confirm formatting and try again.",
                display
            );
            Err(Error::config(display, problem))
        }
    }
}

/// Persist a configuration file as pretty JSON.
pub async fn save_path_config(path: &Path, config: &PathConfig) -> Result<()> {
    let display = path.display().to_string();
    let content =
        serde_json::to_string_pretty(config).map_err(|e| Error::config(&display, e))?;
    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::config(&display, e))?;
    Ok(())
}
