//! Configuration type definitions.

use knuffel::Decode;
use std::path::PathBuf;

use crate::error::FileError;
use crate::policy::{SecurityPolicy, parse_mode};

/// Expand tilde (~) prefix to the user's home directory.
/// Handles both "~" alone and "~/path/to/something" patterns.
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Main configuration structure parsed from securefile.kdl.
#[derive(Debug, Decode, Clone, Default)]
pub struct Config {
    #[knuffel(child)]
    pub defaults: Option<Defaults>,

    #[knuffel(child)]
    pub policy: Option<PolicyConfig>,
}

/// Default settings for the CLI.
#[derive(Debug, Decode, Clone, Default)]
pub struct Defaults {
    #[knuffel(property)]
    pub editor: Option<String>,

    /// Directory that holds the scratch copy during `edit`.
    #[knuffel(property(name = "temp_dir"))]
    pub temp_dir: Option<String>,

    /// One of error, warn, info, debug, trace.
    #[knuffel(property(name = "log_level"))]
    pub log_level: Option<String>,
}

/// Override of the security policy. Unset fields keep the root defaults.
#[derive(Debug, Decode, Clone, Default)]
pub struct PolicyConfig {
    /// Octal mode string, e.g. "440".
    #[knuffel(property)]
    pub mode: Option<String>,

    #[knuffel(property)]
    pub uid: Option<u32>,

    #[knuffel(property)]
    pub gid: Option<u32>,
}

impl Config {
    /// Get the editor, defaulting to EDITOR env var or "vi"
    pub fn editor(&self) -> String {
        self.defaults
            .as_ref()
            .and_then(|d| d.editor.clone())
            .unwrap_or_else(|| std::env::var("EDITOR").unwrap_or_else(|_| "vi".into()))
    }

    /// Get the scratch directory, defaulting to the system temp dir.
    /// Expands ~ to the user's home directory if present.
    pub fn temp_dir(&self) -> PathBuf {
        self.defaults
            .as_ref()
            .and_then(|d| d.temp_dir.clone())
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Get the log level, defaulting to "warn"
    pub fn log_level(&self) -> String {
        self.defaults
            .as_ref()
            .and_then(|d| d.log_level.clone())
            .unwrap_or_else(|| "warn".into())
    }

    /// Build the security policy, falling back to root:root 440 per field.
    pub fn policy(&self) -> crate::error::Result<SecurityPolicy> {
        let mut policy = SecurityPolicy::ROOT_READ_ONLY;
        let Some(overrides) = &self.policy else {
            return Ok(policy);
        };

        if let Some(mode) = &overrides.mode {
            policy.mode = parse_mode(mode).ok_or_else(|| {
                FileError::config(format!(
                    "Invalid policy mode '{}': expected up to three octal digits (e.g. 440)",
                    mode
                ))
            })?;
        }
        if let Some(uid) = overrides.uid {
            policy.uid = uid;
        }
        if let Some(gid) = overrides.gid {
            policy.gid = gid;
        }
        Ok(policy)
    }
}
