//! Configuration file loading and saving.

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::{FileError, Result};

/// System-wide config consulted after the per-user locations.
const SYSTEM_CONFIG_PATH: &str = "/etc/securefile.kdl";

impl Config {
    /// Get the explicit ~/.config/securefile/securefile.kdl path (XDG-style)
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config/securefile/securefile.kdl"))
    }

    /// Get the list of config file search paths in priority order
    fn get_config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. ./securefile.kdl (current directory)
        paths.push(PathBuf::from("securefile.kdl"));

        // 2. ~/.config/securefile/securefile.kdl
        if let Some(xdg_path) = Self::xdg_config_path() {
            paths.push(xdg_path);
        }

        // 3. Platform-native config directory, unless identical to the XDG path
        if let Some(config_dir) = dirs::config_dir() {
            let native_path = config_dir.join("securefile/securefile.kdl");
            if Self::xdg_config_path().as_ref() != Some(&native_path) {
                paths.push(native_path);
            }
        }

        // 4. /etc/securefile.kdl
        paths.push(PathBuf::from(SYSTEM_CONFIG_PATH));

        paths
    }

    /// Find existing config file by searching all standard locations
    pub fn find_existing_config() -> Option<PathBuf> {
        Self::get_config_search_paths()
            .into_iter()
            .find(|path| path.exists())
    }

    /// Get the default config path (~/.config/securefile/securefile.kdl)
    pub fn default_config_path() -> PathBuf {
        Self::xdg_config_path().unwrap_or_else(|| PathBuf::from("securefile.kdl"))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FileError::config(format!("could not read {}: {}", path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| match e {
            FileError::Config(msg) => FileError::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse configuration from KDL text
    pub fn parse(content: &str) -> Result<Self> {
        let config = knuffel::parse::<Config>("securefile.kdl", content)
            .map_err(|e| FileError::config(e.to_string()))?;
        // Surface a bad policy at load time rather than on first use.
        config.policy()?;
        Ok(config)
    }

    /// Load configuration, searching the standard locations
    pub fn load() -> Result<Self> {
        match Self::find_existing_config() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    /// Generate a config file with default values
    pub fn generate_config_file(path: Option<PathBuf>, overwrite: bool) -> Result<PathBuf> {
        let config_path = path.unwrap_or_else(Self::default_config_path);

        if config_path.exists() && !overwrite {
            return Err(FileError::validation(format!(
                "Config file already exists at: {}. Use --overwrite to replace it.",
                config_path.display()
            )));
        }

        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| FileError::from_io(parent, e))?;
        }

        let kdl_content = r#"// securefile configuration
// log_level is one of error, warn, info, debug, trace
defaults editor="vi" log_level="warn"
// temp_dir="/tmp"

// Mode (octal), owner and group a file must carry to be considered secure.
// Unset fields default to mode 440 owned by root:root.
// policy mode="440" uid=0 gid=0
"#;

        std::fs::write(&config_path, kdl_content)
            .map_err(|e| FileError::from_io(&config_path, e))?;
        crate::utils::restrict_file_permissions(&config_path)?;
        Ok(config_path)
    }

    /// Serialize config to KDL format
    pub fn to_kdl(&self) -> String {
        let mut output = String::new();
        output.push_str("// securefile configuration\n\n");

        output.push_str("defaults");
        if let Some(d) = &self.defaults {
            if let Some(editor) = &d.editor {
                output.push_str(&format!(" editor=\"{}\"", editor));
            }
            if let Some(temp_dir) = &d.temp_dir {
                output.push_str(&format!(" temp_dir=\"{}\"", temp_dir));
            }
            if let Some(log_level) = &d.log_level {
                output.push_str(&format!(" log_level=\"{}\"", log_level));
            }
        }
        output.push('\n');

        if let Some(p) = &self.policy {
            output.push_str("policy");
            if let Some(mode) = &p.mode {
                output.push_str(&format!(" mode=\"{}\"", mode));
            }
            if let Some(uid) = p.uid {
                output.push_str(&format!(" uid={}", uid));
            }
            if let Some(gid) = p.gid {
                output.push_str(&format!(" gid={}", gid));
            }
            output.push('\n');
        }

        output
    }
}
