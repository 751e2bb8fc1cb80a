//! Scan configuration
//!
//! Every field has a default matching the stock site layout, so an empty
//! (or absent) `radius-check.yaml` behaves exactly like no config at all.

use crate::error::{CheckError, CheckResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the scan root when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "radius-check.yaml";

/// Which rules the scanner applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleToggles {
    /// CSS `border-radius` declarations
    pub css_border_radius: bool,
    /// Inline `borderRadius` style properties
    pub inline_border_radius: bool,
    /// `rounded-*` utility classes
    pub rounded_utility: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            css_border_radius: true,
            inline_border_radius: true,
            rounded_utility: true,
        }
    }
}

/// Collector and scanner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories under the root that are walked recursively
    pub scan_dirs: Vec<String>,
    /// Individual root-level files scanned when present
    pub extra_files: Vec<String>,
    /// File extensions (without the dot) that are scanned
    pub extensions: Vec<String>,
    /// Directory names never descended into
    pub ignore_dirs: Vec<String>,
    /// Enabled rules
    pub rules: RuleToggles,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_dirs: vec!["src".to_string()],
            extra_files: vec!["index.html".to_string()],
            extensions: ["ts", "tsx", "js", "jsx", "css", "html"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            ignore_dirs: ["node_modules", "dist", "build", "coverage", ".git"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            rules: RuleToggles::default(),
        }
    }
}

impl ScanConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml(path: &Path, yaml: &str) -> CheckResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| CheckError::config(path, e.to_string()))
    }

    /// Serialize to YAML, e.g. to print the effective configuration
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> CheckResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        let config = Self::from_yaml(path, &yaml)?;
        tracing::debug!(path = %path.display(), "loaded scan config");
        Ok(config)
    }

    /// Load `radius-check.yaml` from the root if present, else defaults
    pub fn discover(root: &Path) -> CheckResult<Self> {
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Set the walked directories
    #[must_use]
    pub fn with_scan_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scan_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the extra root-level files
    #[must_use]
    pub fn with_extra_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rule toggles
    #[must_use]
    pub const fn with_rules(mut self, rules: RuleToggles) -> Self {
        self.rules = rules;
        self
    }

    /// Whether a file extension is in the allow-list
    pub fn includes_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// Whether a directory name is ignored
    pub fn ignores_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }
}
