use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::DuplicatePolicy;

pub const CONFIG_FILE_NAME: &str = ".i18nkeysrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path substring that identifies locale modules.
    #[serde(default = "default_locale_dir_marker", rename = "localeDirectoryMarker")]
    pub locale_dir_marker: String,
    #[serde(default = "default_namespace_separator")]
    pub namespace_separator: String,
    /// Namespace prepended to referenced keys that contain no separator.
    #[serde(default = "default_default_namespace")]
    pub default_namespace: String,
    #[serde(default = "default_translation_fn_name", rename = "translationFunctionName")]
    pub translation_fn_name: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    /// Exit with a failure status when missing or unused keys are found.
    #[serde(default = "default_fail_on_findings")]
    pub fail_on_findings: bool,
}

fn default_locale_dir_marker() -> String {
    "shared/locales/".to_string()
}

fn default_namespace_separator() -> String {
    ".".to_string()
}

fn default_default_namespace() -> String {
    "common".to_string()
}

fn default_translation_fn_name() -> String {
    "t".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignores() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/dist/**",
        "**/build/**",
        "**/.next/**",
    ]
    .map(String::from)
    .to_vec()
}

fn default_fail_on_findings() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_dir_marker: default_locale_dir_marker(),
            namespace_separator: default_namespace_separator(),
            default_namespace: default_default_namespace(),
            translation_fn_name: default_translation_fn_name(),
            source_root: default_source_root(),
            includes: Vec::new(),
            ignores: default_ignores(),
            duplicates: DuplicatePolicy::default(),
            fail_on_findings: default_fail_on_findings(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects empty naming options and invalid glob patterns in `ignores` or `includes`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("localeDirectoryMarker", &self.locale_dir_marker),
            ("namespaceSeparator", &self.namespace_separator),
            ("translationFunctionName", &self.translation_fn_name),
        ] {
            if value.is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
