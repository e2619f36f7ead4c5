//! Catalog configuration loaded from TOML.
//!
//! ```toml
//! # tscat.toml
//! translations_dirs = ["/opt/remote/translations", "translations"]
//! file_prefix = ""
//! locale = "pl_PL"
//! ```
//!
//! Environment overrides (applied by [`CatalogConfig::with_env_overrides`]):
//! `TSCAT_LOCALE` replaces `locale`, `TSCAT_TRANSLATIONS_DIR` is searched
//! before the configured directories.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::loader::CatalogLoader;
use crate::locale::{LOCALE_ENV, LocaleTag};

/// Directory searched before the configured ones.
pub const TRANSLATIONS_DIR_ENV: &str = "TSCAT_TRANSLATIONS_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Where resources live and which locale to start with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directories searched in order.
    pub translations_dirs: Vec<PathBuf>,
    /// Prepended to every resource file name.
    pub file_prefix: String,
    /// Startup locale. `None` defers to the environment, then source mode.
    pub locale: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            translations_dirs: vec![PathBuf::from("translations")],
            file_prefix: String::new(),
            locale: None,
        }
    }
}

impl CatalogConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply `TSCAT_LOCALE` and `TSCAT_TRANSLATIONS_DIR`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(LOCALE_ENV).ok(),
            std::env::var_os(TRANSLATIONS_DIR_ENV).map(PathBuf::from),
        )
    }

    fn with_overrides(mut self, locale: Option<String>, dir: Option<PathBuf>) -> Self {
        if let Some(locale) = locale.filter(|l| !l.trim().is_empty()) {
            self.locale = Some(locale);
        }
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.translations_dirs.insert(0, dir);
        }
        self
    }

    /// Check the configuration; an empty list means it is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.translations_dirs.is_empty() {
            errors.push("translations_dirs must name at least one directory".into());
        }
        if self
            .file_prefix
            .chars()
            .any(|c| std::path::is_separator(c) || c == '.')
        {
            errors.push(format!(
                "file_prefix must not contain path separators or '.', got '{}'",
                self.file_prefix
            ));
        }
        if let Some(locale) = &self.locale
            && LocaleTag::from_setting(locale).is_none()
            && LocaleTag::parse(locale).is_err()
        {
            errors.push(format!("locale '{locale}' is not a valid locale identifier"));
        }
        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Loader over the configured directories.
    #[must_use]
    pub fn loader(&self) -> CatalogLoader {
        CatalogLoader::new(self.translations_dirs.iter().cloned()).with_prefix(&self.file_prefix)
    }

    /// Startup locale: the configured one, else the environment's.
    ///
    /// `None` means source-language mode.
    #[must_use]
    pub fn effective_locale(&self) -> Option<String> {
        match &self.locale {
            Some(locale) => LocaleTag::from_setting(locale).map(|tag| tag.to_string()),
            None => LocaleTag::from_env().map(|tag| tag.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.translations_dirs, vec![PathBuf::from("translations")]);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn parses_toml() {
        let config = CatalogConfig::from_toml_str(
            r#"
translations_dirs = ["/opt/remote/translations", "extra"]
file_prefix = "remote_"
locale = "pl_PL"
"#,
        )
        .unwrap();
        assert_eq!(config.translations_dirs.len(), 2);
        assert_eq!(config.file_prefix, "remote_");
        assert_eq!(config.effective_locale().as_deref(), Some("pl_PL"));
        assert_eq!(
            config.loader().search_paths()[0],
            PathBuf::from("/opt/remote/translations")
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("locale = \"pl\"").unwrap();
        assert_eq!(config.translations_dirs, vec![PathBuf::from("translations")]);
        assert_eq!(config.locale.as_deref(), Some("pl"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            CatalogConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CatalogConfig::default()
            .with_overrides(Some("de_DE".into()), Some(PathBuf::from("/override")));
        assert_eq!(config.locale.as_deref(), Some("de_DE"));
        assert_eq!(config.translations_dirs[0], PathBuf::from("/override"));
        assert_eq!(config.translations_dirs.len(), 2);

        let untouched = CatalogConfig::default().with_overrides(Some("  ".into()), None);
        assert_eq!(untouched.locale, None);
    }

    #[test]
    fn validation_collects_all_errors() {
        let config = CatalogConfig {
            translations_dirs: Vec::new(),
            file_prefix: "../".into(),
            locale: Some("pl/PL".into()),
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(matches!(
            config.validated(),
            Err(ConfigError::Validation(e)) if e.len() == 3
        ));
    }

    #[test]
    fn posix_locale_means_source_mode() {
        let config = CatalogConfig {
            locale: Some("C".into()),
            ..CatalogConfig::default()
        };
        assert!(config.validate().is_empty());
        assert_eq!(config.effective_locale(), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            CatalogConfig::from_toml_file("/no/such/tscat.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
