//! Locating and loading a locale's resource file.
//!
//! Resource files are named `<prefix><candidate>.ts`, where candidates come
//! from [`LocaleTag::candidates`]. Search directories are tried in order for
//! each candidate, so `pl_PL` anywhere beats `pl` anywhere.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{LoadError, Result};
use crate::locale::LocaleTag;
use crate::ts;

/// Extension of translation resource files.
pub const RESOURCE_EXTENSION: &str = "ts";

/// Finds and parses translation resources.
///
/// ```no_run
/// use tscat::CatalogLoader;
///
/// let loader = CatalogLoader::new(["/opt/app/translations"]);
/// let catalog = loader.load_or_empty("pl_PL");
/// println!("{}", catalog.translate("Battery", "Battery health", None));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    search_paths: Vec<PathBuf>,
    file_prefix: String,
}

impl CatalogLoader {
    #[must_use]
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            file_prefix: String::new(),
        }
    }

    /// Prefix for resource file names, e.g. `"remote_"` for `remote_pl.ts`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    #[must_use]
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Path of the resource for one candidate name inside `dir`.
    #[must_use]
    pub fn resource_path(&self, dir: &Path, candidate: &str) -> PathBuf {
        dir.join(format!(
            "{}{candidate}.{RESOURCE_EXTENSION}",
            self.file_prefix
        ))
    }

    /// Resolve `locale` to a file and parse it.
    pub fn load(&self, locale: &str) -> Result<Catalog> {
        let tag = LocaleTag::parse(locale)?;
        let mut searched = Vec::new();
        for candidate in tag.candidates() {
            for dir in &self.search_paths {
                let path = self.resource_path(dir, &candidate);
                if path.is_file() {
                    tracing::debug!(locale, path = %path.display(), "loading translation resource");
                    return ts::parse_file(&path);
                }
                searched.push(path);
            }
        }
        Err(LoadError::NotFound {
            locale: locale.to_string(),
            searched,
        })
    }

    /// [`load`](Self::load), falling back to the empty catalog on any error.
    #[must_use]
    pub fn load_or_empty(&self, locale: &str) -> Catalog {
        match self.load(locale) {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::warn!(
                    locale,
                    %error,
                    "translation resource unavailable, using source language"
                );
                Catalog::empty()
            }
        }
    }

    /// Locale names with a resource in any search directory, sorted.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        let mut found: Vec<String> = self
            .search_paths
            .iter()
            .filter_map(|dir| std::fs::read_dir(dir).ok())
            .flatten()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != RESOURCE_EXTENSION {
                    return None;
                }
                let stem = path.file_stem()?.to_str()?;
                let name = stem.strip_prefix(self.file_prefix.as_str())?;
                LocaleTag::parse(name).ok().map(|_| name.to_string())
            })
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }
}
