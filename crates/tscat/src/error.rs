use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors produced while turning a translation resource into a [`Catalog`].
///
/// Lookups never fail; only loading does. Callers that want the
/// source-language fallback should use
/// [`CatalogLoader::load_or_empty`](crate::CatalogLoader::load_or_empty).
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed translation resource at byte {position}: {reason}")]
    MalformedResource { reason: String, position: u64 },

    #[error("no translation resource for locale '{locale}' (searched {} path(s))", searched.len())]
    NotFound {
        locale: String,
        searched: Vec<PathBuf>,
    },

    #[error("invalid locale identifier: '{0}'")]
    InvalidLocale(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    #[must_use]
    pub fn malformed(reason: impl Into<String>, position: u64) -> Self {
        Self::MalformedResource {
            reason: reason.into(),
            position,
        }
    }

    /// Whether the failure means "no data for this locale" rather than "bad data".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
