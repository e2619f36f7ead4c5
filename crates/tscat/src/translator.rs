//! The active catalog, replaced atomically on locale change.
//!
//! Readers take an [`Arc<Catalog>`] snapshot; a locale switch publishes a
//! new catalog with a single `ArcSwap` store. Snapshots taken before the
//! switch stay valid until dropped. The read path takes no lock.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::catalog::Catalog;
use crate::error::LoadError;
use crate::loader::CatalogLoader;

static GLOBAL: LazyLock<Translator> = LazyLock::new(Translator::default);

/// The process-wide translator. Starts in source-language mode.
#[must_use]
pub fn translator() -> &'static Translator {
    &GLOBAL
}

/// Holder of the currently active [`Catalog`].
pub struct Translator {
    active: ArcSwap<Catalog>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Catalog::empty())
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let catalog = self.active.load();
        f.debug_struct("Translator")
            .field("language", &catalog.language())
            .field("messages", &catalog.message_count())
            .finish()
    }
}

impl Translator {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            active: ArcSwap::from_pointee(catalog),
        }
    }

    /// Current catalog. Holding the `Arc` pins it across locale switches.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.active.load_full()
    }

    /// Publish `catalog`, returning the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let previous = self.active.swap(Arc::clone(&next));
        tracing::info!(
            from = previous.language().unwrap_or("source"),
            to = next.language().unwrap_or("source"),
            messages = next.message_count(),
            "active catalog replaced"
        );
        previous
    }

    /// Load `locale` and publish it.
    ///
    /// Loading finishes before anything is published. On failure the empty
    /// catalog is published instead, so the application keeps running in
    /// the source language, and the error is returned for reporting.
    pub fn switch_locale(&self, loader: &CatalogLoader, locale: &str) -> Result<(), LoadError> {
        match loader.load(locale) {
            Ok(catalog) => {
                self.replace(catalog);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(locale, %error, "locale switch failed, using source language");
                self.replace(Catalog::empty());
                Err(error)
            }
        }
    }

    /// Return to source-language mode.
    pub fn reset(&self) -> Arc<Catalog> {
        self.replace(Catalog::empty())
    }

    /// See [`Catalog::translate`].
    #[must_use]
    pub fn tr(&self, context: &str, source: &str) -> String {
        self.active.load().translate(context, source, None).to_string()
    }

    /// See [`Catalog::translate`], with a disambiguation comment.
    #[must_use]
    pub fn tr_disambiguated(&self, context: &str, source: &str, disambiguation: &str) -> String {
        self.active
            .load()
            .translate(context, source, Some(disambiguation))
            .to_string()
    }

    /// See [`Catalog::translate_with_args`].
    #[must_use]
    pub fn tr_args<S: AsRef<str>>(&self, context: &str, source: &str, args: &[S]) -> String {
        self.active
            .load()
            .translate_with_args(context, source, args, None)
    }

    /// See [`Catalog::translate_plural`].
    #[must_use]
    pub fn tr_plural(&self, context: &str, source: &str, count: i64) -> String {
        self.active
            .load()
            .translate_plural(context, source, None, count)
    }
}
