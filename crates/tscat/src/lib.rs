#![forbid(unsafe_code)]

//! Runtime message catalogs read from Qt Linguist `.ts` resources.
//!
//! A [`Catalog`] maps `(context, source, disambiguation)` to a translated
//! string. Lookups never fail: a missing or unfinished entry yields the
//! source text, so an application with no resource at all runs in its
//! source language.
//!
//! # Pieces
//! - [`ts`] parses and serializes the XML resource format.
//! - [`CatalogLoader`] resolves a locale to a file over search directories.
//! - [`Translator`] holds the active catalog and swaps it atomically.
//! - [`args`] substitutes `%1`..`%99` and `%n` placeholders.
//! - [`report`] computes coverage and placeholder consistency.
//!
//! ```
//! use tscat::Catalog;
//!
//! let catalog = Catalog::from_ts_str(
//!     r#"<TS language="pl"><context><name>Net</name><message>
//!        <source>Request error %1</source>
//!        <translation>Błąd zapytania %1</translation>
//!        </message></context></TS>"#,
//! )
//! .unwrap();
//! assert_eq!(
//!     catalog.translate_with_args("Net", "Request error %1", &["404"], None),
//!     "Błąd zapytania 404"
//! );
//! assert_eq!(catalog.translate("Net", "Untranslated", None), "Untranslated");
//! ```

pub mod args;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod plural;
pub mod report;
pub mod translator;
pub mod ts;

pub use catalog::{
    Catalog, CatalogBuilder, Context, Location, MessageEntry, Translation, TranslationStatus,
};
pub use config::{CatalogConfig, ConfigError};
pub use error::LoadError;
pub use loader::CatalogLoader;
pub use locale::LocaleTag;
pub use plural::{PluralCategory, PluralRule};
pub use report::{ContextCoverage, CoverageReport, PlaceholderIssue, StatusCounts};
pub use translator::{Translator, translator};
