//! Context-qualified message catalog and lookup.
//!
//! # Invariants
//!
//! 1. **Unique keys**: within a [`Context`], `(source, disambiguation)` pairs
//!    are unique. [`CatalogBuilder`] merges identical duplicates and drops
//!    conflicting ones (first wins).
//!
//! 2. **Lookups never fail**: every `translate*` method returns displayable
//!    text. Missing, unfinished, obsolete and empty entries resolve to the
//!    caller's source text.
//!
//! 3. **Thread safety**: `Catalog` is `Send + Sync` and immutable after
//!    construction.
//!
//! # Resolution order
//!
//! | Request | Tried |
//! |---------|-------|
//! | with disambiguation `d` | `(source, d)`, then `(source, none)` |
//! | without disambiguation | `(source, none)`, then the only entry with that source |

use std::collections::HashMap;

use crate::args::{placeholder_indices, substitute, substitute_count};
use crate::plural::PluralRule;

/// Review state of a translation as recorded in the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// No `type` attribute: the translation is complete.
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    /// Source string no longer present in the application.
    Vanished,
}

impl TranslationStatus {
    /// Parse the `type` attribute of a `<translation>` element.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "obsolete" => Some(Self::Obsolete),
            "vanished" => Some(Self::Vanished),
            _ => None,
        }
    }

    /// The attribute value written back, `None` for finished entries.
    #[must_use]
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    /// Obsolete and vanished entries no longer belong to the application.
    #[must_use]
    pub fn is_retired(self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

/// Translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Single(String),
    /// One form per plural category, ordered by [`PluralRule::numerus_forms`].
    Numerus(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl Translation {
    /// Text shown for non-plural lookups: the single string or the first form.
    #[must_use]
    pub fn primary(&self) -> &str {
        match self {
            Self::Single(text) => text,
            Self::Numerus(forms) => forms.first().map_or("", String::as_str),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(text) => text.is_empty(),
            Self::Numerus(forms) => forms.iter().all(String::is_empty),
        }
    }
}

/// Provenance of a message in the application sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: Option<u32>,
}

/// A single translatable message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageEntry {
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguation comment (`<comment>`).
    pub comment: Option<String>,
    /// Developer note extracted from the sources (`<extracomment>`).
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: Translation,
    pub status: TranslationStatus,
    pub locations: Vec<Location>,
}

impl MessageEntry {
    /// A finished, single-form entry.
    #[must_use]
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Single(translation.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_extra_comment(mut self, note: impl Into<String>) -> Self {
        self.extra_comment = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, filename: impl Into<String>, line: Option<u32>) -> Self {
        self.locations.push(Location {
            filename: filename.into(),
            line,
        });
        self
    }

    /// Text used to tell apart entries sharing the same source text: the
    /// comment, else the extracomment.
    #[must_use]
    pub fn disambiguation(&self) -> Option<&str> {
        match self.key() {
            EntryKey::Comment(text) | EntryKey::ExtraComment(text) => Some(text),
            EntryKey::Plain => None,
        }
    }

    /// Identity within a context besides the source text. A comment and an
    /// extracomment with the same text are different keys.
    fn key(&self) -> EntryKey<'_> {
        match (&self.comment, &self.extra_comment) {
            (Some(comment), _) => EntryKey::Comment(comment),
            (None, Some(note)) => EntryKey::ExtraComment(note),
            (None, None) => EntryKey::Plain,
        }
    }

    #[must_use]
    pub fn is_numerus(&self) -> bool {
        matches!(self.translation, Translation::Numerus(_))
    }

    /// Whether the translation may be shown to users.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.translation.is_empty()
    }

    /// `%N` indices used by the source text.
    #[must_use]
    pub fn placeholders(&self) -> Vec<u8> {
        placeholder_indices(&self.source)
    }
}

/// Named group of messages, typically one UI screen or component.
#[derive(Debug, Clone, Default)]
pub struct Context {
    name: String,
    messages: Vec<MessageEntry>,
    by_source: HashMap<String, Vec<usize>>,
}

impl Context {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Messages in resource order.
    #[must_use]
    pub fn messages(&self) -> &[MessageEntry] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Exact `(source, disambiguation)` match. An entry whose comment
    /// matches wins over one whose extracomment matches.
    #[must_use]
    pub fn find(&self, source: &str, disambiguation: Option<&str>) -> Option<&MessageEntry> {
        let candidates = self.by_source.get(source)?;
        let wanted = match disambiguation {
            Some(text) => [EntryKey::Comment(text), EntryKey::ExtraComment(text)],
            None => [EntryKey::Plain, EntryKey::Plain],
        };
        wanted.iter().find_map(|key| {
            candidates
                .iter()
                .map(|&i| &self.messages[i])
                .find(|m| m.key() == *key)
        })
    }

    /// Resolve a lookup using the documented fallback order.
    #[must_use]
    pub fn resolve(&self, source: &str, disambiguation: Option<&str>) -> Option<&MessageEntry> {
        let candidates = self.by_source.get(source)?;
        if disambiguation.is_some()
            && let Some(entry) = self.find(source, disambiguation)
        {
            return Some(entry);
        }
        if let Some(entry) = self.find(source, None) {
            return Some(entry);
        }
        match (disambiguation, candidates.as_slice()) {
            (None, &[only]) => Some(&self.messages[only]),
            _ => None,
        }
    }

    fn insert(&mut self, entry: MessageEntry) -> InsertOutcome {
        if let Some(existing) = self
            .by_source
            .get(&entry.source)
            .into_iter()
            .flatten()
            .copied()
            .find(|&i| self.messages[i].key() == entry.key())
        {
            let current = &mut self.messages[existing];
            if current.translation == entry.translation && current.status == entry.status {
                current.locations.extend(entry.locations);
                return InsertOutcome::Merged;
            }
            return InsertOutcome::Conflict;
        }

        let index = self.messages.len();
        self.by_source
            .entry(entry.source.clone())
            .or_default()
            .push(index);
        self.messages.push(entry);
        InsertOutcome::Inserted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKey<'a> {
    Plain,
    Comment(&'a str),
    ExtraComment(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertOutcome {
    Inserted,
    Merged,
    Conflict,
}

/// An immutable, loaded translation catalog.
///
/// # Example
///
/// ```
/// use tscat::{Catalog, CatalogBuilder, MessageEntry, TranslationStatus};
///
/// let mut builder = CatalogBuilder::new().language("pl");
/// builder.push("Battery", MessageEntry::new("Battery health", "Stan akumulatora"));
/// builder.push(
///     "Battery",
///     MessageEntry::new("Play", "Play").with_status(TranslationStatus::Unfinished),
/// );
/// builder.push("SoftwareUpdate", MessageEntry::new("Request error %1", "Błąd zapytania %1"));
/// let catalog = builder.build();
///
/// assert_eq!(catalog.translate("Battery", "Battery health", None), "Stan akumulatora");
/// assert_eq!(catalog.translate("Battery", "Play", None), "Play");
/// assert_eq!(
///     catalog.translate_with_args("SoftwareUpdate", "Request error %1", &["404"], None),
///     "Błąd zapytania 404"
/// );
/// assert_eq!(Catalog::empty().translate("Any", "Hello", None), "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    version: Option<String>,
    language: Option<String>,
    source_language: Option<String>,
    plural_rule: PluralRule,
    contexts: Vec<Context>,
    by_name: HashMap<String, usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalog {
    /// The source-language catalog: every lookup returns its input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            version: None,
            language: None,
            source_language: None,
            plural_rule: PluralRule::default(),
            contexts: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.iter().all(Context::is_empty)
    }

    /// Format version from the resource root, e.g. `"2.1"`.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Target language tag, e.g. `"pl"`.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    /// Contexts in resource order.
    #[must_use]
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.by_name.get(name).map(|&i| &self.contexts[i])
    }

    /// Total number of messages across all contexts.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(Context::len).sum()
    }

    /// The entry a lookup would consult, regardless of its status.
    #[must_use]
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Option<&MessageEntry> {
        self.context(context)?.resolve(source, disambiguation)
    }

    /// Translated text for `source`, or `source` itself when no finished
    /// translation exists.
    #[must_use]
    pub fn translate<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        match self.lookup(context, source, disambiguation) {
            Some(entry) if entry.is_displayable() => entry.translation.primary(),
            _ => source,
        }
    }

    /// [`translate`](Self::translate), then positional `%N` substitution.
    #[must_use]
    pub fn translate_with_args<S: AsRef<str>>(
        &self,
        context: &str,
        source: &str,
        args: &[S],
        disambiguation: Option<&str>,
    ) -> String {
        substitute(self.translate(context, source, disambiguation), args)
    }

    /// Numerus lookup: selects the plural form for `count` and replaces `%n`.
    #[must_use]
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        count: i64,
    ) -> String {
        let template = match self.lookup(context, source, disambiguation) {
            Some(entry) if entry.is_displayable() => match &entry.translation {
                Translation::Single(text) => text.as_str(),
                Translation::Numerus(forms) => {
                    let index = self.plural_rule.form_index(count);
                    forms
                        .get(index)
                        .or_else(|| forms.last())
                        .filter(|form| !form.is_empty())
                        .map_or(source, String::as_str)
                }
            },
            _ => source,
        };
        substitute_count(template, count)
    }
}

/// Incremental constructor for a [`Catalog`].
///
/// Used by the resource parser and by tests that build catalogs in code.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    version: Option<String>,
    language: Option<String>,
    source_language: Option<String>,
    contexts: Vec<Context>,
    by_name: HashMap<String, usize>,
    merged: usize,
    conflicts: usize,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    /// Register a context even if it ends up without messages.
    pub fn ensure_context(&mut self, name: &str) -> &mut Context {
        let index = match self.by_name.get(name) {
            Some(&i) => i,
            None => {
                self.contexts.push(Context::new(name));
                let i = self.contexts.len() - 1;
                self.by_name.insert(name.to_string(), i);
                i
            }
        };
        &mut self.contexts[index]
    }

    /// Add a message to `context`.
    ///
    /// Returns `false` when the entry conflicted with an existing one and
    /// was dropped.
    pub fn push(&mut self, context: &str, entry: MessageEntry) -> bool {
        let source = entry.source.clone();
        match self.ensure_context(context).insert(entry) {
            InsertOutcome::Inserted => true,
            InsertOutcome::Merged => {
                self.merged += 1;
                true
            }
            InsertOutcome::Conflict => {
                self.conflicts += 1;
                tracing::warn!(
                    context,
                    source = %source,
                    "conflicting duplicate message dropped, keeping first translation"
                );
                false
            }
        }
    }

    /// Number of duplicate entries folded into an earlier one.
    #[must_use]
    pub fn merged(&self) -> usize {
        self.merged
    }

    /// Number of conflicting duplicates dropped.
    #[must_use]
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    #[must_use]
    pub fn build(self) -> Catalog {
        let plural_rule = self
            .language
            .as_deref()
            .map(PluralRule::for_locale)
            .unwrap_or_default();
        Catalog {
            version: self.version,
            language: self.language,
            source_language: self.source_language,
            plural_rule,
            contexts: self.contexts,
            by_name: self.by_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery_catalog() -> Catalog {
        let mut builder = CatalogBuilder::new().language("pl").source_language("en");
        builder.push(
            "Battery",
            MessageEntry::new("Battery health", "Stan akumulatora")
                .with_location("../basic_ui/settings/Battery.qml", Some(99)),
        );
        builder.push(
            "Battery",
            MessageEntry::new("Never", "Nigdy").with_comment("wifi timeout"),
        );
        builder.push(
            "Battery",
            MessageEntry::new("Never", "Nigdy nie wyłączaj").with_comment("remote timeout"),
        );
        builder.push(
            "Battery",
            MessageEntry::new("No data available yet", "Brak danych")
                .with_extra_comment("Battery level history data."),
        );
        builder.push(
            "Battery",
            MessageEntry::new(
                "Turn off Wi-Fi after %1 minutes of inactivity",
                "Wyłącz Wi-Fi po %1 min bezczynności",
            ),
        );
        builder.push(
            "ButtonHandler",
            MessageEntry::new("Play", "Play").with_status(TranslationStatus::Unfinished),
        );
        builder.push(
            "ButtonHandler",
            MessageEntry::new("Legacy", "Stare").with_status(TranslationStatus::Obsolete),
        );
        builder.push("ButtonHandler", MessageEntry::new("Empty", ""));
        builder.build()
    }

    #[test]
    fn finished_entry_returns_translation() {
        let catalog = battery_catalog();
        assert_eq!(
            catalog.translate("Battery", "Battery health", None),
            "Stan akumulatora"
        );
    }

    #[test]
    fn unfinished_obsolete_and_empty_fall_back_to_source() {
        let catalog = battery_catalog();
        assert_eq!(catalog.translate("ButtonHandler", "Play", None), "Play");
        assert_eq!(catalog.translate("ButtonHandler", "Legacy", None), "Legacy");
        assert_eq!(catalog.translate("ButtonHandler", "Empty", None), "Empty");
    }

    #[test]
    fn missing_context_or_source_falls_back() {
        let catalog = battery_catalog();
        assert_eq!(catalog.translate("Nope", "Battery health", None), "Battery health");
        assert_eq!(catalog.translate("Battery", "Unknown", None), "Unknown");
    }

    #[test]
    fn disambiguated_entries_resolve_independently() {
        let catalog = battery_catalog();
        assert_eq!(catalog.translate("Battery", "Never", Some("wifi timeout")), "Nigdy");
        assert_eq!(
            catalog.translate("Battery", "Never", Some("remote timeout")),
            "Nigdy nie wyłączaj"
        );
        // Two candidates and no disambiguation: nothing to pick.
        assert_eq!(catalog.translate("Battery", "Never", None), "Never");
        assert_eq!(catalog.translate("Battery", "Never", Some("other")), "Never");
    }

    #[test]
    fn single_candidate_resolves_without_disambiguation() {
        let catalog = battery_catalog();
        assert_eq!(
            catalog.translate("Battery", "No data available yet", None),
            "Brak danych"
        );
        assert_eq!(
            catalog.translate(
                "Battery",
                "No data available yet",
                Some("Battery level history data.")
            ),
            "Brak danych"
        );
    }

    #[test]
    fn disambiguated_request_falls_back_to_plain_entry() {
        let catalog = battery_catalog();
        assert_eq!(
            catalog.translate("Battery", "Battery health", Some("settings page")),
            "Stan akumulatora"
        );
    }

    #[test]
    fn args_are_substituted_into_translation() {
        let catalog = battery_catalog();
        assert_eq!(
            catalog.translate_with_args(
                "Battery",
                "Turn off Wi-Fi after %1 minutes of inactivity",
                &["15"],
                None
            ),
            "Wyłącz Wi-Fi po 15 min bezczynności"
        );
        assert_eq!(
            catalog.translate_with_args("Battery", "%1/%2", &["A"], None),
            "A/%2"
        );
    }

    #[test]
    fn identical_duplicates_merge_locations() {
        let mut builder = CatalogBuilder::new();
        builder.push("Wifi", MessageEntry::new("Join", "Dołącz").with_location("a.qml", Some(1)));
        builder.push("Wifi", MessageEntry::new("Join", "Dołącz").with_location("b.qml", Some(2)));
        assert_eq!(builder.merged(), 1);
        let catalog = builder.build();
        let entry = catalog.lookup("Wifi", "Join", None).unwrap();
        assert_eq!(entry.locations.len(), 2);
        assert_eq!(catalog.message_count(), 1);
    }

    #[test]
    fn conflicting_duplicates_keep_first() {
        let mut builder = CatalogBuilder::new();
        assert!(builder.push("Wifi", MessageEntry::new("Join", "Dołącz")));
        assert!(!builder.push("Wifi", MessageEntry::new("Join", "Połącz")));
        assert_eq!(builder.conflicts(), 1);
        let catalog = builder.build();
        assert_eq!(catalog.translate("Wifi", "Join", None), "Dołącz");
    }

    #[test]
    fn plural_forms_follow_catalog_language() {
        let mut builder = CatalogBuilder::new().language("pl_PL");
        let mut entry = MessageEntry::new("%n minute(s)", "");
        entry.translation = Translation::Numerus(vec![
            "%n minuta".into(),
            "%n minuty".into(),
            "%n minut".into(),
        ]);
        builder.push("Battery", entry);
        let catalog = builder.build();

        assert_eq!(catalog.plural_rule(), PluralRule::Polish);
        assert_eq!(catalog.translate_plural("Battery", "%n minute(s)", None, 1), "1 minuta");
        assert_eq!(catalog.translate_plural("Battery", "%n minute(s)", None, 3), "3 minuty");
        assert_eq!(catalog.translate_plural("Battery", "%n minute(s)", None, 5), "5 minut");
        assert_eq!(catalog.translate_plural("Battery", "%n minute(s)", None, 22), "22 minuty");
        assert_eq!(catalog.translate("Battery", "%n minute(s)", None), "%n minuta");
    }

    #[test]
    fn plural_fallback_substitutes_count_into_source() {
        let catalog = Catalog::empty();
        assert_eq!(catalog.translate_plural("X", "%n item(s)", None, 4), "4 item(s)");
    }

    #[test]
    fn short_numerus_list_uses_last_form() {
        let mut builder = CatalogBuilder::new().language("pl");
        let mut entry = MessageEntry::new("%n file(s)", "");
        entry.translation = Translation::Numerus(vec!["%n plik".into(), "%n pliki".into()]);
        builder.push("Files", entry);
        let catalog = builder.build();
        assert_eq!(catalog.translate_plural("Files", "%n file(s)", None, 9), "9 pliki");
    }

    #[test]
    fn empty_catalog_is_source_mode() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.message_count(), 0);
        assert_eq!(catalog.translate("Battery", "Battery health", None), "Battery health");
        assert!(catalog.contexts().is_empty());
    }

    #[test]
    fn contexts_keep_resource_order() {
        let catalog = battery_catalog();
        let names: Vec<&str> = catalog.contexts().iter().map(Context::name).collect();
        assert_eq!(names, vec!["Battery", "ButtonHandler"]);
        assert_eq!(catalog.context("Battery").unwrap().len(), 5);
    }

    #[test]
    fn entry_placeholders_come_from_source() {
        let entry = MessageEntry::new("invalid JSON file '%1' at offset %2", "x");
        assert_eq!(entry.placeholders(), vec![1, 2]);
    }

    #[test]
    fn status_attribute_round_trip() {
        for status in [
            TranslationStatus::Unfinished,
            TranslationStatus::Obsolete,
            TranslationStatus::Vanished,
        ] {
            let attr = status.as_attr().unwrap();
            assert_eq!(TranslationStatus::from_attr(attr), Some(status));
        }
        assert_eq!(TranslationStatus::Finished.as_attr(), None);
        assert_eq!(TranslationStatus::from_attr("done"), None);
    }

    #[test]
    fn comment_and_extracomment_are_distinct_keys() {
        let mut builder = CatalogBuilder::new();
        assert!(builder.push("Player", MessageEntry::new("Open", "Otwórz").with_comment("verb")));
        assert!(builder.push(
            "Player",
            MessageEntry::new("Open", "Otwarte").with_extra_comment("verb")
        ));
        assert_eq!(builder.conflicts(), 0);
        assert_eq!(builder.merged(), 0);

        let catalog = builder.build();
        assert_eq!(catalog.message_count(), 2);
        // The comment match is preferred.
        assert_eq!(catalog.translate("Player", "Open", Some("verb")), "Otwórz");
        assert_eq!(catalog.translate("Player", "Open", None), "Open");
    }

    #[test]
    fn extracomment_matches_when_no_comment_does() {
        let mut builder = CatalogBuilder::new();
        builder.push("Player", MessageEntry::new("Open", "Otwórz").with_comment("verb"));
        builder.push(
            "Player",
            MessageEntry::new("Open", "Otwarte").with_extra_comment("state"),
        );
        let catalog = builder.build();
        assert_eq!(catalog.translate("Player", "Open", Some("state")), "Otwarte");
        let context = catalog.context("Player").unwrap();
        assert_eq!(
            context.find("Open", Some("state")).map(|m| m.translation.primary()),
            Some("Otwarte")
        );
        assert!(context.find("Open", None).is_none());
    }

    #[test]
    fn catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
