//! Translation coverage and placeholder consistency reports.

use serde::Serialize;

use crate::args::placeholder_indices;
use crate::catalog::{Catalog, Context, MessageEntry, Translation, TranslationStatus};

/// Coverage of a whole catalog.
///
/// Retired (obsolete or vanished) entries are counted but excluded from the
/// completion percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub language: Option<String>,
    pub totals: StatusCounts,
    /// Completion as a percentage (0.0–100.0).
    pub coverage_percent: f32,
    /// Per-context data, in resource order.
    pub contexts: Vec<ContextCoverage>,
}

/// Per-context coverage statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextCoverage {
    pub context: String,
    pub counts: StatusCounts,
    pub coverage_percent: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
}

impl StatusCounts {
    fn record(&mut self, entry: &MessageEntry) {
        match entry.status {
            TranslationStatus::Finished if !entry.translation.is_empty() => self.finished += 1,
            TranslationStatus::Finished | TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Obsolete | TranslationStatus::Vanished => self.retired += 1,
        }
    }

    fn add(&mut self, other: Self) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.retired += other.retired;
    }

    /// Entries still used by the application.
    #[must_use]
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Finished share of active entries; 100 when there are none.
    #[must_use]
    pub fn percent(&self) -> f32 {
        let active = self.active();
        if active == 0 {
            100.0
        } else {
            (self.finished as f32 / active as f32) * 100.0
        }
    }
}

/// A finished translation whose placeholders differ from its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderIssue {
    pub context: String,
    pub source: String,
    /// Used by the source, absent from the translation.
    pub missing: Vec<u8>,
    /// Used by the translation, absent from the source.
    pub unexpected: Vec<u8>,
}

fn context_coverage(context: &Context) -> ContextCoverage {
    let mut counts = StatusCounts::default();
    for entry in context.messages() {
        counts.record(entry);
    }
    ContextCoverage {
        context: context.name().to_string(),
        counts,
        coverage_percent: counts.percent(),
    }
}

fn difference(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().copied().filter(|i| !b.contains(i)).collect()
}

fn placeholder_issue(context: &str, entry: &MessageEntry) -> Option<PlaceholderIssue> {
    if !entry.is_displayable() {
        return None;
    }
    let expected = entry.placeholders();
    let forms: Vec<&str> = match &entry.translation {
        Translation::Single(text) => vec![text.as_str()],
        Translation::Numerus(forms) => forms.iter().map(String::as_str).collect(),
    };

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for form in forms {
        let used = placeholder_indices(form);
        missing.extend(difference(&expected, &used));
        unexpected.extend(difference(&used, &expected));
    }
    missing.sort_unstable();
    missing.dedup();
    unexpected.sort_unstable();
    unexpected.dedup();

    if missing.is_empty() && unexpected.is_empty() {
        None
    } else {
        Some(PlaceholderIssue {
            context: context.to_string(),
            source: entry.source.clone(),
            missing,
            unexpected,
        })
    }
}

impl Catalog {
    /// Coverage across all contexts.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let contexts: Vec<ContextCoverage> = self.contexts().iter().map(context_coverage).collect();
        let mut totals = StatusCounts::default();
        for context in &contexts {
            totals.add(context.counts);
        }
        CoverageReport {
            language: self.language().map(str::to_string),
            totals,
            coverage_percent: totals.percent(),
            contexts,
        }
    }

    /// Finished entries whose translation uses different `%N` placeholders
    /// than the source.
    #[must_use]
    pub fn placeholder_issues(&self) -> Vec<PlaceholderIssue> {
        self.contexts()
            .iter()
            .flat_map(|context| {
                context
                    .messages()
                    .iter()
                    .filter_map(|entry| placeholder_issue(context.name(), entry))
            })
            .collect()
    }
}
