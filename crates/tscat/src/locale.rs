//! Locale identifiers and their resource-file candidates.
//!
//! Environment precedence: `TSCAT_LOCALE` > `LC_ALL` > `LC_MESSAGES` > `LANG`.
//! `C` and `POSIX` select source-language mode.

use std::fmt;

use crate::error::LoadError;

/// Environment variable consulted before the POSIX locale variables.
pub const LOCALE_ENV: &str = "TSCAT_LOCALE";

const POSIX_ENV: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A parsed `language[_REGION][.encoding][@modifier]` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
}

impl LocaleTag {
    /// Parse `pl`, `pl_PL`, `pl-PL`, `pl_PL.UTF-8@euro`.
    ///
    /// Encoding and modifier suffixes are dropped. Identifiers containing
    /// anything other than ASCII letters, digits, `_` and `-` before the
    /// suffix are rejected, so a locale can never name a path.
    pub fn parse(input: &str) -> Result<Self, LoadError> {
        let invalid = || LoadError::InvalidLocale(input.to_string());
        let base = input
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if base.is_empty()
            || !base
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(invalid());
        }

        let mut parts = base.split(['_', '-']).filter(|p| !p.is_empty());
        let language = parts.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let region = parts.next().map(str::to_ascii_uppercase);
        Ok(Self { language, region })
    }

    /// Locale from the environment, `None` for unset, `C` or `POSIX`.
    ///
    /// Unparseable values are skipped so a later variable can still apply.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::first_usable(
            std::iter::once(LOCALE_ENV)
                .chain(POSIX_ENV)
                .filter_map(|key| std::env::var(key).ok()),
        )
    }

    /// First usable setting in precedence order. `C`/`POSIX` ends the
    /// search in source-language mode.
    fn first_usable(values: impl IntoIterator<Item = String>) -> Option<Self> {
        for value in values {
            if value.trim().is_empty() {
                continue;
            }
            if is_posix(&value) {
                return None;
            }
            match Self::parse(&value) {
                Ok(tag) => return Some(tag),
                Err(_) => tracing::debug!(value = %value, "ignoring unusable locale setting"),
            }
        }
        None
    }

    /// Interpret one locale setting; `C`/`POSIX` and junk give `None`.
    #[must_use]
    pub fn from_setting(value: &str) -> Option<Self> {
        if is_posix(value) {
            return None;
        }
        Self::parse(value).ok()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Resource names to try, most specific first: `["pl_PL", "pl"]`.
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if let Some(region) = &self.region {
            out.push(format!("{}_{region}", self.language));
        }
        out.push(self.language.clone());
        out
    }
}

fn is_posix(value: &str) -> bool {
    let base = value.split(['.', '@']).next().unwrap_or_default();
    base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX")
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}
