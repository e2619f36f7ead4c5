//! Plural categories and per-language selection rules.
//!
//! Numerus messages store one translation per plural category of the
//! target language, in the order given by [`PluralRule::numerus_forms`].
//! Negative counts are categorized by their absolute value.

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Built-in plural rules, keyed by language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PluralRule {
    /// `one` for 1, `other` otherwise. Also German, Dutch, Spanish, ...
    #[default]
    English,
    /// `one` for 0 and 1.
    French,
    /// East Slavic: `one` / `few` / `many` by last digits.
    Russian,
    /// `one` for exactly 1, then `few` / `many` by last digits.
    Polish,
    /// Six categories.
    Arabic,
    /// No plural distinction.
    CJK,
}

impl PluralRule {
    /// Pick a rule from a locale tag such as `"pl"`, `"pl_PL"` or `"ru-RU"`.
    ///
    /// Unknown languages get [`PluralRule::English`].
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match language.as_str() {
            "fr" => Self::French,
            "ru" | "uk" | "be" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" => Self::CJK,
            _ => Self::English,
        }
    }

    /// Categorize `count` under this rule.
    #[must_use]
    pub fn categorize(self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        let mod10 = n % 10;
        let mod100 = n % 100;
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Russian => {
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Arabic => match n {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                _ if (11..=99).contains(&mod100) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            Self::CJK => PluralCategory::Other,
        }
    }

    /// Categories a numerus message stores, in storage order.
    #[must_use]
    pub fn numerus_forms(self) -> &'static [PluralCategory] {
        use PluralCategory::*;
        match self {
            Self::English | Self::French => &[One, Other],
            Self::Russian | Self::Polish => &[One, Few, Many],
            Self::Arabic => &[Zero, One, Two, Few, Many, Other],
            Self::CJK => &[Other],
        }
    }

    /// Index into a numerus form list for `count`.
    #[must_use]
    pub fn form_index(self, count: i64) -> usize {
        let category = self.categorize(count);
        self.numerus_forms()
            .iter()
            .position(|&c| c == category)
            .unwrap_or(0)
    }
}
