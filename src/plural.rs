//! CLDR plural categories and the built-in cardinal rules.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::LocaleError;

/// Category tag returned by a plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [Self; 6] =
        [Self::Zero, Self::One, Self::Two, Self::Few, Self::Many, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown plural category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Maps a quantity to its plural category.
pub type PluralRule = fn(f64) -> PluralCategory;

/// Hawaiian cardinal rule: `one` for exactly 1, `other` for everything else.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn haw(n: f64) -> PluralCategory {
    if n == 1.0 { PluralCategory::One } else { PluralCategory::Other }
}

/// Built-in rules keyed by locale identifier.
const RULES: &[(&str, PluralRule)] = &[("haw", haw)];

/// Resolve the built-in plural rule for `locale`.
///
/// # Errors
/// `ResourceUnavailable` when no rule is known for the locale.
pub fn rule_for(locale: &str) -> Result<PluralRule, LocaleError> {
    RULES
        .iter()
        .find(|(id, _)| *id == locale)
        .map(|(_, rule)| *rule)
        .ok_or_else(|| LocaleError::unavailable(locale, "plural rule", "no built-in rule"))
}
