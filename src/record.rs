//! The per-locale record: `{ locale, long, short, plural }`.

use serde_json::Value;

use crate::error::LocaleError;
use crate::loader::LocaleLoader;
use crate::plural::{
    PluralCategory,
    PluralRule,
};
use crate::table::{
    Table,
    TableStyle,
};

/// Separator for key paths passed to [`LocaleRecord::select`].
pub const KEY_SEPARATOR: &str = ".";

/// Immutable bundle of one locale's tables and plural rule.
///
/// Fields are private and only exposed through shared references, so a
/// record never changes after construction.
#[derive(Debug, Clone)]
pub struct LocaleRecord {
    locale: String,
    long: Table,
    short: Table,
    plural: PluralRule,
}

impl LocaleRecord {
    /// Resolve both tables and the plural rule through `loader` and bundle them.
    ///
    /// Any resolution failure is returned as-is; no partial record is built.
    pub fn assemble(loader: &dyn LocaleLoader, locale: &str) -> Result<Self, LocaleError> {
        let long = loader.resolve_table(locale, TableStyle::Long)?;
        let short = loader.resolve_table(locale, TableStyle::Short)?;
        let plural = loader.resolve_plural_rule(locale)?;

        Ok(Self::from_parts(locale, long, short, plural))
    }

    #[must_use]
    pub fn from_parts(
        locale: impl Into<String>,
        long: Table,
        short: Table,
        plural: PluralRule,
    ) -> Self {
        Self { locale: locale.into(), long, short, plural }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn long(&self) -> &Table {
        &self.long
    }

    #[must_use]
    pub const fn short(&self) -> &Table {
        &self.short
    }

    #[must_use]
    pub const fn plural(&self) -> PluralRule {
        self.plural
    }

    #[must_use]
    pub const fn table(&self, style: TableStyle) -> &Table {
        match style {
            TableStyle::Long => &self.long,
            TableStyle::Short => &self.short,
        }
    }

    #[must_use]
    pub fn plural_category(&self, n: f64) -> PluralCategory {
        (self.plural)(n)
    }

    /// Pick the string stored under `key_path` for quantity `n`.
    ///
    /// A string value is returned directly. An object value is treated as a
    /// set of plural variants keyed by category, falling back to `other`.
    ///
    /// # Examples
    /// ```
    /// use haw_locale::{EmbeddedLoader, TableStyle, haw};
    ///
    /// let record = haw::record(&EmbeddedLoader::new()).unwrap();
    /// assert_eq!(record.select(TableStyle::Short, "day.past", 3.0), Some("-{0} d"));
    /// assert_eq!(record.select(TableStyle::Long, "hour.future", 1.0), Some("+{0} h"));
    /// ```
    #[must_use]
    pub fn select(&self, style: TableStyle, key_path: &str, n: f64) -> Option<&str> {
        match self.table(style).lookup(key_path, KEY_SEPARATOR)? {
            Value::String(s) => Some(s),
            Value::Object(variants) => variants
                .get(self.plural_category(n).as_str())
                .and_then(Value::as_str)
                .or_else(|| variants.get(PluralCategory::Other.as_str()).and_then(Value::as_str)),
            _ => None,
        }
    }
}

impl PartialEq for LocaleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && self.long == other.long
            && self.short == other.short
            && std::ptr::fn_addr_eq(self.plural, other.plural)
    }
}
