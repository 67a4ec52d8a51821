//! Loaders resolve a locale's tables and plural rule.

use std::path::{
    Path,
    PathBuf,
};

use crate::error::LocaleError;
use crate::plural::{
    self,
    PluralRule,
};
use crate::table::{
    Table,
    TableStyle,
};

/// Source of locale artifacts.
pub trait LocaleLoader: Send + Sync {
    /// Resolve the table of the given style for `locale`.
    fn resolve_table(&self, locale: &str, style: TableStyle) -> Result<Table, LocaleError>;

    /// Resolve the plural rule for `locale`.
    fn resolve_plural_rule(&self, locale: &str) -> Result<PluralRule, LocaleError>;
}

/// Embedded table data as `(locale, long, short)`.
const EMBEDDED: &[(&str, &str, &str)] = &[(
    "haw",
    include_str!("../locale/haw/long.json"),
    include_str!("../locale/haw/short.json"),
)];

/// Serves the tables compiled into the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Locales with embedded table data.
    pub fn locales() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(locale, _, _)| *locale)
    }
}

impl LocaleLoader for EmbeddedLoader {
    fn resolve_table(&self, locale: &str, style: TableStyle) -> Result<Table, LocaleError> {
        let Some(&(_, long, short)) = EMBEDDED.iter().find(|(id, _, _)| *id == locale) else {
            return Err(LocaleError::unavailable(
                locale,
                style.resource_name(),
                "no embedded data",
            ));
        };

        let text = match style {
            TableStyle::Long => long,
            TableStyle::Short => short,
        };

        Table::from_json_str(text).map_err(|e| {
            LocaleError::unavailable(locale, style.resource_name(), e.to_string())
        })
    }

    fn resolve_plural_rule(&self, locale: &str) -> Result<PluralRule, LocaleError> {
        plural::rule_for(locale)
    }
}

/// Reads `<root>/<locale>/<style>.json` from disk.
///
/// Plural rules are code, so they still come from the built-in rule set.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the table artifact for `locale`.
    #[must_use]
    pub fn table_path(&self, locale: &str, style: TableStyle) -> PathBuf {
        self.root.join(locale).join(style.file_name())
    }
}

impl LocaleLoader for DirectoryLoader {
    fn resolve_table(&self, locale: &str, style: TableStyle) -> Result<Table, LocaleError> {
        let path = self.table_path(locale, style);
        tracing::debug!("Reading {} table from: {:?}", style, path);

        let content = std::fs::read_to_string(&path).map_err(|e| {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            LocaleError::unavailable(locale, style.resource_name(), e.to_string())
        })?;

        Table::from_json_str(&content).map_err(|e| {
            tracing::warn!("Failed to parse {:?}: {}", path, e);
            LocaleError::unavailable(locale, style.resource_name(), e.to_string())
        })
    }

    fn resolve_plural_rule(&self, locale: &str) -> Result<PluralRule, LocaleError> {
        plural::rule_for(locale)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::plural::PluralCategory;

    #[rstest]
    #[case(TableStyle::Long)]
    #[case(TableStyle::Short)]
    fn embedded_haw_tables_parse(#[case] style: TableStyle) {
        let table = EmbeddedLoader::new().resolve_table("haw", style).unwrap();

        assert_that!(table.len(), eq(8));
        for unit in ["year", "quarter", "month", "week", "day", "hour", "minute", "second"] {
            assert!(table.get(unit).is_some(), "missing unit {unit} in {style} table");
        }
    }

    #[rstest]
    fn embedded_unknown_locale() {
        let result = EmbeddedLoader::new().resolve_table("xx", TableStyle::Short);

        assert_that!(
            result,
            err(eq(&LocaleError::unavailable("xx", "short table", "no embedded data")))
        );
    }

    #[rstest]
    fn embedded_plural_rule() {
        let rule = EmbeddedLoader::new().resolve_plural_rule("haw").unwrap();

        assert_eq!(rule(1.0), PluralCategory::One);
        assert_eq!(EmbeddedLoader::locales().collect::<Vec<_>>(), vec!["haw"]);
    }

    #[fixture]
    fn data_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("haw")).unwrap();
        fs::write(temp_dir.path().join("haw/long.json"), r#"{"day":"days"}"#).unwrap();
        temp_dir
    }

    #[rstest]
    fn directory_reads_table(data_dir: TempDir) {
        let loader = DirectoryLoader::new(data_dir.path());

        let table = loader.resolve_table("haw", TableStyle::Long).unwrap();

        assert_eq!(table, r#"{"day":"days"}"#.parse::<Table>().unwrap());
    }

    #[rstest]
    fn directory_missing_table(data_dir: TempDir) {
        let loader = DirectoryLoader::new(data_dir.path());

        let result = loader.resolve_table("haw", TableStyle::Short);

        let err = result.unwrap_err();
        assert_that!(err.locale(), eq("haw"));
        assert_that!(err.to_string(), contains_substring("short table"));
    }

    #[rstest]
    fn directory_invalid_json(data_dir: TempDir) {
        fs::write(data_dir.path().join("haw/short.json"), "[1, 2]").unwrap();
        let loader = DirectoryLoader::new(data_dir.path());

        let result = loader.resolve_table("haw", TableStyle::Short);

        assert!(matches!(result, Err(LocaleError::ResourceUnavailable { .. })));
    }

    #[rstest]
    fn directory_table_path() {
        let loader = DirectoryLoader::new("/data");

        assert_eq!(
            loader.table_path("haw", TableStyle::Short),
            PathBuf::from("/data/haw/short.json")
        );
        assert_eq!(loader.root(), Path::new("/data"));
    }
}
