//! Hawaiian (`haw`).

use crate::error::LocaleError;
use crate::loader::LocaleLoader;
use crate::record::LocaleRecord;

pub const LOCALE: &str = "haw";

/// Build the `haw` record from whatever `loader` resolves.
pub fn record(loader: &dyn LocaleLoader) -> Result<LocaleRecord, LocaleError> {
    LocaleRecord::assemble(loader, LOCALE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::loader::EmbeddedLoader;
    use crate::plural::PluralCategory;
    use crate::table::TableStyle;

    #[rstest]
    fn embedded_record() {
        let record = record(&EmbeddedLoader::new()).unwrap();

        assert_that!(record.locale(), eq("haw"));
        assert_eq!(record.plural_category(1.0), PluralCategory::One);
        assert_eq!(record.plural_category(2.0), PluralCategory::Other);
        assert_eq!(record.select(TableStyle::Long, "day.past", 2.0), Some("-{0} d"));
        assert_eq!(record.select(TableStyle::Short, "minute.future", 1.0), Some("+{0} min"));
    }

    #[rstest]
    fn locale_is_stable_across_constructions() {
        let loader = EmbeddedLoader::new();

        let first = record(&loader).unwrap();
        let second = record(&loader).unwrap();

        assert_that!(first.locale(), eq(LOCALE));
        assert_eq!(first, second);
    }
}
