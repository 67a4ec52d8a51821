//! haw-locale
//!
//! Hawaiian (`haw`) relative-time locale record: long and short form tables
//! plus the cardinal plural rule, bundled as `{ locale, long, short, plural }`.
//!
//! ```
//! use haw_locale::{EmbeddedLoader, LocaleRegistry, PluralCategory};
//!
//! let registry = LocaleRegistry::bootstrap(&EmbeddedLoader::new(), &["haw"]).unwrap();
//! let record = registry.get("haw").unwrap();
//! assert_eq!(record.locale(), "haw");
//! assert_eq!((record.plural())(1.0), PluralCategory::One);
//! ```

pub mod config;
pub mod error;
pub mod haw;
pub mod loader;
pub mod plural;
pub mod record;
pub mod registry;
pub mod table;

pub use error::{
    LocaleError,
    RegistryError,
};
pub use loader::{
    DirectoryLoader,
    EmbeddedLoader,
    LocaleLoader,
};
pub use plural::{
    PluralCategory,
    PluralRule,
};
pub use record::LocaleRecord;
pub use registry::LocaleRegistry;
pub use table::{
    Table,
    TableStyle,
};
