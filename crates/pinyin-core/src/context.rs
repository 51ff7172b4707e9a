//! Loaded tables shared by the resolver and the translator.
//!
//! A `PinyinContext` can be built explicitly from any `TableLoader`, or
//! obtained through `PinyinContext::global()`, which builds the embedded
//! default tables exactly once unless `init_custom` installed others first.

use std::sync::OnceLock;

use tracing::debug_span;

use crate::resolve::PinyinResolver;
use crate::table::{MappingTable, PinyinLookupTable, TableError, TableLoader, TomlTableLoader};
use crate::translate::RomanizationTranslator;

static INSTANCE: OnceLock<PinyinContext> = OnceLock::new();

#[derive(Debug)]
pub struct PinyinContext {
    lookup: PinyinLookupTable,
    translator: RomanizationTranslator,
}

impl PinyinContext {
    pub fn load(loader: &dyn TableLoader) -> Result<Self, TableError> {
        let _span = debug_span!("load_tables").entered();
        let lookup = PinyinLookupTable::from_records(loader.codepoint_records()?)?;
        let mapping = MappingTable::new(loader.mapping_rows()?)?;
        Ok(Self {
            lookup,
            translator: RomanizationTranslator::new(mapping),
        })
    }

    pub fn from_toml(unicode_toml: &str, mapping_toml: &str) -> Result<Self, TableError> {
        Self::load(&TomlTableLoader::new(unicode_toml, mapping_toml))
    }

    /// Context over the embedded default tables.
    pub fn bundled() -> Result<Self, TableError> {
        Self::load(&TomlTableLoader::bundled())
    }

    /// Install custom tables as the global context.
    ///
    /// Fails with `AlreadyInitialized` once `global()` or another
    /// `init_custom` has installed a context.
    pub fn init_custom(unicode_toml: String, mapping_toml: String) -> Result<(), TableError> {
        if INSTANCE.get().is_some() {
            return Err(TableError::AlreadyInitialized);
        }
        let ctx = Self::from_toml(&unicode_toml, &mapping_toml)?;
        INSTANCE
            .set(ctx)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PinyinContext {
        INSTANCE.get_or_init(|| Self::bundled().expect("bundled pinyin tables must be valid"))
    }

    pub fn lookup_table(&self) -> &PinyinLookupTable {
        &self.lookup
    }

    pub fn translator(&self) -> &RomanizationTranslator {
        &self.translator
    }

    pub fn resolver(&self) -> PinyinResolver<'_> {
        PinyinResolver::new(&self.lookup, &self.translator)
    }
}
