//! Lookup tables: code point → Hanyu Pinyin, and cross-system syllable rows.
//!
//! Tables are produced by a `TableLoader` and are immutable once built.
//! `TomlTableLoader` reads the TOML formats bundled under `src/data/`.

mod loader;
mod lookup;
mod mapping;

pub use loader::TomlTableLoader;
pub use lookup::{LookupError, PinyinLookupTable};
pub use mapping::{MappingRow, MappingTable};

pub const DEFAULT_UNICODE_TOML: &str = include_str!("../data/unicode_to_hanyu_pinyin.toml");
pub const DEFAULT_MAPPING_TOML: &str = include_str!("../data/pinyin_mapping.toml");

/// Returns the embedded default code point table.
pub fn default_unicode_toml() -> &'static str {
    DEFAULT_UNICODE_TOML
}

/// Returns the embedded default mapping table.
pub fn default_mapping_toml() -> &'static str {
    DEFAULT_MAPPING_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid code point: {0}")]
    InvalidCodepoint(String),
    #[error("duplicate code point: U+{0:04X}")]
    DuplicateCodepoint(u32),
    #[error("malformed syllable {syllable:?} for U+{codepoint:04X}")]
    MalformedSyllable { codepoint: u32, syllable: String },
    #[error("mapping table has no rows")]
    Empty,
    #[error("mapping row {0} has no spellings")]
    EmptyRow(usize),
    #[error("pinyin tables already initialized")]
    AlreadyInitialized,
}

/// One raw record of the code point table, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRecord {
    /// Hexadecimal code point, without `U+` prefix.
    pub codepoint: String,
    /// Comma-separated unformatted syllables. May be empty.
    pub syllables: String,
}

/// Source of the raw table data.
pub trait TableLoader {
    fn codepoint_records(&self) -> Result<Vec<CodepointRecord>, TableError>;
    fn mapping_rows(&self) -> Result<Vec<MappingRow>, TableError>;
}
