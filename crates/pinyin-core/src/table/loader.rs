use std::collections::BTreeMap;

use serde::Deserialize;

use super::{CodepointRecord, MappingRow, TableError, TableLoader};
use super::{DEFAULT_MAPPING_TOML, DEFAULT_UNICODE_TOML};
use crate::system::RomanizationSystem;

#[derive(Deserialize)]
struct UnicodeConfig {
    characters: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct MappingConfig {
    #[serde(default)]
    row: Vec<RowRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RowRecord {
    #[serde(default)]
    hanyu: Option<String>,
    #[serde(default)]
    wade: Option<String>,
    #[serde(default)]
    mps2: Option<String>,
    #[serde(default)]
    yale: Option<String>,
    #[serde(default)]
    tongyong: Option<String>,
}

impl From<RowRecord> for MappingRow {
    fn from(r: RowRecord) -> Self {
        MappingRow::default()
            .with_cell(RomanizationSystem::HanyuPinyin, r.hanyu)
            .with_cell(RomanizationSystem::WadeGiles, r.wade)
            .with_cell(RomanizationSystem::Mps2, r.mps2)
            .with_cell(RomanizationSystem::Yale, r.yale)
            .with_cell(RomanizationSystem::Tongyong, r.tongyong)
    }
}

/// Loads both tables from TOML text.
///
/// Code point table:
///
/// ```toml
/// [characters]
/// 674E = "li3"
/// 507B = "lou2,lü3"
/// ```
///
/// Mapping table:
///
/// ```toml
/// [[row]]
/// hanyu = "jiang"
/// wade = "chiang"
/// ```
pub struct TomlTableLoader<'a> {
    unicode_toml: &'a str,
    mapping_toml: &'a str,
}

impl<'a> TomlTableLoader<'a> {
    pub fn new(unicode_toml: &'a str, mapping_toml: &'a str) -> Self {
        Self {
            unicode_toml,
            mapping_toml,
        }
    }
}

impl TomlTableLoader<'static> {
    /// Loader over the embedded default tables.
    pub fn bundled() -> Self {
        Self::new(DEFAULT_UNICODE_TOML, DEFAULT_MAPPING_TOML)
    }
}

impl TableLoader for TomlTableLoader<'_> {
    fn codepoint_records(&self) -> Result<Vec<CodepointRecord>, TableError> {
        let config: UnicodeConfig =
            toml::from_str(self.unicode_toml).map_err(|e| TableError::Parse(e.to_string()))?;
        Ok(config
            .characters
            .into_iter()
            .map(|(codepoint, syllables)| CodepointRecord {
                codepoint,
                syllables,
            })
            .collect())
    }

    fn mapping_rows(&self) -> Result<Vec<MappingRow>, TableError> {
        let config: MappingConfig =
            toml::from_str(self.mapping_toml).map_err(|e| TableError::Parse(e.to_string()))?;
        Ok(config.row.into_iter().map(MappingRow::from).collect())
    }
}
