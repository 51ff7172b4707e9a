//! Syllable translation between romanization systems.
//!
//! The tone is split off, the base spelling is matched against the source
//! column of the mapping table, and the target column's spelling is joined
//! back with the same tone. Tone never changes across systems.

use tracing::debug;

use crate::syllable::{self, SyllableError};
use crate::system::RomanizationSystem;
use crate::table::MappingTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("unknown {system} syllable: {base:?}")]
    UnknownSyllable {
        system: RomanizationSystem,
        base: String,
    },
    #[error("{base:?} has no {target} counterpart")]
    NoCounterpart {
        base: String,
        target: RomanizationSystem,
    },
    #[error(transparent)]
    Malformed(#[from] SyllableError),
}

#[derive(Debug)]
pub struct RomanizationTranslator {
    table: MappingTable,
}

impl RomanizationTranslator {
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Translate `syllable` (base + tone) from `source` to `target` spelling.
    pub fn translate(
        &self,
        syllable: &str,
        source: RomanizationSystem,
        target: RomanizationSystem,
    ) -> Result<String, TranslateError> {
        let parts = syllable::split(syllable)?;
        let row = self
            .table
            .find(source, parts.base)
            .ok_or_else(|| TranslateError::UnknownSyllable {
                system: source,
                base: parts.base.to_string(),
            })?;
        let spelling = row.get(target).ok_or_else(|| TranslateError::NoCounterpart {
            base: parts.base.to_string(),
            target,
        })?;
        debug!(syllable, %source, %target, spelling, "translated");
        Ok(syllable::join(spelling, parts.tone))
    }
}
