use std::collections::HashMap;

use tracing::debug;

use super::TableError;
use crate::system::RomanizationSystem;

const SYSTEM_COUNT: usize = RomanizationSystem::ALL.len();

/// One syllable-equivalence row: a tone-less spelling per system.
///
/// `None` means the system has no counterpart for this syllable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingRow {
    cells: [Option<String>; SYSTEM_COUNT],
}

impl MappingRow {
    /// Set a cell. Empty spellings are stored as `None`.
    pub fn with_cell(mut self, system: RomanizationSystem, spelling: Option<String>) -> Self {
        self.cells[system.index()] = spelling.filter(|s| !s.is_empty());
        self
    }

    pub fn with(self, system: RomanizationSystem, spelling: &str) -> Self {
        self.with_cell(system, Some(spelling.to_string()))
    }

    pub fn get(&self, system: RomanizationSystem) -> Option<&str> {
        self.cells[system.index()].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Mapping rows plus an index from `(system, spelling)` to row position.
///
/// The index is built once; when two rows share a spelling in the same
/// column the earlier row wins.
#[derive(Debug)]
pub struct MappingTable {
    rows: Vec<MappingRow>,
    /// One spelling → row map per system, indexed by `RomanizationSystem::index`.
    index: [HashMap<String, usize>; SYSTEM_COUNT],
}

impl MappingTable {
    pub fn new(rows: Vec<MappingRow>) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }

        let mut index: [HashMap<String, usize>; SYSTEM_COUNT] =
            std::array::from_fn(|_| HashMap::with_capacity(rows.len()));
        for (id, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(TableError::EmptyRow(id));
            }
            for system in RomanizationSystem::ALL {
                let Some(spelling) = row.get(system) else {
                    continue;
                };
                let column = &mut index[system.index()];
                if let Some(&first) = column.get(spelling) {
                    debug!(%system, spelling, first, shadowed = id, "duplicate spelling");
                    continue;
                }
                column.insert(spelling.to_string(), id);
            }
        }

        let keys: usize = index.iter().map(HashMap::len).sum();
        debug!(rows = rows.len(), keys, "mapping table built");
        Ok(Self { rows, index })
    }

    /// Row whose `system` column spells `base` exactly.
    pub fn find(&self, system: RomanizationSystem, base: &str) -> Option<&MappingRow> {
        self.index[system.index()]
            .get(base)
            .map(|&id| &self.rows[id])
    }

    pub fn rows(&self) -> &[MappingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
