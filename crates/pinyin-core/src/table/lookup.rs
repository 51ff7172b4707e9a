use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::{CodepointRecord, TableError};
use crate::syllable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("not a Unicode scalar value: {0:#X}")]
    InvalidCharacterInput(u32),
}

/// Code point → unformatted Hanyu Pinyin syllables, in table order.
///
/// Simplified and Traditional forms are independent keys. A stored list is
/// never empty: a character either has at least one reading or is absent.
#[derive(Debug, Default)]
pub struct PinyinLookupTable {
    entries: HashMap<char, Vec<String>>,
}

impl PinyinLookupTable {
    /// Build from raw records. Records with an empty syllable list are skipped.
    pub fn from_records(records: Vec<CodepointRecord>) -> Result<Self, TableError> {
        let mut entries = HashMap::with_capacity(records.len());
        let mut skipped = 0usize;

        for record in records {
            let ch = parse_codepoint(&record.codepoint)?;
            if record.syllables.trim().is_empty() {
                skipped += 1;
                continue;
            }
            let syllables = parse_syllables(ch, &record.syllables)?;
            match entries.entry(ch) {
                Entry::Occupied(_) => return Err(TableError::DuplicateCodepoint(ch as u32)),
                Entry::Vacant(v) => {
                    v.insert(syllables);
                }
            }
        }

        debug!(entries = entries.len(), skipped, "pinyin lookup table built");
        Ok(Self { entries })
    }

    /// Look up a raw code point.
    ///
    /// `Ok(None)` means the character has no Hanyu Pinyin. Values outside the
    /// Unicode scalar range are rejected.
    pub fn lookup(&self, codepoint: u32) -> Result<Option<&[String]>, LookupError> {
        let ch = char::from_u32(codepoint).ok_or(LookupError::InvalidCharacterInput(codepoint))?;
        Ok(self.get(ch))
    }

    pub fn get(&self, ch: char) -> Option<&[String]> {
        self.entries.get(&ch).map(Vec::as_slice)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_codepoint(hex: &str) -> Result<char, TableError> {
    // from_str_radix tolerates a leading sign
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TableError::InvalidCodepoint(hex.to_string()));
    }
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| TableError::InvalidCodepoint(hex.to_string()))
}

fn parse_syllables(ch: char, list: &str) -> Result<Vec<String>, TableError> {
    list.split(',')
        .map(str::trim)
        .map(|s| {
            syllable::split(s)
                .map(|_| s.to_string())
                .map_err(|_| TableError::MalformedSyllable {
                    codepoint: ch as u32,
                    syllable: s.to_string(),
                })
        })
        .collect()
}
