//! Character → romanization facade.
//!
//! Looks up the Hanyu Pinyin readings of a character and, for any other
//! target system, translates each reading in table order.

use tracing::{debug, debug_span};

use crate::format::SyllableFormatter;
use crate::system::RomanizationSystem;
use crate::table::{LookupError, PinyinLookupTable};
use crate::translate::{RomanizationTranslator, TranslateError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("not a recognized Chinese character: {0:?}")]
    NotRecognized(char),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("cannot translate {syllable:?}: {source}")]
    Translate {
        syllable: String,
        source: TranslateError,
    },
}

/// How untranslatable readings are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// The first reading that fails to translate fails the whole call.
    #[default]
    Strict,
    /// Readings that fail to translate are dropped.
    BestEffort,
}

#[derive(Clone, Copy)]
pub struct PinyinResolver<'a> {
    table: &'a PinyinLookupTable,
    translator: &'a RomanizationTranslator,
    mode: ResolveMode,
}

impl<'a> PinyinResolver<'a> {
    pub fn new(table: &'a PinyinLookupTable, translator: &'a RomanizationTranslator) -> Self {
        Self {
            table,
            translator,
            mode: ResolveMode::Strict,
        }
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// All readings of `ch` in `target`, in table order.
    pub fn resolve(
        &self,
        ch: char,
        target: RomanizationSystem,
    ) -> Result<Vec<String>, ResolveError> {
        let _span = debug_span!("resolve", %ch, %target).entered();

        let hanyu = self.table.get(ch).ok_or(ResolveError::NotRecognized(ch))?;
        if target == RomanizationSystem::HanyuPinyin {
            return Ok(hanyu.to_vec());
        }

        let mut out = Vec::with_capacity(hanyu.len());
        for syllable in hanyu {
            match self
                .translator
                .translate(syllable, RomanizationSystem::HanyuPinyin, target)
            {
                Ok(s) => out.push(s),
                Err(e) if self.mode == ResolveMode::BestEffort => {
                    debug!(
                        syllable = syllable.as_str(),
                        error = %e,
                        "dropped untranslatable reading"
                    );
                }
                Err(source) => {
                    return Err(ResolveError::Translate {
                        syllable: syllable.clone(),
                        source,
                    })
                }
            }
        }
        Ok(out)
    }

    /// Same as `resolve`, for a raw code point.
    pub fn resolve_codepoint(
        &self,
        codepoint: u32,
        target: RomanizationSystem,
    ) -> Result<Vec<String>, ResolveError> {
        let ch = char::from_u32(codepoint).ok_or(LookupError::InvalidCharacterInput(codepoint))?;
        self.resolve(ch, target)
    }

    /// First reading only.
    ///
    /// `Ok(None)` when the character is known but, in best-effort mode,
    /// none of its readings has a counterpart in `target`.
    pub fn first(
        &self,
        ch: char,
        target: RomanizationSystem,
    ) -> Result<Option<String>, ResolveError> {
        Ok(self.resolve(ch, target)?.into_iter().next())
    }

    /// Resolve, then pass each reading through `formatter`.
    pub fn resolve_formatted(
        &self,
        ch: char,
        target: RomanizationSystem,
        formatter: &dyn SyllableFormatter,
    ) -> Result<Vec<String>, ResolveError> {
        Ok(self
            .resolve(ch, target)?
            .iter()
            .map(|s| formatter.format(s))
            .collect())
    }
}

#[cfg(test)]
mod tests;
