use pinyin_core::{ResolveError, RomanizationSystem, TableError, TranslateError};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum PinyinError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("invalid character input: {msg}")]
    InvalidInput { msg: String },
    #[error("not a recognized Chinese character: {character}")]
    NotRecognized { character: String },
    #[error("unknown syllable: {msg}")]
    UnknownSyllable { msg: String },
    #[error("no counterpart: {msg}")]
    NoCounterpart { msg: String },
    #[error("malformed syllable: {msg}")]
    MalformedSyllable { msg: String },
}

impl From<TableError> for PinyinError {
    fn from(e: TableError) -> Self {
        PinyinError::InvalidData { msg: e.to_string() }
    }
}

impl From<TranslateError> for PinyinError {
    fn from(e: TranslateError) -> Self {
        let msg = e.to_string();
        match e {
            TranslateError::UnknownSyllable { .. } => PinyinError::UnknownSyllable { msg },
            TranslateError::NoCounterpart { .. } => PinyinError::NoCounterpart { msg },
            TranslateError::Malformed(_) => PinyinError::MalformedSyllable { msg },
        }
    }
}

impl From<ResolveError> for PinyinError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotRecognized(ch) => PinyinError::NotRecognized {
                character: ch.to_string(),
            },
            ResolveError::Lookup(e) => PinyinError::InvalidInput { msg: e.to_string() },
            ResolveError::Translate { source, .. } => source.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PinyinSystem {
    HanyuPinyin,
    WadeGiles,
    Mps2,
    Yale,
    Tongyong,
}

impl From<PinyinSystem> for RomanizationSystem {
    fn from(s: PinyinSystem) -> Self {
        match s {
            PinyinSystem::HanyuPinyin => RomanizationSystem::HanyuPinyin,
            PinyinSystem::WadeGiles => RomanizationSystem::WadeGiles,
            PinyinSystem::Mps2 => RomanizationSystem::Mps2,
            PinyinSystem::Yale => RomanizationSystem::Yale,
            PinyinSystem::Tongyong => RomanizationSystem::Tongyong,
        }
    }
}

/// Parse a host string that must hold exactly one character.
pub(crate) fn single_char(s: &str) -> Result<char, PinyinError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(PinyinError::InvalidInput {
            msg: format!("expected a single character, got {s:?}"),
        }),
    }
}
