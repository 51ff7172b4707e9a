//! Splitting a romanized syllable into its base spelling and tone digit.
//!
//! Every stored syllable carries exactly one trailing tone character
//! (`1`-`4`, or `5` for the neutral tone). `split` and `join` are inverses
//! for such syllables.

use std::fmt;

/// Highest tone digit; `5` marks the neutral tone.
pub const NEUTRAL_TONE: char = '5';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllableError {
    #[error("malformed syllable (missing tone character): {0:?}")]
    Malformed(String),
}

/// A syllable split into `(base, tone)`. Borrows from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'a> {
    pub base: &'a str,
    pub tone: char,
}

impl fmt::Display for Syllable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.tone)
    }
}

pub fn is_tone(c: char) -> bool {
    ('1'..=NEUTRAL_TONE).contains(&c)
}

/// Split a syllable into base spelling and trailing tone character.
pub fn split(syllable: &str) -> Result<Syllable<'_>, SyllableError> {
    let malformed = || SyllableError::Malformed(syllable.to_string());
    let (idx, tone) = syllable.char_indices().next_back().ok_or_else(malformed)?;
    if idx == 0 || !is_tone(tone) {
        return Err(malformed());
    }
    Ok(Syllable {
        base: &syllable[..idx],
        tone,
    })
}

/// Re-attach a tone character to a base spelling.
pub fn join(base: &str, tone: char) -> String {
    let mut s = String::with_capacity(base.len() + tone.len_utf8());
    s.push_str(base);
    s.push(tone);
    s
}
