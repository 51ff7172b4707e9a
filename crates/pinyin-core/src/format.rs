/// Turns an unformatted syllable (base + tone digit) into display text.
///
/// Tone marks, case, and ü spelling belong to the implementor; the resolver
/// only hands over syllables in table order.
pub trait SyllableFormatter {
    fn format(&self, syllable: &str) -> String;
}

impl<F> SyllableFormatter for F
where
    F: Fn(&str) -> String,
{
    fn format(&self, syllable: &str) -> String {
        self(syllable)
    }
}

/// Passes syllables through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unformatted;

impl SyllableFormatter for Unformatted {
    fn format(&self, syllable: &str) -> String {
        syllable.to_string()
    }
}
