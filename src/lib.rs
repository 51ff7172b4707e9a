//! Hanzi → romanization engine.
//!
//! Re-exports the `pinyin_core` engines and adds a UniFFI export layer over
//! them for host applications.

pub mod api;
mod trace_init;

pub use pinyin_core::{
    context, format, resolve, syllable, system, table, translate, PinyinContext, PinyinResolver,
    ResolveError, ResolveMode, RomanizationSystem, RomanizationTranslator, SyllableFormatter,
    TableError, TranslateError,
};

pub use trace_init::init_tracing;

uniffi::setup_scaffolding!();

/// Hanyu Pinyin readings of `ch` from the global tables, or `None` for a
/// character without Hanyu Pinyin.
pub fn hanyu_pinyin(ch: char) -> Option<Vec<String>> {
    PinyinContext::global()
        .lookup_table()
        .get(ch)
        .map(<[String]>::to_vec)
}

/// Wade-Giles readings of `ch` from the global tables.
pub fn wade_giles(ch: char) -> Result<Vec<String>, ResolveError> {
    romanize(ch, RomanizationSystem::WadeGiles)
}

/// Readings of `ch` in `system` from the global tables.
pub fn romanize(ch: char, system: RomanizationSystem) -> Result<Vec<String>, ResolveError> {
    PinyinContext::global().resolver().resolve(ch, system)
}
