//! UniFFI export layer: type-safe bindings for host applications.
//!
//! Top-level functions use the process-wide tables (`PinyinContext::global`);
//! `PinyinEngine` wraps an explicitly loaded set.

mod engine;
mod types;

pub use engine::PinyinEngine;
pub use types::{PinyinError, PinyinSystem};

use std::path::Path;

use pinyin_core::table::{default_mapping_toml, default_unicode_toml};
use pinyin_core::PinyinContext;

use types::single_char;

fn read_file(path: &Path) -> Result<String, PinyinError> {
    std::fs::read_to_string(path).map_err(|e| PinyinError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install custom tables; must run before the first lookup.
#[uniffi::export]
fn tables_load_config(unicode_path: String, mapping_path: String) -> Result<(), PinyinError> {
    let unicode = read_file(Path::new(&unicode_path))?;
    let mapping = read_file(Path::new(&mapping_path))?;
    PinyinContext::init_custom(unicode, mapping)?;
    Ok(())
}

#[uniffi::export]
fn tables_default_unicode_config() -> String {
    default_unicode_toml().to_string()
}

#[uniffi::export]
fn tables_default_mapping_config() -> String {
    default_mapping_toml().to_string()
}

#[uniffi::export]
fn pinyin_resolve(character: String, system: PinyinSystem) -> Result<Vec<String>, PinyinError> {
    let ch = single_char(&character)?;
    Ok(PinyinContext::global()
        .resolver()
        .resolve(ch, system.into())?)
}

#[uniffi::export]
fn pinyin_translate(
    syllable: String,
    source: PinyinSystem,
    target: PinyinSystem,
) -> Result<String, PinyinError> {
    Ok(PinyinContext::global()
        .translator()
        .translate(&syllable, source.into(), target.into())?)
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
