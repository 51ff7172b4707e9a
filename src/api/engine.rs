use std::path::Path;
use std::sync::Arc;

use pinyin_core::{PinyinContext, ResolveMode, RomanizationSystem};

use super::types::single_char;
use super::{PinyinError, PinyinSystem};

/// Engine over an explicitly loaded set of tables.
#[derive(uniffi::Object)]
pub struct PinyinEngine {
    ctx: Arc<PinyinContext>,
}

impl PinyinEngine {
    pub(crate) fn from_paths(unicode_path: &Path, mapping_path: &Path) -> Result<Self, PinyinError> {
        let unicode = super::read_file(unicode_path)?;
        let mapping = super::read_file(mapping_path)?;
        let ctx = PinyinContext::from_toml(&unicode, &mapping)?;
        Ok(Self { ctx: Arc::new(ctx) })
    }
}

#[uniffi::export]
impl PinyinEngine {
    #[uniffi::constructor]
    fn open(unicode_path: String, mapping_path: String) -> Result<Arc<Self>, PinyinError> {
        Self::from_paths(Path::new(&unicode_path), Path::new(&mapping_path)).map(Arc::new)
    }

    #[uniffi::constructor]
    fn bundled() -> Result<Arc<Self>, PinyinError> {
        let ctx = PinyinContext::bundled()?;
        Ok(Arc::new(Self { ctx: Arc::new(ctx) }))
    }

    /// Readings of a single character. With `best_effort`, readings that
    /// cannot be translated into `system` are dropped instead of failing.
    pub fn resolve(
        &self,
        character: String,
        system: PinyinSystem,
        best_effort: bool,
    ) -> Result<Vec<String>, PinyinError> {
        let ch = single_char(&character)?;
        let mode = if best_effort {
            ResolveMode::BestEffort
        } else {
            ResolveMode::Strict
        };
        Ok(self
            .ctx
            .resolver()
            .with_mode(mode)
            .resolve(ch, system.into())?)
    }

    pub fn translate(
        &self,
        syllable: String,
        source: PinyinSystem,
        target: PinyinSystem,
    ) -> Result<String, PinyinError> {
        Ok(self
            .ctx
            .translator()
            .translate(&syllable, source.into(), target.into())?)
    }

    pub fn has_pinyin(&self, character: String) -> bool {
        single_char(&character).is_ok_and(|ch| self.ctx.lookup_table().contains(ch))
    }
}

impl PinyinEngine {
    pub fn context(&self) -> &PinyinContext {
        &self.ctx
    }

    pub fn hanyu(&self, ch: char) -> Option<&[String]> {
        self.ctx.lookup_table().get(ch)
    }

    pub fn resolve_char(
        &self,
        ch: char,
        system: RomanizationSystem,
    ) -> Result<Vec<String>, PinyinError> {
        Ok(self.ctx.resolver().resolve(ch, system)?)
    }
}
