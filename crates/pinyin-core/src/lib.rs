//! Hanzi → Hanyu Pinyin lookup and syllable translation across Chinese
//! romanization systems.

pub mod context;
pub mod format;
pub mod resolve;
pub mod syllable;
pub mod system;
pub mod table;
pub mod translate;

pub use context::PinyinContext;
pub use format::{SyllableFormatter, Unformatted};
pub use resolve::{PinyinResolver, ResolveError, ResolveMode};
pub use syllable::{Syllable, SyllableError};
pub use system::RomanizationSystem;
pub use table::{LookupError, TableError};
pub use translate::{RomanizationTranslator, TranslateError};
