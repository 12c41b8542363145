// Dyen Cognates - Core Library
// Reads the Dyen Indo-European cognate list into an in-memory model of
// meanings, cognate groups and words.

pub mod error;
pub mod judgment;
pub mod languages;
pub mod entities;
pub mod dataset;
pub mod parser;
pub mod rules;
pub mod config;

// Re-export commonly used types
pub use error::{DyenError, Result};
pub use judgment::{classify, CognateJudgment, Confidence, Exclusivity, MAX_GROUP_ID};
pub use languages::{LanguageCatalog, LanguageMatch, DYEN_LANGUAGES};
pub use entities::{
    CognateGroup, CognateRef,
    MeaningGroup, MeaningRef,
    Word, WordRef,
};
pub use dataset::{Dataset, DatasetSummary};
pub use parser::{
    DyenParser, ScanSession, ScanState, LineKind, PendingRelation,
    read_from_dyen_form,
};
pub use rules::{RewriteEngine, RewriteOutcome, RewriteRule};
pub use config::DyenConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
