// ⚠️ Error Types
// Structural conformance failures raised while reading a Dyen list

use thiserror::Error;

/// Everything that can go wrong while scanning or resolving a Dyen list.
///
/// Line numbers are 1-based positions in the input stream.
#[derive(Debug, Error)]
pub enum DyenError {
    /// Cognate-group number outside 0..500
    #[error("Could not classify type of cognate of CCN #{group_id}")]
    Classification { group_id: u32 },

    /// Data row whose text contains no catalog language
    #[error("Couldn't find a matching language for {text:?} (line {line})")]
    LanguageMatch { line: usize, text: String },

    /// Relation line naming a CCN never declared under its meaning group
    #[error("Couldn't find matching CCN #{group_id} in meaning group {meaning_id} ({meaning})")]
    DanglingReference {
        group_id: u32,
        meaning_id: u32,
        meaning: String,
    },

    #[error("Invalid cognate relation code {code} on line {line} (expected 0-5)")]
    InvalidJudgmentCode { line: usize, code: u32 },

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Line {line} appears before any {needs}")]
    OrphanLine { line: usize, needs: &'static str },

    #[error("Data section marker {marker:?} not found")]
    MissingDataSection { marker: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DyenError>;
