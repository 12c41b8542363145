// Entity Models
// Words, cognate groups and meaning groups of a Dyen list
//
// The Dataset owns every entity in an arena; entities point at each
// other through the copyable handles below instead of references.

pub mod word;
pub mod cognate;
pub mod meaning;

pub use word::{strip_annotations, Word};
pub use cognate::CognateGroup;
pub use meaning::MeaningGroup;

use serde::{Deserialize, Serialize};

/// Handle to a MeaningGroup in its Dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeaningRef(pub(crate) usize);

/// Handle to a CognateGroup in its Dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CognateRef(pub(crate) usize);

/// Handle to a Word in its Dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordRef(pub(crate) usize);

impl MeaningRef {
    /// Position in `Dataset::meaning_groups()`
    pub fn index(&self) -> usize {
        self.0
    }
}

impl CognateRef {
    /// Position in `Dataset::cognate_groups()`
    pub fn index(&self) -> usize {
        self.0
    }
}

impl WordRef {
    /// Position in `Dataset::words()`
    pub fn index(&self) -> usize {
        self.0
    }
}
