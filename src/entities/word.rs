// 📝 Word Entity - One lexical form in one language
//
// The normalized form (annotations stripped) is the only mutable value;
// the original representation and the relational links never change.

use super::{CognateRef, MeaningRef};
use serde::{Deserialize, Serialize};

/// Remove every "(...)" annotation and trim the result.
///
/// An unclosed "(" is kept as text.
///
/// ```
/// use dyen_cognates::entities::strip_annotations;
/// assert_eq!(strip_annotations("foo(bar) "), "foo");
/// assert_eq!(strip_annotations(" hand (arm)"), "hand");
/// ```
pub fn strip_annotations(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                stripped.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    stripped.push_str(rest);

    stripped.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Normalized form, rewritable via `Dataset::transform_words_in_language`
    pub(crate) word: String,

    /// Comma-split segment exactly as it appeared in the file
    original_rep: String,

    language: String,
    meaning: MeaningRef,
    cognate: CognateRef,
}

impl Word {
    pub fn new(raw: &str, language: &str, meaning: MeaningRef, cognate: CognateRef) -> Self {
        Word {
            word: strip_annotations(raw),
            original_rep: raw.to_string(),
            language: language.to_string(),
            meaning,
            cognate,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn original_rep(&self) -> &str {
        &self.original_rep
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn meaning(&self) -> MeaningRef {
        self.meaning
    }

    pub fn cognate(&self) -> CognateRef {
        self.cognate
    }
}
