// 🔗 Cognate Group Entity - One CCN inside a meaning group
//
// Identity is the CCN number, unique only within the owning meaning group.
// Relations to sibling groups are filled in by the resolution pass and are
// always recorded on both ends.

use super::{CognateRef, MeaningRef, WordRef};
use crate::judgment::CognateJudgment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognateGroup {
    /// CCN number as declared in the file
    pub group_id: u32,

    /// Judgment implied by `group_id`
    pub judgment: CognateJudgment,

    pub meaning: MeaningRef,

    /// Direct members, in file order
    pub(crate) words: Vec<WordRef>,

    /// Cross-group relations ("cogWith"), in resolution order
    pub(crate) cog_with: Vec<(CognateRef, CognateJudgment)>,
}

impl CognateGroup {
    pub fn new(group_id: u32, judgment: CognateJudgment, meaning: MeaningRef) -> Self {
        CognateGroup {
            group_id,
            judgment,
            meaning,
            words: Vec::new(),
            cog_with: Vec::new(),
        }
    }

    pub fn words(&self) -> &[WordRef] {
        &self.words
    }

    pub fn cog_with(&self) -> &[(CognateRef, CognateJudgment)] {
        &self.cog_with
    }

    /// Related groups whose relation carries a confident or doubtful tier
    pub fn cognate_relations(&self) -> impl Iterator<Item = CognateRef> + '_ {
        self.cog_with
            .iter()
            .filter(|(_, judgment)| judgment.is_cognate())
            .map(|(group, _)| *group)
    }

    /// True when `other` is recorded with a confident relation
    pub fn is_confidently_related(&self, other: CognateRef) -> bool {
        self.cog_with
            .iter()
            .any(|(group, judgment)| *group == other && judgment.is_confident())
    }
}
