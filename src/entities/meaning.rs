// 📚 Meaning Group Entity - One semantic slot of the list ("hand", "foot", ...)

use super::CognateRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningGroup {
    /// Zero-based id (declared number - 1)
    pub group_id: u32,

    /// Sense description, e.g. "all", "and", "animal"
    pub sense: String,

    /// Cognate groups in file order
    pub(crate) cognate_groups: Vec<CognateRef>,

    /// Declared CCN number -> group, for resolving relation lines
    pub(crate) cognate_groups_by_id: HashMap<u32, CognateRef>,
}

impl MeaningGroup {
    pub fn new(group_id: u32, sense: String) -> Self {
        MeaningGroup {
            group_id,
            sense,
            cognate_groups: Vec::new(),
            cognate_groups_by_id: HashMap::new(),
        }
    }

    /// Register a cognate group under its declared CCN number.
    ///
    /// A repeated number replaces the earlier mapping; both groups stay in
    /// the ordered list.
    pub(crate) fn add_cognate_group(&mut self, declared_id: u32, group: CognateRef) {
        self.cognate_groups.push(group);
        self.cognate_groups_by_id.insert(declared_id, group);
    }

    pub fn cognate_groups(&self) -> &[CognateRef] {
        &self.cognate_groups
    }

    pub fn cognate_group_by_id(&self, declared_id: u32) -> Option<CognateRef> {
        self.cognate_groups_by_id.get(&declared_id).copied()
    }
}

impl fmt::Display for MeaningGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sense)
    }
}
