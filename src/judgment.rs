// ⚖️ Cognate Judgments
// Confidence × exclusivity classification encoded in CCN numbers

use crate::error::{DyenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

// ============================================================================
// TIERS
// ============================================================================

/// How sure the compilers were that the forms are related
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Confidence {
    #[default]
    Unknown,
    /// Form has no cognates in the list
    Unique,
    Confident,
    Doubtful,
}

/// Whether the group's members also belong to another group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Exclusivity {
    #[default]
    Unspecified,
    Exclusive,
    NotExclusive,
}

// ============================================================================
// JUDGMENT
// ============================================================================

/// Composite cognacy judgment attached to a cognate group or a relation.
///
/// The two tiers are independent, so `COG_CONFIDENT | NOT_EXCLUSIVE`
/// carries both pieces of information at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CognateJudgment {
    pub confidence: Confidence,
    pub exclusivity: Exclusivity,
}

impl CognateJudgment {
    pub const UNKNOWN: CognateJudgment = CognateJudgment::new(Confidence::Unknown, Exclusivity::Unspecified);
    pub const UNIQUE: CognateJudgment = CognateJudgment::new(Confidence::Unique, Exclusivity::Unspecified);
    pub const COG_CONFIDENT: CognateJudgment = CognateJudgment::new(Confidence::Confident, Exclusivity::Unspecified);
    pub const COG_DOUBTFUL: CognateJudgment = CognateJudgment::new(Confidence::Doubtful, Exclusivity::Unspecified);
    pub const EXCLUSIVE: CognateJudgment = CognateJudgment::new(Confidence::Unknown, Exclusivity::Exclusive);
    pub const NOT_EXCLUSIVE: CognateJudgment = CognateJudgment::new(Confidence::Unknown, Exclusivity::NotExclusive);

    pub const fn new(confidence: Confidence, exclusivity: Exclusivity) -> Self {
        CognateJudgment { confidence, exclusivity }
    }

    /// Decode the single-flag code (0-5) carried by a relation line
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::UNKNOWN),
            1 => Some(Self::UNIQUE),
            2 => Some(Self::COG_CONFIDENT),
            3 => Some(Self::COG_DOUBTFUL),
            4 => Some(Self::EXCLUSIVE),
            5 => Some(Self::NOT_EXCLUSIVE),
            _ => None,
        }
    }

    /// True when every tier set in `other` is also set here
    pub fn contains(&self, other: CognateJudgment) -> bool {
        let confidence_ok =
            other.confidence == Confidence::Unknown || other.confidence == self.confidence;
        let exclusivity_ok =
            other.exclusivity == Exclusivity::Unspecified || other.exclusivity == self.exclusivity;
        confidence_ok && exclusivity_ok
    }

    /// Confident or doubtful cognacy; gates reflex collection
    pub fn is_cognate(&self) -> bool {
        matches!(self.confidence, Confidence::Confident | Confidence::Doubtful)
    }

    pub fn is_confident(&self) -> bool {
        self.confidence == Confidence::Confident
    }

    /// Flag names in declaration order
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        match self.confidence {
            Confidence::Unknown => {}
            Confidence::Unique => flags.push("UNIQUE"),
            Confidence::Confident => flags.push("COG_CONFIDENT"),
            Confidence::Doubtful => flags.push("COG_DOUBTFUL"),
        }
        match self.exclusivity {
            Exclusivity::Unspecified => {}
            Exclusivity::Exclusive => flags.push("EXCLUSIVE"),
            Exclusivity::NotExclusive => flags.push("NOT_EXCLUSIVE"),
        }
        if flags.is_empty() {
            flags.push("UNKNOWN");
        }
        flags
    }
}

impl BitOr for CognateJudgment {
    type Output = CognateJudgment;

    /// Later non-default tiers win
    fn bitor(self, rhs: CognateJudgment) -> CognateJudgment {
        CognateJudgment {
            confidence: if rhs.confidence == Confidence::Unknown {
                self.confidence
            } else {
                rhs.confidence
            },
            exclusivity: if rhs.exclusivity == Exclusivity::Unspecified {
                self.exclusivity
            } else {
                rhs.exclusivity
            },
        }
    }
}

impl fmt::Display for CognateJudgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flags().join(" | "))
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Upper bound (exclusive) of valid cognate-group numbers
pub const MAX_GROUP_ID: u32 = 500;

/// Derive the judgment implied by a cognate-group number
///
/// | range   | judgment                       |
/// |---------|--------------------------------|
/// | 0       | UNKNOWN                        |
/// | 1       | UNIQUE                         |
/// | 2-99    | COG_CONFIDENT \| EXCLUSIVE     |
/// | 100-199 | COG_DOUBTFUL \| EXCLUSIVE      |
/// | 200-399 | COG_CONFIDENT \| NOT_EXCLUSIVE |
/// | 400-499 | COG_DOUBTFUL \| NOT_EXCLUSIVE  |
pub fn classify(group_id: u32) -> Result<CognateJudgment> {
    let judgment = match group_id {
        0 => CognateJudgment::UNKNOWN,
        1 => CognateJudgment::UNIQUE,
        2..=99 => CognateJudgment::COG_CONFIDENT | CognateJudgment::EXCLUSIVE,
        100..=199 => CognateJudgment::COG_DOUBTFUL | CognateJudgment::EXCLUSIVE,
        200..=399 => CognateJudgment::COG_CONFIDENT | CognateJudgment::NOT_EXCLUSIVE,
        400..=499 => CognateJudgment::COG_DOUBTFUL | CognateJudgment::NOT_EXCLUSIVE,
        _ => return Err(DyenError::Classification { group_id }),
    };
    Ok(judgment)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0).unwrap(), CognateJudgment::UNKNOWN);
        assert_eq!(classify(1).unwrap(), CognateJudgment::UNIQUE);

        let confident_exclusive = CognateJudgment::new(Confidence::Confident, Exclusivity::Exclusive);
        assert_eq!(classify(2).unwrap(), confident_exclusive);
        assert_eq!(classify(99).unwrap(), confident_exclusive);

        let doubtful_exclusive = CognateJudgment::new(Confidence::Doubtful, Exclusivity::Exclusive);
        assert_eq!(classify(100).unwrap(), doubtful_exclusive);
        assert_eq!(classify(199).unwrap(), doubtful_exclusive);

        let confident_shared = CognateJudgment::new(Confidence::Confident, Exclusivity::NotExclusive);
        assert_eq!(classify(200).unwrap(), confident_shared);
        assert_eq!(classify(399).unwrap(), confident_shared);

        let doubtful_shared = CognateJudgment::new(Confidence::Doubtful, Exclusivity::NotExclusive);
        assert_eq!(classify(400).unwrap(), doubtful_shared);
        assert_eq!(classify(499).unwrap(), doubtful_shared);
    }

    #[test]
    fn test_classify_rejects_500_and_above() {
        for id in [500, 501, 999, u32::MAX] {
            match classify(id) {
                Err(DyenError::Classification { group_id }) => assert_eq!(group_id, id),
                other => panic!("expected classification error for {}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_classify_whole_domain_is_deterministic() {
        for id in 0..MAX_GROUP_ID {
            let first = classify(id).unwrap();
            let second = classify(id).unwrap();
            assert_eq!(first, second);
            // Only 0 and 1 lack an exclusivity tier
            assert_eq!(first.exclusivity == Exclusivity::Unspecified, id < 2, "id {}", id);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(CognateJudgment::from_code(2), Some(CognateJudgment::COG_CONFIDENT));
        assert_eq!(CognateJudgment::from_code(3), Some(CognateJudgment::COG_DOUBTFUL));
        assert_eq!(CognateJudgment::from_code(5), Some(CognateJudgment::NOT_EXCLUSIVE));
        assert_eq!(CognateJudgment::from_code(6), None);
    }

    #[test]
    fn test_contains_and_gates() {
        let j = CognateJudgment::COG_DOUBTFUL | CognateJudgment::NOT_EXCLUSIVE;
        assert!(j.contains(CognateJudgment::COG_DOUBTFUL));
        assert!(j.contains(CognateJudgment::NOT_EXCLUSIVE));
        assert!(!j.contains(CognateJudgment::COG_CONFIDENT));
        assert!(j.is_cognate());
        assert!(!j.is_confident());

        assert!(!CognateJudgment::EXCLUSIVE.is_cognate());
        assert!(!CognateJudgment::UNIQUE.is_cognate());
    }

    #[test]
    fn test_display() {
        let j = CognateJudgment::COG_CONFIDENT | CognateJudgment::NOT_EXCLUSIVE;
        assert_eq!(j.to_string(), "COG_CONFIDENT | NOT_EXCLUSIVE");
        assert_eq!(CognateJudgment::UNKNOWN.to_string(), "UNKNOWN");
    }
}
