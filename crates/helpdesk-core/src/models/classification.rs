use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use crate::constants::MAX_ALTERNATIVE_GROUPS;

/// One scored support-group candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupScore {
    pub name: String,
    pub confidence: Confidence,
    pub reasoning: String,
}

impl GroupScore {
    pub fn new(name: impl Into<String>, confidence: u8, reasoning: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            confidence: Confidence::new(confidence),
            reasoning: reasoning.into(),
        }
    }
}

/// Output of the pattern classifier: a primary group plus at most two
/// alternatives, none of which repeats the primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub primary_group: GroupScore,
    pub alternative_groups: Vec<GroupScore>,
}

impl ClassificationResult {
    /// Build a result, dropping alternatives that repeat the primary (or each
    /// other) and keeping at most [`MAX_ALTERNATIVE_GROUPS`] of the rest.
    pub fn new(primary_group: GroupScore, alternatives: Vec<GroupScore>) -> Self {
        let mut alternative_groups: Vec<GroupScore> = Vec::with_capacity(MAX_ALTERNATIVE_GROUPS);
        for alt in alternatives {
            if alternative_groups.len() == MAX_ALTERNATIVE_GROUPS {
                break;
            }
            if alt.name == primary_group.name
                || alternative_groups.iter().any(|g| g.name == alt.name)
            {
                continue;
            }
            alternative_groups.push(alt);
        }
        Self {
            primary_group,
            alternative_groups,
        }
    }

    /// Primary-only result.
    pub fn primary_only(primary_group: GroupScore) -> Self {
        Self::new(primary_group, Vec::new())
    }

    /// All group names mentioned, primary first.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_group.name.as_str())
            .chain(self.alternative_groups.iter().map(|g| g.name.as_str()))
    }
}
