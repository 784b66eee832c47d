//! Statement instances and the context they are evaluated in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use alibi_core::SuspectId;

/// Third parties a statement refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<SuspectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_target_id: Option<SuspectId>,
}

impl Targets {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn one(target: SuspectId) -> Self {
        Self {
            target_id: Some(target),
            second_target_id: None,
        }
    }

    #[must_use]
    pub fn two(target: SuspectId, second: SuspectId) -> Self {
        Self {
            target_id: Some(target),
            second_target_id: Some(second),
        }
    }
}

/// A template bound to concrete targets, with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub template_id: String,
    #[serde(default)]
    pub targets: Targets,
    pub text: String,
    #[serde(default, rename = "isAccusation")]
    pub accusation: bool,
}

/// Each speaking suspect mapped to exactly one statement.
pub type Assignment = BTreeMap<SuspectId, Statement>;

/// Evaluation context: the case's suspect order plus bound targets.
///
/// The suspect order defines the circular seating used by positional
/// statements.
#[derive(Debug, Clone, Copy)]
pub struct StatementContext<'a> {
    pub suspect_ids: &'a [SuspectId],
    pub target: Option<SuspectId>,
    pub second_target: Option<SuspectId>,
}

impl<'a> StatementContext<'a> {
    #[must_use]
    pub fn new(suspect_ids: &'a [SuspectId]) -> Self {
        Self {
            suspect_ids,
            target: None,
            second_target: None,
        }
    }

    /// Context with the statement's bindings merged in.
    #[must_use]
    pub fn with_targets(&self, targets: Targets) -> Self {
        Self {
            suspect_ids: self.suspect_ids,
            target: targets.target_id,
            second_target: targets.second_target_id,
        }
    }

    /// The two circular neighbours of `id` in case order.
    ///
    /// Returns `None` when `id` is not seated in this case.
    #[must_use]
    pub fn neighbors(&self, id: SuspectId) -> Option<[SuspectId; 2]> {
        let n = self.suspect_ids.len();
        let index = self.suspect_ids.iter().position(|&s| s == id)?;
        let left = self.suspect_ids[(index + n - 1) % n];
        let right = self.suspect_ids[(index + 1) % n];
        Some([left, right])
    }
}
