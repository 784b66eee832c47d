//! A generated, solution-verified case.

use serde::{Deserialize, Serialize};

use alibi_core::{lookup, CaseConfig, Suspect, SuspectId, World};

use crate::error::EngineError;
use crate::solver::solve_case;
use crate::statement::{Assignment, Statement, StatementContext};

/// A finished puzzle: suspects, their statements and the unique solution.
///
/// `suspect_ids` is the seating order used by positional statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub suspect_ids: Vec<SuspectId>,
    pub statements: Assignment,
    pub solution: World,
    pub config: CaseConfig,
}

impl Case {
    /// Roster entries for the case's suspects, in seating order.
    pub fn suspects(&self) -> Result<Vec<&'static Suspect>, EngineError> {
        self.suspect_ids
            .iter()
            .map(|&id| lookup(id).ok_or(EngineError::UnknownSuspect(id)))
            .collect()
    }

    #[must_use]
    pub fn statement(&self, speaker: SuspectId) -> Option<&Statement> {
        self.statements.get(&speaker)
    }

    /// Evaluation context over the case's seating order.
    #[must_use]
    pub fn context(&self) -> StatementContext<'_> {
        StatementContext::new(&self.suspect_ids)
    }

    /// Re-solve the case from its statements and configuration.
    pub fn solve(&self) -> Result<Vec<World>, EngineError> {
        solve_case(
            &self.statements,
            &self.suspect_ids,
            self.config.culprit_count,
            &self.config.constraints,
        )
    }
}
