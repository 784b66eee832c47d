//! Case invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | OneStatementPerSuspect | Every seated suspect speaks exactly once |
//! | SolutionRespectsConstraints | Culprit count and liar count match the config |
//! | SolutionIsConsistent | The stored solution satisfies every statement |
//! | UniqueSolution | No other world is consistent with the statements |
//! | DistinctStatementText | No two suspects show the same text |
//! | HasAccusation | At least one statement names guilt or innocence |
//! | TargetsWellFormed | Bindings match the template, exclude the speaker, render to the text |

use std::collections::HashSet;

use alibi_core::{PropertyChecker, PropertyResult, SuspectSet};

use crate::case::Case;
use crate::catalog;
use crate::checker::is_world_consistent;
use crate::solver::solve_case_bounded;

/// Property checker for generated cases.
pub struct CasePropertyChecker<'a> {
    case: &'a Case,
}

impl<'a> CasePropertyChecker<'a> {
    #[must_use]
    pub fn new(case: &'a Case) -> Self {
        Self { case }
    }

    fn seated(&self) -> SuspectSet {
        self.case.suspect_ids.iter().copied().collect()
    }

    fn check_one_statement_per_suspect(&self) -> PropertyResult {
        const NAME: &str = "OneStatementPerSuspect";
        let case = self.case;

        if case.suspect_ids.len() != case.config.suspect_count {
            return PropertyResult::fail(
                NAME,
                format!(
                    "{} suspects seated, config asks for {}",
                    case.suspect_ids.len(),
                    case.config.suspect_count
                ),
                None,
            );
        }
        if let Some(silent) = case.suspect_ids.iter().find(|id| !case.statements.contains_key(*id)) {
            return PropertyResult::fail(NAME, format!("Suspect {} has no statement", silent), None);
        }
        let seated = self.seated();
        if let Some(stranger) = case.statements.keys().find(|id| !seated.contains(**id)) {
            return PropertyResult::fail(
                NAME,
                format!("Statement from {} who is not seated", stranger),
                None,
            );
        }
        PropertyResult::pass(NAME)
    }

    fn check_solution_respects_constraints(&self) -> PropertyResult {
        const NAME: &str = "SolutionRespectsConstraints";
        let case = self.case;
        let solution = &case.solution;
        let seated = self.seated();

        if solution.culprits.len() != case.config.culprit_count {
            return PropertyResult::fail(
                NAME,
                format!(
                    "{} culprits, config asks for {}",
                    solution.culprits.len(),
                    case.config.culprit_count
                ),
                Some(*solution),
            );
        }
        if !case.config.liar_range().contains(&solution.liars.len()) {
            return PropertyResult::fail(
                NAME,
                format!(
                    "{} liars outside {:?}",
                    solution.liars.len(),
                    case.config.liar_range()
                ),
                Some(*solution),
            );
        }
        if !solution.culprits.is_subset(&seated) || !solution.liars.is_subset(&seated) {
            return PropertyResult::fail(
                NAME,
                "Solution names a suspect who is not seated".to_string(),
                Some(*solution),
            );
        }
        PropertyResult::pass(NAME)
    }

    fn check_solution_is_consistent(&self) -> PropertyResult {
        const NAME: &str = "SolutionIsConsistent";
        let case = self.case;

        match is_world_consistent(&case.solution, &case.statements, &case.context()) {
            Ok(true) => PropertyResult::pass(NAME),
            Ok(false) => PropertyResult::fail(
                NAME,
                "Stored solution contradicts a statement".to_string(),
                Some(case.solution),
            ),
            Err(e) => PropertyResult::fail(NAME, e.to_string(), None),
        }
    }

    fn check_unique_solution(&self) -> PropertyResult {
        const NAME: &str = "UniqueSolution";
        let case = self.case;

        let solutions = match solve_case_bounded(
            &case.statements,
            &case.suspect_ids,
            case.config.culprit_count,
            &case.config.constraints,
            2,
        ) {
            Ok(solutions) => solutions,
            Err(e) => return PropertyResult::fail(NAME, e.to_string(), None),
        };

        match solutions.as_slice() {
            [only] if *only == case.solution => PropertyResult::pass(NAME),
            [only] => PropertyResult::fail(
                NAME,
                "The single consistent world differs from the stored solution".to_string(),
                Some(*only),
            ),
            [] => PropertyResult::fail(NAME, "No world is consistent".to_string(), None),
            [first, second, ..] => {
                let other = if *first == case.solution { second } else { first };
                PropertyResult::fail(
                    NAME,
                    "More than one world is consistent".to_string(),
                    Some(*other),
                )
            }
        }
    }

    fn check_distinct_statement_text(&self) -> PropertyResult {
        const NAME: &str = "DistinctStatementText";
        let mut seen = HashSet::new();

        for statement in self.case.statements.values() {
            if !seen.insert(statement.text.as_str()) {
                return PropertyResult::fail(
                    NAME,
                    format!("\"{}\" appears more than once", statement.text),
                    None,
                );
            }
        }
        PropertyResult::pass(NAME)
    }

    fn check_has_accusation(&self) -> PropertyResult {
        const NAME: &str = "HasAccusation";

        if self.case.statements.values().any(|s| s.accusation) {
            PropertyResult::pass(NAME)
        } else {
            PropertyResult::fail(NAME, "No statement is an accusation".to_string(), None)
        }
    }

    fn check_targets_well_formed(&self) -> PropertyResult {
        const NAME: &str = "TargetsWellFormed";
        let seated = self.seated();

        for (&speaker, statement) in &self.case.statements {
            let fail = |why: String| {
                PropertyResult::fail(NAME, format!("Statement of {}: {}", speaker, why), None)
            };

            let Some(template) = catalog::find(&statement.template_id) else {
                return fail(format!("unknown template {}", statement.template_id));
            };
            let targets = statement.targets;

            if template.requires_target() != targets.target_id.is_some()
                || template.requires_second_target() != targets.second_target_id.is_some()
            {
                return fail(format!("bindings do not match {}", template.id));
            }
            let bound = [targets.target_id, targets.second_target_id];
            if bound.iter().flatten().any(|&t| t == speaker || !seated.contains(t)) {
                return fail("target is the speaker or not seated".to_string());
            }
            if let [Some(a), Some(b)] = bound {
                if a == b {
                    return fail("both targets are the same suspect".to_string());
                }
            }
            if template.accusation != statement.accusation {
                return fail("accusation marker differs from template".to_string());
            }
            match template.render(targets) {
                Ok(text) if text == statement.text => {}
                Ok(text) => return fail(format!("text \"{}\" should read \"{}\"", statement.text, text)),
                Err(e) => return fail(e.to_string()),
            }
        }
        PropertyResult::pass(NAME)
    }
}

impl PropertyChecker for CasePropertyChecker<'_> {
    fn check_all(&self) -> Vec<PropertyResult> {
        vec![
            self.check_one_statement_per_suspect(),
            self.check_solution_respects_constraints(),
            self.check_solution_is_consistent(),
            self.check_unique_solution(),
            self.check_distinct_statement_text(),
            self.check_has_accusation(),
            self.check_targets_well_formed(),
        ]
    }
}
