//! Consistency checking of a world against an assignment.

use alibi_core::World;

use crate::error::EngineError;
use crate::evaluator::evaluate_statement;
use crate::statement::{Assignment, StatementContext};

/// Whether `world` satisfies the liar rule for every speaker.
///
/// Liars must make false statements and everyone else true ones. Stops at
/// the first violation.
pub fn is_world_consistent(
    world: &World,
    assignment: &Assignment,
    context: &StatementContext<'_>,
) -> Result<bool, EngineError> {
    for (&speaker, statement) in assignment {
        let truth = evaluate_statement(statement, speaker, world, context)?;
        if truth != world.requires_truth_from(speaker) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{Statement, Targets};
    use alibi_core::SuspectId;

    fn statement(template: &str, targets: Targets, text: &str) -> Statement {
        Statement {
            template_id: template.to_string(),
            targets,
            text: text.to_string(),
            accusation: true,
        }
    }

    fn one_guilty_two_lies() -> World {
        World::new(
            [SuspectId(1)].into_iter().collect(),
            [SuspectId(2)].into_iter().collect(),
        )
    }

    #[test]
    fn test_liar_making_false_claim_is_consistent() {
        let order = vec![SuspectId(1), SuspectId(2)];
        let ctx = StatementContext::new(&order);
        let assignment: Assignment = [
            (SuspectId(1), statement("i_did_it", Targets::none(), "I did it")),
            (SuspectId(2), statement("i_did_it", Targets::none(), "I did it")),
        ]
        .into_iter()
        .collect();

        assert!(is_world_consistent(&one_guilty_two_lies(), &assignment, &ctx).unwrap());
    }

    #[test]
    fn test_liar_telling_truth_is_inconsistent() {
        let order = vec![SuspectId(1), SuspectId(2)];
        let ctx = StatementContext::new(&order);
        let assignment: Assignment = [
            (SuspectId(1), statement("i_did_it", Targets::none(), "I did it")),
            (
                SuspectId(2),
                statement("target_did_it", Targets::one(SuspectId(1)), "Panther did it"),
            ),
        ]
        .into_iter()
        .collect();

        assert!(!is_world_consistent(&one_guilty_two_lies(), &assignment, &ctx).unwrap());
    }

    #[test]
    fn test_truth_teller_lying_is_inconsistent() {
        let order = vec![SuspectId(1), SuspectId(2)];
        let ctx = StatementContext::new(&order);
        let assignment: Assignment =
            [(SuspectId(1), statement("i_didnt_do_it", Targets::none(), "I didn't do it"))]
                .into_iter()
                .collect();

        assert!(!is_world_consistent(&one_guilty_two_lies(), &assignment, &ctx).unwrap());
    }

    #[test]
    fn test_unknown_template_propagates() {
        let order = vec![SuspectId(1)];
        let ctx = StatementContext::new(&order);
        let assignment: Assignment = [(SuspectId(1), statement("bogus", Targets::none(), "?"))]
            .into_iter()
            .collect();

        assert!(matches!(
            is_world_consistent(&World::default(), &assignment, &ctx),
            Err(EngineError::UnknownTemplate(_))
        ));
    }
}
