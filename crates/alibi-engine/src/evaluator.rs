//! Statement evaluation.

use alibi_core::{SuspectId, World};

use crate::catalog;
use crate::error::EngineError;
use crate::statement::{Statement, StatementContext};

/// Truth value of `statement` spoken by `speaker` in `world`.
///
/// The statement's own targets are merged into `context` before the
/// template predicate runs. An id absent from the catalog is an internal
/// error and is returned as such.
pub fn evaluate_statement(
    statement: &Statement,
    speaker: SuspectId,
    world: &World,
    context: &StatementContext<'_>,
) -> Result<bool, EngineError> {
    let Some(template) = catalog::find(&statement.template_id) else {
        tracing::error!(template = %statement.template_id, speaker = %speaker, "Statement references unknown template");
        return Err(EngineError::UnknownTemplate(statement.template_id.clone()));
    };

    Ok(template.evaluate(speaker, world, &context.with_targets(statement.targets)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::Targets;
    use alibi_core::SuspectSet;

    fn ids(raw: &[u8]) -> Vec<SuspectId> {
        raw.iter().copied().map(SuspectId).collect()
    }

    fn statement(template: &str, targets: Targets) -> Statement {
        Statement {
            template_id: template.to_string(),
            targets,
            text: String::new(),
            accusation: false,
        }
    }

    #[test]
    fn test_simple_statement() {
        let order = ids(&[1, 2, 3]);
        let ctx = StatementContext::new(&order);
        let world = World::new([SuspectId(1)].into_iter().collect(), SuspectSet::new());
        let stmt = statement("i_did_it", Targets::none());

        assert!(evaluate_statement(&stmt, SuspectId(1), &world, &ctx).unwrap());
        assert!(!evaluate_statement(&stmt, SuspectId(2), &world, &ctx).unwrap());
    }

    #[test]
    fn test_referential_statement() {
        let order = ids(&[1, 2, 3]);
        let ctx = StatementContext::new(&order);
        let world = World::new(SuspectSet::new(), [SuspectId(2)].into_iter().collect());
        let stmt = statement("target_is_lying", Targets::one(SuspectId(2)));

        assert!(evaluate_statement(&stmt, SuspectId(1), &world, &ctx).unwrap());
    }

    #[test]
    fn test_statement_targets_override_context() {
        let order = ids(&[1, 2, 3]);
        let stale = StatementContext::new(&order).with_targets(Targets::one(SuspectId(3)));
        let world = World::new([SuspectId(1)].into_iter().collect(), SuspectSet::new());
        let stmt = statement("target_did_it", Targets::one(SuspectId(1)));

        assert!(evaluate_statement(&stmt, SuspectId(2), &world, &stale).unwrap());
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let order = ids(&[2, 5, 7]);
        let ctx = StatementContext::new(&order);
        let world = World::new([SuspectId(5)].into_iter().collect(), [SuspectId(7)].into_iter().collect());
        let stmt = statement("neighbor_is_lying", Targets::none());

        let first = evaluate_statement(&stmt, SuspectId(2), &world, &ctx).unwrap();
        let second = evaluate_statement(&stmt, SuspectId(2), &world, &ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let order = ids(&[1, 2]);
        let ctx = StatementContext::new(&order);
        let stmt = statement("moon_did_it", Targets::none());

        assert_eq!(
            evaluate_statement(&stmt, SuspectId(1), &World::default(), &ctx),
            Err(EngineError::UnknownTemplate("moon_did_it".to_string()))
        );
    }
}
