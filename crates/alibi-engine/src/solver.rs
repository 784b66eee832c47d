//! Solving: every world consistent with an assignment.

use alibi_core::{LiarConstraints, SuspectId, World};

use crate::checker::is_world_consistent;
use crate::enumerator::generate_all_possible_worlds;
use crate::error::EngineError;
use crate::statement::{Assignment, StatementContext};

/// All worlds consistent with `assignment` under the given counts.
///
/// The result may be empty or hold several worlds; uniqueness is the
/// generator's concern.
pub fn solve_case(
    assignment: &Assignment,
    suspect_ids: &[SuspectId],
    culprit_count: usize,
    constraints: &LiarConstraints,
) -> Result<Vec<World>, EngineError> {
    solve_case_bounded(assignment, suspect_ids, culprit_count, constraints, usize::MAX)
}

/// Like [`solve_case`], but stops once `limit` consistent worlds are found.
pub fn solve_case_bounded(
    assignment: &Assignment,
    suspect_ids: &[SuspectId],
    culprit_count: usize,
    constraints: &LiarConstraints,
    limit: usize,
) -> Result<Vec<World>, EngineError> {
    if let Some(&stranger) = assignment.keys().find(|&&id| !suspect_ids.contains(&id)) {
        return Err(EngineError::SpeakerNotInCase(stranger));
    }

    let context = StatementContext::new(suspect_ids);
    let mut solutions = Vec::new();

    for world in generate_all_possible_worlds(suspect_ids, culprit_count, constraints) {
        if solutions.len() >= limit {
            break;
        }
        if is_world_consistent(&world, assignment, &context)? {
            solutions.push(world);
        }
    }

    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{Statement, Targets};

    fn statement(template: &str, targets: Targets) -> Statement {
        Statement {
            template_id: template.to_string(),
            targets,
            text: String::new(),
            accusation: false,
        }
    }

    fn ids(raw: &[u8]) -> Vec<SuspectId> {
        raw.iter().copied().map(SuspectId).collect()
    }

    fn everyone_blames_one() -> Assignment {
        [
            (SuspectId(1), statement("i_did_it", Targets::none())),
            (SuspectId(2), statement("target_did_it", Targets::one(SuspectId(1)))),
            (SuspectId(3), statement("target_did_it", Targets::one(SuspectId(1)))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_finds_the_honest_solution() {
        let solutions =
            solve_case(&everyone_blames_one(), &ids(&[1, 2, 3]), 1, &LiarConstraints::any()).unwrap();

        let honest = World::new([SuspectId(1)].into_iter().collect(), Default::default());
        assert!(solutions.contains(&honest));
    }

    #[test]
    fn test_constraints_narrow_to_unique() {
        // With no liars allowed, only "1 did it" survives.
        let solutions = solve_case(
            &everyone_blames_one(),
            &ids(&[1, 2, 3]),
            1,
            &LiarConstraints::liars(0, 0),
        )
        .unwrap();
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].is_culprit(SuspectId(1)));
    }

    #[test]
    fn test_every_solution_is_consistent() {
        let order = ids(&[1, 2, 3]);
        let assignment = everyone_blames_one();
        let ctx = StatementContext::new(&order);
        for world in solve_case(&assignment, &order, 1, &LiarConstraints::any()).unwrap() {
            assert!(is_world_consistent(&world, &assignment, &ctx).unwrap());
        }
    }

    #[test]
    fn test_bounded_stops_early() {
        let order = ids(&[1, 2, 3]);
        // "I didn't do it" from everyone: many worlds fit
        let assignment: Assignment = order
            .iter()
            .map(|&id| (id, statement("i_didnt_do_it", Targets::none())))
            .collect();

        let all = solve_case(&assignment, &order, 1, &LiarConstraints::any()).unwrap();
        assert!(all.len() > 2);

        let capped = solve_case_bounded(&assignment, &order, 1, &LiarConstraints::any(), 2).unwrap();
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn test_speaker_outside_case_is_rejected() {
        let assignment: Assignment = [(SuspectId(9), statement("i_did_it", Targets::none()))]
            .into_iter()
            .collect();
        assert_eq!(
            solve_case(&assignment, &ids(&[1, 2]), 1, &LiarConstraints::any()),
            Err(EngineError::SpeakerNotInCase(SuspectId(9)))
        );
    }
}
