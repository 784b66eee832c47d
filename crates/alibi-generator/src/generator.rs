//! Case generator with a verification loop.
//!
//! Each attempt seats suspects, draws a true world, gives every suspect a
//! statement whose truth matches their role in that world, then asks the
//! solver whether the statements pin down that world alone. Attempts are
//! independent; there is no backtracking, only resampling.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::Serialize;

use alibi_core::{roster_ids, CaseConfig, PropertyChecker, SuspectId, SuspectSet, World};
use alibi_engine::catalog::{self, StatementTemplate, TargetArity};
use alibi_engine::{
    solve_case_bounded, world_count, Assignment, Case, CasePropertyChecker, EngineError, Statement,
    StatementContext, Targets,
};

use crate::error::GenerationError;
use crate::random::CaseRng;

/// Default attempt budget per request.
pub const MAX_ATTEMPTS_DEFAULT: u32 = 5000;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Attempts before giving up with `GenerationError::Exhausted`
    pub max_attempts: u32,
    /// Reject assignments with no accusation statement
    pub require_accusation: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS_DEFAULT,
            require_accusation: true,
        }
    }
}

impl GeneratorConfig {
    /// Small budget for interactive use.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            max_attempts: 500,
            ..Default::default()
        }
    }

    /// Large budget for tight configurations.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            max_attempts: 20_000,
            ..Default::default()
        }
    }
}

/// Counters from one generation request.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Attempts made, including the successful one
    pub attempts: u32,
    /// Attempts where some suspect had no admissible statement
    pub assignment_failures: u32,
    /// Attempts rejected for lacking an accusation
    pub missing_accusation: u32,
    /// Attempts whose statements admitted more than one world
    pub ambiguous: u32,
    pub elapsed: Duration,
}

impl GenerationStats {
    /// Format as a single summary line.
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "attempts={} no_statement={} no_accusation={} ambiguous={} elapsed={:.1}ms",
            self.attempts,
            self.assignment_failures,
            self.missing_accusation,
            self.ambiguous,
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

/// Why a single attempt was thrown away.
#[derive(Debug, Clone, Copy)]
enum Rejection {
    NoStatement(SuspectId),
    NoAccusation,
    Ambiguous,
}

/// Builds cases whose statements admit exactly one world.
#[derive(Debug, Clone, Default)]
pub struct CaseGenerator {
    config: GeneratorConfig,
}

impl CaseGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate one case.
    pub fn generate(&self, case_config: &CaseConfig, rng: &mut CaseRng) -> Result<Case, GenerationError> {
        self.generate_with_stats(case_config, rng).map(|(case, _)| case)
    }

    /// Generate one case and report how much searching it took.
    pub fn generate_with_stats(
        &self,
        case_config: &CaseConfig,
        rng: &mut CaseRng,
    ) -> Result<(Case, GenerationStats), GenerationError> {
        case_config.validate()?;

        let start = Instant::now();
        let mut stats = GenerationStats::default();
        tracing::debug!(
            seed = rng.seed(),
            worlds = ?world_count(
                case_config.suspect_count,
                case_config.culprit_count,
                &case_config.constraints
            ),
            max_attempts = self.config.max_attempts,
            "Generating case"
        );

        for attempt in 1..=self.config.max_attempts {
            stats.attempts = attempt;

            match self.attempt(case_config, rng)? {
                Ok(case) => {
                    stats.elapsed = start.elapsed();
                    debug_assert!(
                        CasePropertyChecker::new(&case).all_hold(),
                        "generated case violates its invariants"
                    );
                    tracing::info!(
                        seed = rng.seed(),
                        suspects = case_config.suspect_count,
                        culprits = case_config.culprit_count,
                        difficulty = case_config.difficulty,
                        attempts = stats.attempts,
                        elapsed_ms = stats.elapsed.as_millis() as u64,
                        "Case generated"
                    );
                    return Ok((case, stats));
                }
                Err(rejection) => {
                    match rejection {
                        Rejection::NoStatement(speaker) => {
                            stats.assignment_failures += 1;
                            tracing::debug!(attempt, %speaker, "No admissible statement");
                        }
                        Rejection::NoAccusation => {
                            stats.missing_accusation += 1;
                            tracing::debug!(attempt, "No accusation");
                        }
                        Rejection::Ambiguous => {
                            stats.ambiguous += 1;
                            tracing::debug!(attempt, "Statements admit more than one world");
                        }
                    }
                }
            }
        }

        stats.elapsed = start.elapsed();
        tracing::warn!(
            seed = rng.seed(),
            stats = %stats.format_summary(),
            "Generation exhausted"
        );
        Err(GenerationError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// One full attempt: suspects, true world, statements, uniqueness.
    fn attempt(
        &self,
        case_config: &CaseConfig,
        rng: &mut CaseRng,
    ) -> Result<Result<Case, Rejection>, EngineError> {
        let suspect_ids = pick_suspects(case_config.suspect_count, rng);
        let solution = pick_true_world(&suspect_ids, case_config, rng);

        let statements = match build_assignment(&suspect_ids, &solution, case_config.difficulty, rng)? {
            Ok(statements) => statements,
            Err(speaker) => return Ok(Err(Rejection::NoStatement(speaker))),
        };

        if self.config.require_accusation && !statements.values().any(|s| s.accusation) {
            return Ok(Err(Rejection::NoAccusation));
        }

        let solutions = solve_case_bounded(
            &statements,
            &suspect_ids,
            case_config.culprit_count,
            &case_config.constraints,
            2,
        )?;
        if solutions.len() != 1 {
            return Ok(Err(Rejection::Ambiguous));
        }
        debug_assert_eq!(solutions[0], solution, "true world must be consistent with its own statements");

        Ok(Ok(Case {
            suspect_ids,
            statements,
            solution,
            config: *case_config,
        }))
    }
}

/// Seat `count` roster suspects, ordered by id.
fn pick_suspects(count: usize, rng: &mut CaseRng) -> Vec<SuspectId> {
    let mut seated = rng.sample(&roster_ids(), count);
    seated.sort_unstable();
    seated
}

/// Random culprits and a random admissible number of liars.
fn pick_true_world(suspect_ids: &[SuspectId], case_config: &CaseConfig, rng: &mut CaseRng) -> World {
    let culprits: SuspectSet = rng
        .sample(suspect_ids, case_config.culprit_count)
        .into_iter()
        .collect();

    let liar_count = rng.gen_range(case_config.liar_range());
    let liars: SuspectSet = rng.sample(suspect_ids, liar_count).into_iter().collect();

    World::new(culprits, liars)
}

/// A statement for every suspect, or the first suspect left without one.
fn build_assignment(
    suspect_ids: &[SuspectId],
    world: &World,
    difficulty: u8,
    rng: &mut CaseRng,
) -> Result<Result<Assignment, SuspectId>, EngineError> {
    let context = StatementContext::new(suspect_ids);
    let mut used_texts = HashSet::new();
    let mut statements = Assignment::new();

    for &speaker in suspect_ids {
        match statement_for(speaker, world, &context, difficulty, &used_texts, rng)? {
            Some(statement) => {
                used_texts.insert(statement.text.clone());
                statements.insert(speaker, statement);
            }
            None => return Ok(Err(speaker)),
        }
    }

    Ok(Ok(statements))
}

/// First template/binding, in random order, with the required truth value
/// and a text not yet used in this case.
fn statement_for(
    speaker: SuspectId,
    world: &World,
    context: &StatementContext<'_>,
    difficulty: u8,
    used_texts: &HashSet<String>,
    rng: &mut CaseRng,
) -> Result<Option<Statement>, EngineError> {
    let required = world.requires_truth_from(speaker);

    let mut templates: Vec<&'static StatementTemplate> = catalog::eligible(difficulty).collect();
    rng.shuffle(&mut templates);

    for template in templates {
        let mut bindings = candidate_targets(template, speaker, context.suspect_ids);
        rng.shuffle(&mut bindings);

        for targets in bindings {
            if template.evaluate(speaker, world, &context.with_targets(targets)) != required {
                continue;
            }
            let text = template.render(targets)?;
            if used_texts.contains(&text) {
                continue;
            }
            return Ok(Some(Statement {
                template_id: template.id.to_string(),
                targets,
                text,
                accusation: template.accusation,
            }));
        }
    }

    Ok(None)
}

/// Every binding for `template`: targets exclude the speaker and are
/// mutually distinct.
fn candidate_targets(
    template: &StatementTemplate,
    speaker: SuspectId,
    suspect_ids: &[SuspectId],
) -> Vec<Targets> {
    let others = move || suspect_ids.iter().copied().filter(move |&id| id != speaker);

    match template.arity {
        TargetArity::None => vec![Targets::none()],
        TargetArity::One => others().map(Targets::one).collect(),
        TargetArity::Two => others()
            .flat_map(|first| {
                others()
                    .filter(move |&second| second != first)
                    .map(move |second| Targets::two(first, second))
            })
            .collect(),
    }
}

/// Generate a case with the default budget and a fresh random seed.
pub fn generate_case(case_config: &CaseConfig) -> Result<Case, GenerationError> {
    let mut rng = CaseRng::from_entropy();
    tracing::debug!(seed = rng.seed(), "Seeded case generation");
    CaseGenerator::default().generate(case_config, &mut rng)
}
