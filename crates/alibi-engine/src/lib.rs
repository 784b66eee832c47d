//! # alibi-engine
//!
//! Statement semantics and solving for liar/culprit deduction cases.
//!
//! The rule: liars' statements are false, everyone else's are true.
//!
//! | Stage | Module |
//! |-------|--------|
//! | Templates (predicate + text) | `catalog` |
//! | Truth of one statement | `evaluator` |
//! | Candidate worlds | `enumerator` |
//! | Liar rule for one world | `checker` |
//! | All consistent worlds | `solver` |
//!
//! Every function here is pure; the only randomness in the system lives in
//! `alibi-generator`.

pub mod case;
pub mod catalog;
pub mod checker;
pub mod enumerator;
pub mod error;
pub mod evaluator;
pub mod invariants;
pub mod solver;
pub mod statement;

pub use case::Case;
pub use catalog::{StatementKind, StatementTemplate, TargetArity};
pub use checker::is_world_consistent;
pub use enumerator::{generate_all_possible_worlds, world_count, Worlds, MAX_SUSPECTS};
pub use error::EngineError;
pub use evaluator::evaluate_statement;
pub use invariants::CasePropertyChecker;
pub use solver::{solve_case, solve_case_bounded};
pub use statement::{Assignment, Statement, StatementContext, Targets};
