//! # alibi-core
//!
//! Data model for liar/culprit deduction cases.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Suspect` | Roster entry with static attributes |
//! | `SuspectSet` | Membership set over suspect ids |
//! | `World` | Who is guilty, who is lying |
//! | `CaseConfig` | Suspect/culprit counts, difficulty, liar bounds |
//!
//! Statement semantics and solving live in `alibi-engine`; generation
//! lives in `alibi-generator`.

pub mod config;
pub mod error;
pub mod property;
pub mod set;
pub mod suspect;
pub mod world;

pub use config::{CaseConfig, LiarConstraints, LEVEL_COUNT};
pub use error::ConfigError;
pub use property::{PropertyChecker, PropertyResult, PropertySummary};
pub use set::SuspectSet;
pub use suspect::{lookup, roster, roster_ids, Diet, Suspect, SuspectId};
pub use world::World;
