//! # alibi-generator
//!
//! Random case generation with solver verification.
//!
//! Generation is generate-and-test: draw a hidden world, give every suspect
//! a statement that is true or false as their role demands, then keep the
//! case only if the solver finds that world and no other.
//!
//! # Usage
//!
//! ```bash
//! # Level 4 case, statements only
//! cargo run -p alibi-generator --bin alibi-generate -- --level 4
//!
//! # Reproducible custom case with the answer
//! cargo run -p alibi-generator --bin alibi-generate -- --suspects 5 --culprits 1 \
//!     --min-liars 1 --max-liars 2 --seed 42 --reveal
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CaseConfig │ ──> │ True world  │ ──> │ Statements  │
//! │  + CaseRng  │     │  (sampled)  │     │ (per role)  │
//! └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                │
//!                     ┌──────────────────────────┘
//!                     ▼
//!              ┌─────────────┐
//!              │   Solver    │──── more than one world ──> next attempt
//!              └──────┬──────┘
//!                     │ exactly one
//!                     ▼
//!                   Case
//! ```

pub mod error;
pub mod generator;
pub mod random;

pub use error::GenerationError;
pub use generator::{generate_case, CaseGenerator, GenerationStats, GeneratorConfig, MAX_ATTEMPTS_DEFAULT};
pub use random::CaseRng;
