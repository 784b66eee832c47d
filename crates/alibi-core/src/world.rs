//! Worlds: hypotheses about who is guilty and who is lying.

use serde::{Deserialize, Serialize};

use crate::set::SuspectSet;
use crate::suspect::SuspectId;

/// A candidate hypothesis.
///
/// Culprits and liars are independent sets; a suspect may be both.
/// Worlds are plain values and compare by membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct World {
    pub culprits: SuspectSet,
    pub liars: SuspectSet,
}

impl World {
    #[must_use]
    pub fn new(culprits: SuspectSet, liars: SuspectSet) -> Self {
        Self { culprits, liars }
    }

    #[must_use]
    pub fn is_culprit(&self, id: SuspectId) -> bool {
        self.culprits.contains(id)
    }

    #[must_use]
    pub fn is_liar(&self, id: SuspectId) -> bool {
        self.liars.contains(id)
    }

    /// Truth polarity a suspect's statement must have in this world.
    #[must_use]
    pub fn requires_truth_from(&self, id: SuspectId) -> bool {
        !self.is_liar(id)
    }
}
