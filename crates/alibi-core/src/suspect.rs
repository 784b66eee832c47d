//! The fixed suspect roster.
//!
//! Every case draws its suspects from this roster. Height and diet feed
//! the comparative and class statements; image and color exist only for
//! rendering and never influence solving.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a roster entry.
///
/// Ids are small positive integers, stable across cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspectId(pub u8);

impl SuspectId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SuspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u8> for SuspectId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Dietary class used by "a carnivore/herbivore did it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Carnivore,
    Herbivore,
}

impl Diet {
    /// Lowercase noun used in statement text.
    #[must_use]
    pub fn noun(&self) -> &'static str {
        match self {
            Diet::Carnivore => "carnivore",
            Diet::Herbivore => "herbivore",
        }
    }
}

/// A roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suspect {
    pub id: SuspectId,
    pub name: &'static str,
    /// Height in centimetres
    pub height_cm: u16,
    pub diet: Diet,
    pub image: &'static str,
    pub color: &'static str,
}

const ROSTER: [Suspect; 7] = [
    Suspect {
        id: SuspectId(1),
        name: "Panther",
        height_cm: 178,
        diet: Diet::Carnivore,
        image: "/assets/panther.png",
        color: "#E91E63",
    },
    Suspect {
        id: SuspectId(2),
        name: "Peacock",
        height_cm: 169,
        diet: Diet::Herbivore,
        image: "/assets/peacock.png",
        color: "#2196F3",
    },
    Suspect {
        id: SuspectId(3),
        name: "Shark",
        height_cm: 192,
        diet: Diet::Carnivore,
        image: "/assets/shark.png",
        color: "#607D8B",
    },
    Suspect {
        id: SuspectId(4),
        name: "Iguana",
        height_cm: 162,
        diet: Diet::Herbivore,
        image: "/assets/iguana.png",
        color: "#4CAF50",
    },
    Suspect {
        id: SuspectId(5),
        name: "Bear",
        height_cm: 184,
        diet: Diet::Carnivore,
        image: "/assets/bear.png",
        color: "#795548",
    },
    Suspect {
        id: SuspectId(6),
        name: "Horse",
        height_cm: 200,
        diet: Diet::Herbivore,
        image: "/assets/horse.png",
        color: "#FF9800",
    },
    Suspect {
        id: SuspectId(7),
        name: "Dog",
        height_cm: 173,
        diet: Diet::Carnivore,
        image: "/assets/dog.png",
        color: "#FFC107",
    },
];

/// All roster entries, ordered by id.
#[must_use]
pub fn roster() -> &'static [Suspect] {
    &ROSTER
}

/// Ids of every roster entry, ordered.
#[must_use]
pub fn roster_ids() -> Vec<SuspectId> {
    ROSTER.iter().map(|s| s.id).collect()
}

/// Look up a roster entry by id.
#[must_use]
pub fn lookup(id: SuspectId) -> Option<&'static Suspect> {
    ROSTER.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_unique_and_ordered() {
        let ids = roster_ids();
        assert_eq!(ids.len(), 7);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookup() {
        let shark = lookup(SuspectId(3)).unwrap();
        assert_eq!(shark.name, "Shark");
        assert_eq!(shark.diet, Diet::Carnivore);
        assert!(lookup(SuspectId(0)).is_none());
        assert!(lookup(SuspectId(8)).is_none());
    }

    #[test]
    fn test_roster_has_both_diets() {
        assert!(roster().iter().any(|s| s.diet == Diet::Carnivore));
        assert!(roster().iter().any(|s| s.diet == Diet::Herbivore));
    }
}
