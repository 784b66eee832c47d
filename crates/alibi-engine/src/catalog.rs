//! Statement catalog.
//!
//! | Id | Tier | Targets | Accusation |
//! |----|------|---------|------------|
//! | diet_carnivore | 1 | 0 | no |
//! | diet_herbivore | 1 | 0 | no |
//! | i_didnt_do_it | 1 | 0 | yes |
//! | i_did_it | 1 | 0 | yes |
//! | taller_than_me | 2 | 0 | no |
//! | shorter_than_target | 2 | 1 | no |
//! | target_is_lying | 2 | 1 | no |
//! | target_is_truthful | 2 | 1 | no |
//! | i_am_lying | 3 | 0 | disabled |
//! | target_and_target2_lying | 3 | 2 | no |
//! | target_or_target2_lying | 3 | 2 | no |
//! | target_did_it | 1 | 1 | yes |
//! | target_didnt_do_it | 1 | 1 | yes |
//! | target_and_target2_did_it | 4 | 2 | yes |
//! | target_or_target2_did_it | 3 | 2 | yes |
//! | neighbor_did_it | 2 | 0 | no |
//! | neighbor_is_lying | 2 | 0 | no |
//! | if_target_guilty_then_target2_lying | 5 | 2 | no |
//!
//! Adding a statement kind means adding one entry here; the evaluator
//! only ever dispatches through `StatementTemplate::evaluate`.

use alibi_core::{lookup, Diet, Suspect, SuspectId, World};

use crate::error::EngineError;
use crate::statement::{StatementContext, Targets};

/// Evaluation rule of a template.
pub type Predicate = fn(SuspectId, &World, &StatementContext<'_>) -> bool;

/// Broad family a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Simple,
    Comparative,
    Referential,
    Culprit,
    Positional,
    Conditional,
}

/// How many third parties a template refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetArity {
    None,
    One,
    Two,
}

/// Display text of a template.
#[derive(Clone, Copy)]
pub enum TemplateText {
    Literal(&'static str),
    One(fn(&Suspect) -> String),
    Two(fn(&Suspect, &Suspect) -> String),
}

/// A parameterized statement with its truth rule and rendering.
#[derive(Clone, Copy)]
pub struct StatementTemplate {
    pub id: &'static str,
    pub kind: StatementKind,
    pub difficulty: u8,
    pub arity: TargetArity,
    /// Directly names a suspect's guilt or innocence
    pub accusation: bool,
    pub disabled: bool,
    pub text: TemplateText,
    pub predicate: Predicate,
}

impl StatementTemplate {
    #[must_use]
    pub fn requires_target(&self) -> bool {
        self.arity != TargetArity::None
    }

    #[must_use]
    pub fn requires_second_target(&self) -> bool {
        self.arity == TargetArity::Two
    }

    /// Truth value for `speaker` in `world`. Pure.
    #[must_use]
    pub fn evaluate(&self, speaker: SuspectId, world: &World, context: &StatementContext<'_>) -> bool {
        (self.predicate)(speaker, world, context)
    }

    /// Display text for the given bindings.
    pub fn render(&self, targets: Targets) -> Result<String, EngineError> {
        match self.text {
            TemplateText::Literal(text) => Ok(text.to_string()),
            TemplateText::One(render) => {
                let first = self.bound(targets.target_id)?;
                Ok(render(first))
            }
            TemplateText::Two(render) => {
                let first = self.bound(targets.target_id)?;
                let second = self.bound(targets.second_target_id)?;
                Ok(render(first, second))
            }
        }
    }

    fn bound(&self, id: Option<SuspectId>) -> Result<&'static Suspect, EngineError> {
        let id = id.ok_or(EngineError::MissingTarget { template: self.id })?;
        lookup(id).ok_or(EngineError::UnknownSuspect(id))
    }
}

impl std::fmt::Debug for StatementTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementTemplate")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("difficulty", &self.difficulty)
            .field("arity", &self.arity)
            .field("accusation", &self.accusation)
            .field("disabled", &self.disabled)
            .finish()
    }
}

fn height(id: SuspectId) -> Option<u16> {
    lookup(id).map(|s| s.height_cm)
}

fn some_culprit_eats(world: &World, diet: Diet) -> bool {
    world
        .culprits
        .any(|id| lookup(id).is_some_and(|s| s.diet == diet))
}

fn carnivore_did_it(_: SuspectId, world: &World, _: &StatementContext<'_>) -> bool {
    some_culprit_eats(world, Diet::Carnivore)
}

fn herbivore_did_it(_: SuspectId, world: &World, _: &StatementContext<'_>) -> bool {
    some_culprit_eats(world, Diet::Herbivore)
}

fn speaker_innocent(speaker: SuspectId, world: &World, _: &StatementContext<'_>) -> bool {
    !world.is_culprit(speaker)
}

fn speaker_guilty(speaker: SuspectId, world: &World, _: &StatementContext<'_>) -> bool {
    world.is_culprit(speaker)
}

fn taller_than_speaker_did_it(speaker: SuspectId, world: &World, _: &StatementContext<'_>) -> bool {
    let Some(mine) = height(speaker) else {
        return false;
    };
    world.culprits.any(|id| height(id).is_some_and(|h| h > mine))
}

fn shorter_than_target_did_it(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    let Some(theirs) = ctx.target.and_then(height) else {
        return false;
    };
    world.culprits.any(|id| height(id).is_some_and(|h| h < theirs))
}

fn target_lying(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    ctx.target.is_some_and(|t| world.is_liar(t))
}

fn target_truthful(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    ctx.target.is_some_and(|t| !world.is_liar(t))
}

fn speaker_lying(speaker: SuspectId, world: &World, _: &StatementContext<'_>) -> bool {
    world.is_liar(speaker)
}

fn both_targets(ctx: &StatementContext<'_>) -> Option<(SuspectId, SuspectId)> {
    Some((ctx.target?, ctx.second_target?))
}

fn both_lying(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    both_targets(ctx).is_some_and(|(a, b)| world.is_liar(a) && world.is_liar(b))
}

fn either_lying(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    both_targets(ctx).is_some_and(|(a, b)| world.is_liar(a) || world.is_liar(b))
}

fn target_guilty(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    ctx.target.is_some_and(|t| world.is_culprit(t))
}

fn target_innocent(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    ctx.target.is_some_and(|t| !world.is_culprit(t))
}

fn both_guilty(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    both_targets(ctx).is_some_and(|(a, b)| world.is_culprit(a) && world.is_culprit(b))
}

fn either_guilty(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    both_targets(ctx).is_some_and(|(a, b)| world.is_culprit(a) || world.is_culprit(b))
}

fn neighbor_guilty(speaker: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    ctx.neighbors(speaker)
        .is_some_and(|pair| pair.iter().any(|&n| world.is_culprit(n)))
}

fn neighbor_lying(speaker: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    ctx.neighbors(speaker)
        .is_some_and(|pair| pair.iter().any(|&n| world.is_liar(n)))
}

// Material implication: false only when the antecedent holds and the
// consequent does not.
fn guilt_implies_lying(_: SuspectId, world: &World, ctx: &StatementContext<'_>) -> bool {
    both_targets(ctx).is_some_and(|(a, b)| !world.is_culprit(a) || world.is_liar(b))
}

static TEMPLATES: [StatementTemplate; 18] = [
    StatementTemplate {
        id: "diet_carnivore",
        kind: StatementKind::Simple,
        difficulty: 1,
        arity: TargetArity::None,
        accusation: false,
        disabled: false,
        text: TemplateText::Literal("A carnivore did it"),
        predicate: carnivore_did_it,
    },
    StatementTemplate {
        id: "diet_herbivore",
        kind: StatementKind::Simple,
        difficulty: 1,
        arity: TargetArity::None,
        accusation: false,
        disabled: false,
        text: TemplateText::Literal("A herbivore did it"),
        predicate: herbivore_did_it,
    },
    StatementTemplate {
        id: "i_didnt_do_it",
        kind: StatementKind::Simple,
        difficulty: 1,
        arity: TargetArity::None,
        accusation: true,
        disabled: false,
        text: TemplateText::Literal("I didn't do it"),
        predicate: speaker_innocent,
    },
    StatementTemplate {
        id: "i_did_it",
        kind: StatementKind::Simple,
        difficulty: 1,
        arity: TargetArity::None,
        accusation: true,
        disabled: false,
        text: TemplateText::Literal("I did it"),
        predicate: speaker_guilty,
    },
    StatementTemplate {
        id: "taller_than_me",
        kind: StatementKind::Comparative,
        difficulty: 2,
        arity: TargetArity::None,
        accusation: false,
        disabled: false,
        text: TemplateText::Literal("Someone taller than me did it"),
        predicate: taller_than_speaker_did_it,
    },
    StatementTemplate {
        id: "shorter_than_target",
        kind: StatementKind::Comparative,
        difficulty: 2,
        arity: TargetArity::One,
        accusation: false,
        disabled: false,
        text: TemplateText::One(|t| format!("Someone shorter than {} did it", t.name)),
        predicate: shorter_than_target_did_it,
    },
    StatementTemplate {
        id: "target_is_lying",
        kind: StatementKind::Referential,
        difficulty: 2,
        arity: TargetArity::One,
        accusation: false,
        disabled: false,
        text: TemplateText::One(|t| format!("{} is lying", t.name)),
        predicate: target_lying,
    },
    StatementTemplate {
        id: "target_is_truthful",
        kind: StatementKind::Referential,
        difficulty: 2,
        arity: TargetArity::One,
        accusation: false,
        disabled: false,
        text: TemplateText::One(|t| format!("{} is telling the truth", t.name)),
        predicate: target_truthful,
    },
    // Paradox for liars and truth-tellers alike; never offered.
    StatementTemplate {
        id: "i_am_lying",
        kind: StatementKind::Referential,
        difficulty: 3,
        arity: TargetArity::None,
        accusation: false,
        disabled: true,
        text: TemplateText::Literal("I am lying"),
        predicate: speaker_lying,
    },
    StatementTemplate {
        id: "target_and_target2_lying",
        kind: StatementKind::Referential,
        difficulty: 3,
        arity: TargetArity::Two,
        accusation: false,
        disabled: false,
        text: TemplateText::Two(|a, b| format!("{} and {} are lying", a.name, b.name)),
        predicate: both_lying,
    },
    StatementTemplate {
        id: "target_or_target2_lying",
        kind: StatementKind::Referential,
        difficulty: 3,
        arity: TargetArity::Two,
        accusation: false,
        disabled: false,
        text: TemplateText::Two(|a, b| format!("{} or {} is lying", a.name, b.name)),
        predicate: either_lying,
    },
    StatementTemplate {
        id: "target_did_it",
        kind: StatementKind::Culprit,
        difficulty: 1,
        arity: TargetArity::One,
        accusation: true,
        disabled: false,
        text: TemplateText::One(|t| format!("{} did it", t.name)),
        predicate: target_guilty,
    },
    StatementTemplate {
        id: "target_didnt_do_it",
        kind: StatementKind::Culprit,
        difficulty: 1,
        arity: TargetArity::One,
        accusation: true,
        disabled: false,
        text: TemplateText::One(|t| format!("{} didn't do it", t.name)),
        predicate: target_innocent,
    },
    StatementTemplate {
        id: "target_and_target2_did_it",
        kind: StatementKind::Culprit,
        difficulty: 4,
        arity: TargetArity::Two,
        accusation: true,
        disabled: false,
        text: TemplateText::Two(|a, b| format!("{} and {} did it", a.name, b.name)),
        predicate: both_guilty,
    },
    StatementTemplate {
        id: "target_or_target2_did_it",
        kind: StatementKind::Culprit,
        difficulty: 3,
        arity: TargetArity::Two,
        accusation: true,
        disabled: false,
        text: TemplateText::Two(|a, b| format!("{} or {} did it", a.name, b.name)),
        predicate: either_guilty,
    },
    StatementTemplate {
        id: "neighbor_did_it",
        kind: StatementKind::Positional,
        difficulty: 2,
        arity: TargetArity::None,
        accusation: false,
        disabled: false,
        text: TemplateText::Literal("Someone next to me did it"),
        predicate: neighbor_guilty,
    },
    StatementTemplate {
        id: "neighbor_is_lying",
        kind: StatementKind::Positional,
        difficulty: 2,
        arity: TargetArity::None,
        accusation: false,
        disabled: false,
        text: TemplateText::Literal("A suspect next to me is lying"),
        predicate: neighbor_lying,
    },
    StatementTemplate {
        id: "if_target_guilty_then_target2_lying",
        kind: StatementKind::Conditional,
        difficulty: 5,
        arity: TargetArity::Two,
        accusation: false,
        disabled: false,
        text: TemplateText::Two(|a, b| format!("If {} did it, then {} is lying", a.name, b.name)),
        predicate: guilt_implies_lying,
    },
];

/// Every template, disabled ones included.
#[must_use]
pub fn templates() -> &'static [StatementTemplate] {
    &TEMPLATES
}

/// Look up a template by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static StatementTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Enabled templates whose tier is at most `difficulty + 1`.
pub fn eligible(difficulty: u8) -> impl Iterator<Item = &'static StatementTemplate> {
    let ceiling = u16::from(difficulty) + 1;
    TEMPLATES
        .iter()
        .filter(move |t| !t.disabled && u16::from(t.difficulty) <= ceiling)
}
