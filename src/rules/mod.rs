//! The ordered rule cascade that turns ability text into effects.
//!
//! Each rule family is a plain function over a [`RuleContext`]. Within a
//! family the checks form an if/else chain, so a family contributes at most
//! one reading of the text (type power is the exception: every matching type
//! is its own effect). Families themselves are never short-circuited; all of
//! them run, in [`RULE_FAMILIES`] order, and their output is concatenated.

use crate::text_signals::NormalizedText;
use ordered_float::OrderedFloat;
use schema::{AbilityEffect, Category, Condition};
use tracing::trace;

// Rule families grouped by the kind of mechanic they describe
mod damage_effects;
mod field_effects;
mod special_effects;
mod stat_effects;
mod status_effects;

pub mod fallback;
pub mod format_description;

pub use damage_effects::*;
pub use field_effects::*;
pub use special_effects::*;
pub use stat_effects::*;
pub use status_effects::*;

/// What a rule family sees: the normalized text plus the situational
/// condition detected once for the whole ability.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub text: &'a NormalizedText,
    pub condition: Option<&'a Condition>,
}

impl<'a> RuleContext<'a> {
    pub fn new(text: &'a NormalizedText, condition: Option<&'a Condition>) -> Self {
        Self { text, condition }
    }

    /// Owned copy of the situational condition for attaching to an effect.
    pub fn condition(&self) -> Option<Condition> {
        self.condition.cloned()
    }
}

/// Effects and category tags produced by one or more rule families.
/// Categories may repeat; they are deduplicated once, during assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub effects: Vec<AbilityEffect>,
    pub categories: Vec<Category>,
}

impl Classification {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(effect: AbilityEffect, categories: &[Category]) -> Self {
        let mut classification = Self::none();
        classification.push(effect, categories);
        classification
    }

    pub fn push(&mut self, effect: AbilityEffect, categories: &[Category]) {
        self.effects.push(effect);
        self.categories.extend_from_slice(categories);
    }

    pub fn append(&mut self, mut other: Classification) {
        self.effects.append(&mut other.effects);
        self.categories.append(&mut other.categories);
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

pub type RuleFamily = fn(&RuleContext) -> Classification;

/// Every rule family in evaluation order. The order is part of the output
/// contract: effects appear in the shipped asset in this sequence.
pub const RULE_FAMILIES: [(&str, RuleFamily); 32] = [
    ("terrain_setter", terrain_setter),
    ("weather_setter", weather_setter),
    ("stat_stage_change", stat_stage_change),
    ("stat_multiplier", stat_multiplier),
    ("type_power", type_power),
    ("type_defense", type_defense),
    ("absorb_type", absorb_type),
    ("immune_to_type", immune_to_type),
    ("immune_to_status", immune_to_status),
    ("prevent_critical", prevent_critical),
    ("survive_hit", survive_hit),
    ("contact_punish", contact_punish),
    ("accuracy_multiplier", accuracy_multiplier),
    ("evasion_multiplier", evasion_multiplier),
    ("nullify_weather", nullify_weather),
    ("heal_hp", heal_hp),
    ("inflict_status", inflict_status),
    ("prevent_stat_decrease", prevent_stat_decrease),
    ("sync_status", sync_status),
    ("double_effect_chance", double_effect_chance),
    ("prevent_flinch", prevent_flinch),
    ("cure_status", cure_status),
    ("status_boost", status_boost),
    ("move_flag_power", move_flag_power),
    ("stab_change", stab_change),
    ("critical_damage", critical_damage),
    ("always_hit", always_hit),
    ("no_recoil", no_recoil),
    ("soundproof", soundproof),
    ("specific_stat_protection", specific_stat_protection),
    ("critical_rate", critical_rate),
    ("damage_multiplier", damage_multiplier),
];

/// Look up a rule family by name.
pub fn family(name: &str) -> Option<RuleFamily> {
    RULE_FAMILIES
        .iter()
        .find(|(family_name, _)| *family_name == name)
        .map(|(_, rule)| *rule)
}

/// Run every rule family in order and concatenate what they produce.
pub fn run_cascade(context: &RuleContext) -> Classification {
    let mut classification = Classification::none();
    for (name, rule) in RULE_FAMILIES.iter() {
        let produced = rule(context);
        if !produced.is_empty() {
            trace!(family = *name, effects = produced.effects.len(), "rule family matched");
            classification.append(produced);
        }
    }
    classification
}

pub(crate) fn multiplier(value: f64) -> Option<OrderedFloat<f64>> {
    Some(OrderedFloat(value))
}
