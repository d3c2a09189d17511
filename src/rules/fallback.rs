//! Keyword-priority classification for text no rule family recognized.
//!
//! Always produces exactly one effect with no value and no condition, so
//! every ability ends up with at least one effect.

use super::Classification;
use crate::text_signals::NormalizedText;
use schema::{AbilityEffect, Category, EffectType, Target, Trigger};

// Highest priority first. The first entry with any matching phrase wins.
const TRIGGER_KEYWORDS: [(Trigger, &[&str]); 5] = [
    (
        Trigger::OnSwitchIn,
        &["enters battle", "switches in", "sent out", "comes into battle"],
    ),
    (Trigger::OnContact, &["contact"]),
    (
        Trigger::OnTurnEnd,
        &["end of each turn", "end of every turn", "after each turn"],
    ),
    (
        Trigger::OnBeingHit,
        &["when hit", "hit by", "struck", "being hit", "takes damage"],
    ),
    (
        Trigger::OnAttacking,
        &["when attacking", "attacks", "uses a move", "its moves"],
    ),
];

const EFFECT_TYPE_KEYWORDS: [(EffectType, &[&str]); 9] = [
    (EffectType::MovePowerMultiplier, &["power"]),
    (EffectType::DamageMultiplier, &["damage"]),
    (
        EffectType::StatMultiplier,
        &["doubled", "halved", "1.5×", "1.5x", "multiplied"],
    ),
    (EffectType::StatStageChange, &["stage"]),
    (EffectType::ImmuneToStatus, &["immune", "cannot be", "prevents"]),
    (EffectType::HealHp, &["restores", "heals", "recovers"]),
    (EffectType::CureStatus, &["cure", "cures", "cured"]),
    (
        EffectType::SetWeather,
        &["weather", "sunlight", " rain", "sandstorm", "hail", "snow"],
    ),
    (EffectType::SetTerrain, &["terrain"]),
];

pub fn fallback_trigger(text: &NormalizedText) -> Trigger {
    TRIGGER_KEYWORDS
        .iter()
        .find(|(_, phrases)| text.contains_any(phrases))
        .map(|(trigger, _)| *trigger)
        .unwrap_or(Trigger::Passive)
}

pub fn fallback_effect_type(text: &NormalizedText) -> EffectType {
    EFFECT_TYPE_KEYWORDS
        .iter()
        .find(|(_, phrases)| text.contains_any(phrases))
        .map(|(effect_type, _)| *effect_type)
        .unwrap_or(EffectType::Unknown)
}

/// Best-effort single effect for unrecognized text.
pub fn classify_fallback(text: &NormalizedText) -> Classification {
    let trigger = fallback_trigger(text);
    let effect_type = fallback_effect_type(text);
    let target = match effect_type {
        EffectType::SetWeather | EffectType::SetTerrain => Target::Field,
        _ => Target::User,
    };

    let categories: &[Category] = if effect_type.is_unknown() {
        &[Category::SpecialMechanic]
    } else {
        &[]
    };
    Classification::single(AbilityEffect::new(trigger, effect_type, target), categories)
}
