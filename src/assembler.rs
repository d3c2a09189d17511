use crate::exclusivity;
use crate::rules::fallback::classify_fallback;
use crate::rules::{run_cascade, Classification, RuleContext};
use crate::signature::signature_profile;
use crate::text_signals::{normalize, NormalizedText, SituationalSignals};
use schema::{
    AbilityEffect, AbilityMetadata, AbilityRecord, Category, ConditionType, EffectType, Target,
    Trigger, SCHEMA_VERSION,
};
use std::collections::BTreeSet;

/// Phrases that make an ability HP-dependent regardless of how its effects
/// were classified.
const HP_THRESHOLD_PHRASES: [&str; 9] = [
    "below 50%",
    "50% or above",
    "drops below",
    "drop to half",
    "half or less",
    "half its maximum hp",
    "hp is below",
    "hp drops below",
    "when its hp",
];

/// How an ability's effects were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Signature,
    Rules,
    Fallback,
}

/// Classify one ability. Pure and deterministic; safe to call from many
/// threads at once.
pub fn classify(record: &AbilityRecord) -> AbilityMetadata {
    classify_with_source(record).0
}

/// Like [`classify`], also reporting which stage produced the effects.
pub fn classify_with_source(record: &AbilityRecord) -> (AbilityMetadata, ClassificationSource) {
    let text = normalize(&record.effect);
    let signals = SituationalSignals::detect(&text);

    let (classification, source) = match signature_profile(&record.name) {
        Some(profile) => (profile, ClassificationSource::Signature),
        None => {
            let condition = signals.combined();
            let context = RuleContext::new(&text, condition.as_ref());
            let matched = run_cascade(&context);
            if matched.is_empty() {
                (classify_fallback(&text), ClassificationSource::Fallback)
            } else {
                (matched, ClassificationSource::Rules)
            }
        }
    };

    let Classification {
        effects,
        mut categories,
    } = classification;
    categories.extend(derive_categories(&effects, &text));

    let metadata = AbilityMetadata {
        schema_version: SCHEMA_VERSION,
        id: record.id,
        name: record.name.clone(),
        name_localized: record.name_localized.clone(),
        effect: record.effect.clone(),
        effect_localized: record.effect_localized.clone(),
        effects,
        categories: dedup_categories(categories),
        species_restriction: exclusivity::resolve(&record.name),
    };
    (metadata, source)
}

/// Secondary categories implied by the produced effects and by HP-threshold
/// wording in the text. May contain duplicates.
pub fn derive_categories(effects: &[AbilityEffect], text: &NormalizedText) -> Vec<Category> {
    let mut categories = Vec::new();
    for effect in effects {
        let multiplier = effect.value.as_ref().and_then(|value| value.multiplier());

        match effect.condition.as_ref().map(|c| c.condition_type) {
            Some(ConditionType::Weather) => categories.push(Category::WeatherDependent),
            Some(ConditionType::Terrain) => categories.push(Category::TerrainDependent),
            Some(ConditionType::HpBelow | ConditionType::HpAbove | ConditionType::HpFull) => {
                categories.push(Category::HpDependent)
            }
            _ => {}
        }

        let lowers_opponent = effect.effect_type == EffectType::StatStageChange
            && effect
                .value
                .as_ref()
                .and_then(|value| value.stage_change)
                .is_some_and(|stage| stage < 0)
            && matches!(effect.target, Target::Opponent | Target::AllOpponents);
        if lowers_opponent {
            categories.push(Category::StatReducer);
        }

        match effect.effect_type {
            EffectType::InflictStatus => categories.push(Category::StatusInflictor),
            EffectType::HealHp => categories.push(Category::Healing),
            _ => {}
        }

        match effect.trigger {
            Trigger::OnSwitchIn => categories.push(Category::SwitchInEffect),
            Trigger::OnSwitchOut => categories.push(Category::SwitchOutEffect),
            _ => {}
        }

        if effect.effect_type == EffectType::DamageMultiplier {
            match multiplier {
                Some(m) if m < 1.0 => categories.push(Category::DamageReduction),
                Some(m) if m > 1.0 => categories.push(Category::DamageIncrease),
                _ => {}
            }
        }

        let random = effect.value.as_ref().and_then(|value| value.random_element) == Some(true);
        if effect.effect_type == EffectType::RandomStatChange || random {
            categories.push(Category::RandomEffect);
        }

        if effect.effect_type == EffectType::MovePowerMultiplier {
            let typed = effect
                .value
                .as_ref()
                .is_some_and(|value| value.move_type.is_some() || value.move_types.is_some());
            match multiplier {
                Some(m) if m < 1.0 && typed => categories.push(Category::TypeDefense),
                Some(m) if m > 1.0 => categories.push(Category::DamageIncrease),
                _ => {}
            }
        }
    }

    if text.contains_any(&HP_THRESHOLD_PHRASES) {
        categories.push(Category::HpDependent);
    }
    categories
}

/// Collapse to a sorted set; an ability always carries at least one tag.
pub fn dedup_categories(categories: Vec<Category>) -> BTreeSet<Category> {
    let mut unique: BTreeSet<Category> = categories.into_iter().collect();
    if unique.is_empty() {
        unique.insert(Category::SpecialMechanic);
    }
    unique
}
