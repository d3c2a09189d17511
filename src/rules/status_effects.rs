use super::{multiplier, Classification, RuleContext};
use crate::text_signals::NormalizedText;
use schema::{
    AbilityEffect, Category, Condition, ConditionType, EffectType, EffectValue, Status, Target,
    Trigger,
};

const STATUS_IMMUNITIES: [(Status, &[&str]); 7] = [
    (Status::Paralysis, &["cannot be paralyzed", "immune to paralysis"]),
    (Status::Poison, &["cannot be poisoned", "immune to poison"]),
    (Status::Burn, &["cannot be burned", "immune to burn"]),
    (Status::Freeze, &["cannot be frozen", "immune to freeze"]),
    (Status::Sleep, &["cannot be asleep", "cannot be put to sleep"]),
    (Status::Confusion, &["cannot be confused"]),
    (Status::Infatuation, &["cannot be infatuated"]),
];

fn status_immunity(status: Status) -> AbilityEffect {
    AbilityEffect::new(Trigger::Passive, EffectType::ImmuneToStatus, Target::User).with_value(
        EffectValue {
            status: Some(status),
            ..Default::default()
        },
    )
}

pub fn immune_to_status(context: &RuleContext) -> Classification {
    STATUS_IMMUNITIES
        .iter()
        .find(|(_, phrases)| context.text.contains_any(phrases))
        .map(|(status, _)| {
            Classification::single(status_immunity(*status), &[Category::StatusImmunity])
        })
        .unwrap_or_default()
}

pub fn prevent_flinch(context: &RuleContext) -> Classification {
    if context
        .text
        .contains_any(&["cannot be made to flinch", "cannot flinch"])
    {
        Classification::single(status_immunity(Status::Flinch), &[Category::StatusImmunity])
    } else {
        Classification::none()
    }
}

fn chance_percent(text: &NormalizedText) -> Option<u32> {
    if text.contains("10%") {
        Some(10)
    } else if text.contains("20%") {
        Some(20)
    } else if text.contains("30%") {
        Some(30)
    } else {
        None
    }
}

/// Status inflicted by the Pokémon's own attacks: a flinch chance on any
/// damaging move, or an ailment chance on contact moves.
pub fn inflict_status(context: &RuleContext) -> Classification {
    let text = context.text;
    let mut classification = Classification::none();

    if text.contains_all(&["have a", "chance", "flinch"]) {
        if let Some(probability) = chance_percent(text) {
            classification.push(
                AbilityEffect::new(
                    Trigger::OnAttacking,
                    EffectType::AdditionalEffectChance,
                    Target::Opponent,
                )
                .with_value(EffectValue {
                    status: Some(Status::Flinch),
                    probability: Some(probability),
                    ..Default::default()
                }),
                &[Category::Flinch],
            );
        }
    }

    if text.contains_all(&["contact moves", "chance"]) {
        let status = if text.contains("paralyzed") {
            Some(Status::Paralysis)
        } else if text.contains_any(&["poisoning", "poison"]) {
            Some(Status::Poison)
        } else if text.contains_any(&["burn", "burned"]) {
            Some(Status::Burn)
        } else if text.contains_any(&["freeze", "frozen"]) {
            Some(Status::Freeze)
        } else {
            None
        };
        if let Some(status) = status {
            classification.push(
                AbilityEffect::new(Trigger::OnAttacking, EffectType::InflictStatus, Target::Opponent)
                    .with_value(EffectValue {
                        status: Some(status),
                        probability: Some(chance_percent(text).unwrap_or(30)),
                        ..Default::default()
                    }),
                &[Category::StatusInflictor],
            );
        }
    }

    classification
}

/// Burn, paralysis or poison passed back to whoever inflicted it.
pub fn sync_status(context: &RuleContext) -> Classification {
    let text = context.text;
    let receives_major = text.contains_any(&[
        "is burned, paralyzed, or poisoned",
        "receives a burn, paralysis, or poison",
    ]);
    if receives_major && text.contains("is also given the ailment") {
        Classification::single(
            AbilityEffect::new(Trigger::OnBeingHit, EffectType::SyncStatus, Target::Opponent),
            &[Category::StatusReflection],
        )
    } else {
        Classification::none()
    }
}

pub fn double_effect_chance(context: &RuleContext) -> Classification {
    if context
        .text
        .contains("moves have twice their usual effect chance")
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::AdditionalEffectChance, Target::User)
                .with_value(EffectValue {
                    multiplier: multiplier(2.0),
                    ..Default::default()
                }),
            &[Category::EffectBoost],
        )
    } else {
        Classification::none()
    }
}

/// Status cured on switching out, or by chance at the end of each turn.
pub fn cure_status(context: &RuleContext) -> Classification {
    let text = context.text;
    let mut classification = Classification::none();

    if text.contains_any(&["when this pokémon switches out", "when switched out"])
        && text.contains_any(&["cured", "healed"])
    {
        classification.push(
            AbilityEffect::new(Trigger::OnSwitchOut, EffectType::CureStatus, Target::User),
            &[Category::StatusRecovery],
        );
    }

    if text.contains_all(&["has a", "chance of being cured", "at the end of each turn"]) {
        let probability = if text.contains_any(&["30%", "33%"]) {
            Some(33)
        } else if text.contains("50%") {
            Some(50)
        } else {
            None
        };
        if let Some(probability) = probability {
            classification.push(
                AbilityEffect::new(Trigger::OnTurnEnd, EffectType::CureStatus, Target::User)
                    .with_condition(Some(Condition::bare(ConditionType::Status)))
                    .with_value(EffectValue {
                        probability: Some(probability),
                        ..Default::default()
                    }),
                &[Category::StatusRecovery],
            );
        }
    }

    classification
}
