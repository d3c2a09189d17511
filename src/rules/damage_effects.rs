use super::{multiplier, Classification, RuleContext};
use crate::text_signals::NormalizedText;
use schema::{
    AbilityEffect, Category, Condition, ConditionType, ConditionValue, EffectType, EffectValue,
    Effectiveness, HealAmount, MoveFlag, PokemonType, Status, Target, Trigger,
};

fn type_power_keywords(pokemon_type: PokemonType) -> [String; 3] {
    let tag = pokemon_type.as_str();
    [
        format!("{tag}-type moves"),
        format!("{tag} moves"),
        format!("{tag}-type"),
    ]
}

fn type_power_factor(text: &NormalizedText) -> f64 {
    if text.contains("1.5") {
        1.5
    } else if text.contains("1.3") {
        1.3
    } else if text.contains("1.2") {
        1.2
    } else {
        1.5
    }
}

fn boosted_move_power(context: &RuleContext, factor: f64, value: EffectValue) -> AbilityEffect {
    AbilityEffect::new(Trigger::Passive, EffectType::MovePowerMultiplier, Target::User)
        .with_condition(context.condition())
        .with_value(EffectValue {
            multiplier: multiplier(factor),
            ..value
        })
}

/// Power boosts for moves of a given type. Every matching type yields its
/// own effect; the rock/ground/steel phrasing adds one multi-type effect.
pub fn type_power(context: &RuleContext) -> Classification {
    let text = context.text;
    let mut classification = Classification::none();
    if text.contains("damage from")
        || !text.contains_any(&["1.5", "1.3", "1.2", "power", "damage"])
    {
        return classification;
    }

    let factor = type_power_factor(text);
    for pokemon_type in PokemonType::ELEMENTAL {
        let keywords = type_power_keywords(pokemon_type);
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            classification.push(
                boosted_move_power(
                    context,
                    factor,
                    EffectValue {
                        move_type: Some(pokemon_type),
                        ..Default::default()
                    },
                ),
                &[Category::PowerBoost, Category::TypeBoost],
            );
        }
    }

    if text.contains_any(&["rock-, ground-, and steel-type", "rock, ground, and steel"]) {
        let factor = if text.contains("1.3") { 1.3 } else { 1.5 };
        classification.push(
            boosted_move_power(
                context,
                factor,
                EffectValue {
                    move_types: Some(vec![
                        PokemonType::Rock,
                        PokemonType::Ground,
                        PokemonType::Steel,
                    ]),
                    ..Default::default()
                },
            ),
            &[Category::PowerBoost, Category::TypeBoost],
        );
    }

    classification
}

const TYPE_DEFENSE_KEYWORDS: [(PokemonType, &[&str]); 8] = [
    (PokemonType::Fire, &["fire-type", "fire and ice", "fire- and ice-type"]),
    (PokemonType::Ice, &["ice-type", "fire and ice", "fire- and ice-type"]),
    (PokemonType::Water, &["water-type"]),
    (PokemonType::Grass, &["grass-type"]),
    (PokemonType::Electric, &["electric-type"]),
    (PokemonType::Dragon, &["dragon-type"]),
    (PokemonType::Psychic, &["psychic-type"]),
    (PokemonType::Dark, &["dark-type"]),
];

/// Halved damage from moves of the listed types, one effect per type.
pub fn type_defense(context: &RuleContext) -> Classification {
    let text = context.text;
    let halves = text.contains_any(&[
        "takes half as much damage from",
        "half damage from",
        "halves damage from",
    ]) || (text.contains("damage from") && text.contains("half"));
    if !halves {
        return Classification::none();
    }

    let mut classification = Classification::none();
    for (pokemon_type, keywords) in TYPE_DEFENSE_KEYWORDS {
        if text.contains_any(keywords) {
            classification.push(
                AbilityEffect::new(Trigger::Passive, EffectType::MovePowerMultiplier, Target::User)
                    .with_condition(context.condition())
                    .with_value(EffectValue {
                        multiplier: multiplier(0.5),
                        move_type: Some(pokemon_type),
                        ..Default::default()
                    }),
                &[Category::TypeDefense],
            );
        }
    }
    classification
}

/// Power boosts keyed on a move flag: contact, punch, sound, bite, pulse or
/// slicing moves.
pub fn move_flag_power(context: &RuleContext) -> Classification {
    let text = context.text;
    let (flag, factor) = if text.contains_any(&["moves that make contact", "contact moves"]) {
        let factor = if text.contains("1.33×") {
            Some(1.33)
        } else if text.contains_any(&["1.3×", "1.3x"]) {
            Some(1.3)
        } else if text.contains_any(&["1.2×", "1.2x"]) {
            Some(1.2)
        } else {
            None
        };
        (MoveFlag::Contact, factor)
    } else if text.contains_any(&["moves flagged as being punch-based", "punch-based moves"]) {
        let factor = if text.contains_any(&["1.2×", "1.2x"]) {
            Some(1.2)
        } else if text.contains_any(&["1.1×", "1.1x"]) {
            Some(1.1)
        } else {
            None
        };
        (MoveFlag::Punch, factor)
    } else if text.contains_all(&["moves flagged as being sound-based", "have", "their base power"]) {
        (MoveFlag::Sound, text.contains("1.3×").then_some(1.3))
    } else if text.contains_any(&["biting moves", "moves flagged as being bite-based"]) {
        (MoveFlag::Bite, text.contains("1.5×").then_some(1.5))
    } else if text.contains_any(&["pulse moves", "moves flagged as being pulse-based"]) {
        (MoveFlag::Pulse, text.contains("1.5×").then_some(1.5))
    } else if text.contains_any(&["slicing moves", "moves flagged as being slicing"]) {
        (MoveFlag::Blade, text.contains("1.5×").then_some(1.5))
    } else {
        return Classification::none();
    };

    let Some(factor) = factor else {
        return Classification::none();
    };
    Classification::single(
        AbilityEffect::new(Trigger::OnAttacking, EffectType::MovePowerMultiplier, Target::User)
            .with_value(EffectValue {
                multiplier: multiplier(factor),
                move_flag: Some(flag),
                ..Default::default()
            }),
        &[Category::PowerBoost, Category::MoveFlagBoost],
    )
}

/// Same-type attack bonus raised to 2×.
pub fn stab_change(context: &RuleContext) -> Classification {
    if context
        .text
        .contains("inflicts twice as much damage with moves whose types match its own")
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::MovePowerMultiplier, Target::User)
                .with_value(EffectValue {
                    multiplier: multiplier(2.0),
                    type_source: Some("own_type".to_string()),
                    ..Default::default()
                }),
            &[Category::PowerBoost],
        )
    } else {
        Classification::none()
    }
}

pub fn critical_damage(context: &RuleContext) -> Classification {
    if context.text.contains("inflicts triple damage with critical hits") {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::CriticalDamageMultiplier, Target::User)
                .with_value(EffectValue {
                    multiplier: multiplier(3.0),
                    ..Default::default()
                }),
            &[Category::CriticalBoost],
        )
    } else {
        Classification::none()
    }
}

/// Reduced damage taken, optionally only from super-effective hits.
pub fn damage_multiplier(context: &RuleContext) -> Classification {
    let text = context.text;
    let applies = (text.contains("takes") && text.contains("as much damage"))
        || text.contains_all(&["damage", "takes", "reduced"]);
    if !applies {
        return Classification::none();
    }

    let factor = if text.contains("0.75×") {
        0.75
    } else if text.contains_any(&["0.5×", "half"]) {
        0.5
    } else if text.contains_any(&["0.25×", "quarter"]) {
        0.25
    } else {
        return Classification::none();
    };

    let condition = text
        .contains_any(&["super effective", "super-effective"])
        .then(|| {
            Condition::new(
                ConditionType::Effectiveness,
                ConditionValue::Effectiveness(Effectiveness::SuperEffective),
            )
        });

    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::DamageMultiplier, Target::User)
            .with_condition(condition)
            .with_value(EffectValue {
                multiplier: multiplier(factor),
                ..Default::default()
            }),
        &[Category::DamageReduction],
    )
}

fn contact_condition() -> Option<Condition> {
    Some(Condition::new(
        ConditionType::MoveFlag,
        ConditionValue::MoveFlag(MoveFlag::Contact),
    ))
}

/// Punishment for attackers that make contact: recoil damage, a status
/// ailment, or both.
pub fn contact_punish(context: &RuleContext) -> Classification {
    let text = context.text;
    let mut classification = Classification::none();
    if !text.contains_any(&[
        "whenever a move makes contact",
        "when this pokémon is hit by a contact move",
    ]) {
        return classification;
    }

    if text.contains_any(&[
        "takes 1/8 of its maximum hp in damage",
        "takes ⅛ of its maximum hp",
    ]) {
        classification.push(
            AbilityEffect::new(Trigger::OnBeingHit, EffectType::ContactDamage, Target::Opponent)
                .with_condition(contact_condition())
                .with_value(EffectValue {
                    heal_amount: Some(HealAmount::fraction(1, 8)),
                    ..Default::default()
                }),
            &[Category::ContactPunish],
        );
    }

    let status = if text.contains("paralyzed") {
        Some(Status::Paralysis)
    } else if text.contains("poisoned") {
        Some(Status::Poison)
    } else if text.contains("burned") {
        Some(Status::Burn)
    } else if text.contains_any(&["frozen", "freeze"]) {
        Some(Status::Freeze)
    } else {
        None
    };
    if let Some(status) = status {
        classification.push(
            AbilityEffect::new(Trigger::OnBeingHit, EffectType::InflictStatus, Target::Opponent)
                .with_condition(contact_condition())
                .with_value(EffectValue {
                    status: Some(status),
                    probability: Some(30),
                    ..Default::default()
                }),
            &[Category::ContactPunish],
        );
    }

    classification
}

/// Sturdy-style survival of a knockout blow from full HP.
pub fn survive_hit(context: &RuleContext) -> Classification {
    if context.text.contains("will instead leave it with 1 hp") {
        Classification::single(
            AbilityEffect::new(Trigger::OnBeingHit, EffectType::SurviveHit, Target::User)
                .with_condition(Some(Condition::bare(ConditionType::HpFull)))
                .with_value(EffectValue {
                    fixed_value: Some(1),
                    ..Default::default()
                }),
            &[Category::Defensive],
        )
    } else {
        Classification::none()
    }
}

pub fn prevent_critical(context: &RuleContext) -> Classification {
    if context
        .text
        .contains_any(&["cannot score critical hits", "cannot land critical hits"])
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::PreventCritical, Target::User),
            &[Category::Defensive],
        )
    } else {
        Classification::none()
    }
}

pub fn always_hit(context: &RuleContext) -> Classification {
    if context
        .text
        .contains("moves used by or against this pokémon never miss")
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::AlwaysHit, Target::User),
            &[Category::AccuracyBoost],
        )
    } else {
        Classification::none()
    }
}

pub fn no_recoil(context: &RuleContext) -> Classification {
    if context.text.contains("does not receive recoil damage") {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::PreventRecoil, Target::User),
            &[Category::Defensive],
        )
    } else {
        Classification::none()
    }
}
