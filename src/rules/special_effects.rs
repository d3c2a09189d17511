use super::{Classification, RuleContext};
use schema::{
    AbilityEffect, Category, Condition, ConditionType, ConditionValue, EffectType, EffectValue,
    HealAmount, MoveFlag, PokemonType, Target, Trigger,
};

const ABSORBED_TYPES: [(PokemonType, &[&str]); 4] = [
    (PokemonType::Electric, &["electric-type move", "electric move"]),
    (PokemonType::Water, &["water-type move", "water move"]),
    (PokemonType::Fire, &["fire-type move", "fire move"]),
    (PokemonType::Grass, &["grass-type move", "grass move"]),
];

/// Hits of one type heal a quarter of max HP instead of dealing damage.
pub fn absorb_type(context: &RuleContext) -> Classification {
    let text = context.text;
    if !text.contains_any(&["heals for 1/4", "heals for ¼"]) {
        return Classification::none();
    }
    let Some((pokemon_type, _)) = ABSORBED_TYPES
        .iter()
        .find(|(_, phrases)| text.contains_any(phrases))
    else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::OnBeingHit, EffectType::AbsorbType, Target::User)
            .with_condition(Some(Condition::new(
                ConditionType::MoveType,
                ConditionValue::Type(*pokemon_type),
            )))
            .with_value(EffectValue {
                heal_amount: Some(HealAmount::fraction(1, 4)),
                move_type: Some(*pokemon_type),
                ..Default::default()
            }),
        &[Category::TypeImmunity],
    )
}

const IMMUNE_TYPES: [PokemonType; 6] = [
    PokemonType::Ground,
    PokemonType::Electric,
    PokemonType::Water,
    PokemonType::Fire,
    PokemonType::Grass,
    PokemonType::Psychic,
];

/// Full immunity to one move type. Only "this pokémon is immune to" counts;
/// text about other Pokémon being immune does not.
pub fn immune_to_type(context: &RuleContext) -> Classification {
    let text = context.text;
    if !text.contains_any(&["this pokémon is immune to", "this pokemon is immune to"]) {
        return Classification::none();
    }
    let Some(pokemon_type) = IMMUNE_TYPES
        .iter()
        .find(|pokemon_type| text.contains(&format!("immune to {}-type", pokemon_type.as_str())))
    else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::ImmuneToType, Target::User).with_value(
            EffectValue {
                move_type: Some(*pokemon_type),
                ..Default::default()
            },
        ),
        &[Category::TypeImmunity],
    )
}

pub fn soundproof(context: &RuleContext) -> Classification {
    if context
        .text
        .contains("immune to moves flagged as being sound-based")
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::ImmuneToMove, Target::User).with_value(
                EffectValue {
                    move_flag: Some(MoveFlag::Sound),
                    ..Default::default()
                },
            ),
            &[Category::MoveImmunity],
        )
    } else {
        Classification::none()
    }
}

/// Fractional HP recovered at the end of every turn.
pub fn heal_hp(context: &RuleContext) -> Classification {
    let text = context.text;
    let end_of_turn = text.contains_any(&[
        "at the end of each turn",
        "at the end of every turn",
        "after each turn",
    ]);
    let restores = end_of_turn && text.contains_any(&["restores", "heals", "regains"]);
    let heals_after_turn = text.contains("heals for") && text.contains("after each turn");
    if !(restores || heals_after_turn) {
        return Classification::none();
    }

    let amount = if text.contains_any(&["1/16", "⅟16"]) {
        HealAmount::fraction(1, 16)
    } else if text.contains_any(&["1/8", "⅛"]) {
        HealAmount::fraction(1, 8)
    } else if text.contains("1/3") {
        HealAmount::fraction(1, 3)
    } else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::OnTurnEnd, EffectType::HealHp, Target::User)
            .with_condition(context.condition())
            .with_value(EffectValue {
                heal_amount: Some(amount),
                ..Default::default()
            }),
        &[Category::Recovery],
    )
}
