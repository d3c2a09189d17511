//! Hand-authored effect profiles for abilities whose text the rule cascade
//! cannot express. A profile replaces the cascade and fallback entirely;
//! derived categories and species restrictions are still applied on top.

use crate::rules::{multiplier, Classification};
use phf::phf_map;
use schema::{
    AbilityEffect, Category, Condition, ConditionType, ConditionValue, EffectType, EffectValue,
    HealAmount, PokemonType, Stat, Target, Terrain, Trigger, Weather,
};

pub type SignatureProfile = fn() -> Classification;

/// Profiles keyed by exact ability slug
pub static SIGNATURE_PROFILES: phf::Map<&'static str, SignatureProfile> = phf_map! {
    "intimidate" => intimidate,
    "protosynthesis" => protosynthesis,
    "quark-drive" => quark_drive,
    "moody" => moody,
    "gulp-missile" => gulp_missile,
    "multitype" => multitype,
    "rks-system" => rks_system,
    "multiscale" => full_hp_damage_reduction,
    "shadow-shield" => full_hp_damage_reduction,
    "tera-shell" => full_hp_damage_reduction,
    "mirror-armor" => mirror_armor,
    "regenerator" => regenerator,
    "competitive" => competitive,
    "defiant" => defiant,
    "flash-fire" => flash_fire,
    "lightning-rod" => lightning_rod,
    "storm-drain" => storm_drain,
    "motor-drive" => motor_drive,
    "sap-sipper" => sap_sipper,
    "earth-eater" => earth_eater,
    "well-baked-body" => well_baked_body,
};

/// The hand-authored profile for `name`, if it has one.
pub fn signature_profile(name: &str) -> Option<Classification> {
    SIGNATURE_PROFILES.get(name).map(|profile| profile())
}

fn stage_effect(trigger: Trigger, target: Target, stat: Stat, stage: i32) -> AbilityEffect {
    AbilityEffect::new(trigger, EffectType::StatStageChange, target).with_value(EffectValue {
        stat: Some(stat),
        stage_change: Some(stage),
        ..Default::default()
    })
}

fn highest_stat_boost(condition: Condition) -> AbilityEffect {
    AbilityEffect::new(Trigger::Passive, EffectType::StatMultiplier, Target::User)
        .with_condition(Some(condition))
        .with_value(EffectValue {
            multiplier: multiplier(1.3),
            highest_stat: Some(true),
            ..Default::default()
        })
}

fn booster_energy() -> Condition {
    Condition::new(
        ConditionType::HoldingSpecificItem,
        ConditionValue::ItemName("booster-energy".to_string()),
    )
}

fn type_immunity(pokemon_type: PokemonType) -> AbilityEffect {
    AbilityEffect::new(Trigger::Passive, EffectType::ImmuneToType, Target::User).with_value(
        EffectValue {
            move_type: Some(pokemon_type),
            ..Default::default()
        },
    )
}

fn hit_by(pokemon_type: PokemonType) -> Option<Condition> {
    Some(Condition::new(
        ConditionType::MoveType,
        ConditionValue::Type(pokemon_type),
    ))
}

/// Immunity to a type plus a stat raise when a move of that type is absorbed.
fn lightning_rod_style(pokemon_type: PokemonType, stat: Stat, stage: i32) -> Classification {
    let mut classification = Classification::none();
    classification.push(type_immunity(pokemon_type), &[Category::TypeImmunity]);
    classification.push(
        stage_effect(Trigger::OnBeingHit, Target::User, stat, stage)
            .with_condition(hit_by(pokemon_type)),
        &[Category::StatBoost],
    );
    classification
}

fn intimidate() -> Classification {
    Classification::single(
        stage_effect(Trigger::OnSwitchIn, Target::AllOpponents, Stat::Attack, -1),
        &[
            Category::StatBoostTrigger,
            Category::StatReducer,
            Category::SwitchInEffect,
        ],
    )
}

fn protosynthesis() -> Classification {
    let mut classification = Classification::none();
    classification.push(
        highest_stat_boost(Condition::weather(Weather::Sun)),
        &[Category::StatMultiplier, Category::WeatherBoost],
    );
    classification.push(highest_stat_boost(booster_energy()), &[Category::WeatherDependent]);
    classification
}

fn quark_drive() -> Classification {
    let mut classification = Classification::none();
    classification.push(
        highest_stat_boost(Condition::terrain(Terrain::Electric)),
        &[Category::StatMultiplier, Category::TerrainBoost],
    );
    classification.push(highest_stat_boost(booster_energy()), &[Category::TerrainDependent]);
    classification
}

fn moody() -> Classification {
    Classification::single(
        AbilityEffect::new(Trigger::OnTurnEnd, EffectType::RandomStatChange, Target::User)
            .with_value(EffectValue {
                random_element: Some(true),
                stage_change_up: Some(2),
                stage_change_down: Some(-1),
                ..Default::default()
            }),
        &[
            Category::StatBoostTrigger,
            Category::Drawback,
            Category::RandomEffect,
        ],
    )
}

fn gulp_missile() -> Classification {
    let mut classification = Classification::none();
    classification.push(
        AbilityEffect::new(Trigger::AfterSpecificMove, EffectType::SetFlag, Target::User)
            .with_condition(Some(Condition::new(
                ConditionType::SpecificMoveUsed,
                ConditionValue::MoveNames(vec!["surf".to_string(), "dive".to_string()]),
            )))
            .with_value(EffectValue {
                flag_name: Some("gulp_missile_active".to_string()),
                ..Default::default()
            }),
        &[Category::SpecialMechanic],
    );
    classification.push(
        AbilityEffect::new(Trigger::OnBeingHit, EffectType::ContactDamage, Target::Opponent)
            .with_condition(Some(Condition::new(
                ConditionType::FlagActive,
                ConditionValue::FlagName("gulp_missile_active".to_string()),
            )))
            .with_value(EffectValue {
                heal_amount: Some(HealAmount::fraction(1, 4)),
                ..Default::default()
            }),
        &[],
    );
    classification
}

fn held_item_type_change(item_category: &str) -> Classification {
    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::ChangeUserType, Target::User)
            .with_condition(Some(Condition::new(
                ConditionType::HoldingSpecificItem,
                ConditionValue::ItemCategory(item_category.to_string()),
            )))
            .with_value(EffectValue {
                item_category: Some(item_category.to_string()),
                ..Default::default()
            }),
        &[Category::TypeChange],
    )
}

fn multitype() -> Classification {
    held_item_type_change("plate")
}

fn rks_system() -> Classification {
    held_item_type_change("memory")
}

fn full_hp_damage_reduction() -> Classification {
    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::DamageReductionFullHp, Target::User)
            .with_condition(Some(Condition::bare(ConditionType::HpFull)))
            .with_value(EffectValue {
                multiplier: multiplier(0.5),
                ..Default::default()
            }),
        &[Category::DamageReduction, Category::HpDependent],
    )
}

fn mirror_armor() -> Classification {
    Classification::single(
        AbilityEffect::new(Trigger::OnStatChange, EffectType::ReflectStatChanges, Target::Opponent),
        &[Category::StatProtection],
    )
}

fn regenerator() -> Classification {
    Classification::single(
        AbilityEffect::new(Trigger::OnSwitchOut, EffectType::HealHp, Target::User).with_value(
            EffectValue {
                heal_amount: Some(HealAmount::fraction(1, 3)),
                ..Default::default()
            },
        ),
        &[Category::Healing, Category::Recovery, Category::SwitchOutEffect],
    )
}

fn competitive() -> Classification {
    Classification::single(
        stage_effect(Trigger::OnStatChange, Target::User, Stat::SpecialAttack, 2),
        &[Category::StatBoost, Category::StatBoostTrigger],
    )
}

fn defiant() -> Classification {
    Classification::single(
        stage_effect(Trigger::OnStatChange, Target::User, Stat::Attack, 2),
        &[Category::StatBoost, Category::StatBoostTrigger],
    )
}

fn flash_fire() -> Classification {
    Classification::single(
        type_immunity(PokemonType::Fire),
        &[Category::TypeImmunity, Category::PowerBoost],
    )
}

fn lightning_rod() -> Classification {
    lightning_rod_style(PokemonType::Electric, Stat::SpecialAttack, 1)
}

fn storm_drain() -> Classification {
    lightning_rod_style(PokemonType::Water, Stat::SpecialAttack, 1)
}

fn motor_drive() -> Classification {
    lightning_rod_style(PokemonType::Electric, Stat::Speed, 1)
}

fn sap_sipper() -> Classification {
    lightning_rod_style(PokemonType::Grass, Stat::Attack, 1)
}

fn well_baked_body() -> Classification {
    lightning_rod_style(PokemonType::Fire, Stat::Defense, 2)
}

fn earth_eater() -> Classification {
    Classification::single(
        AbilityEffect::new(Trigger::OnBeingHit, EffectType::AbsorbType, Target::User)
            .with_condition(hit_by(PokemonType::Ground))
            .with_value(EffectValue {
                heal_amount: Some(HealAmount::fraction(1, 4)),
                move_type: Some(PokemonType::Ground),
                ..Default::default()
            }),
        &[Category::TypeImmunity],
    )
}
