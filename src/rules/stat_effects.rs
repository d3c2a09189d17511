use super::{multiplier, Classification, RuleContext};
use crate::text_signals::NormalizedText;
use schema::{
    AbilityEffect, Category, Condition, ConditionType, EffectType, EffectValue, Stat, Target,
    Trigger,
};

// "special attack" must be tested before "attack" and likewise for defense.
const STAGE_STATS: [(&str, Stat); 7] = [
    ("special attack", Stat::SpecialAttack),
    ("special defense", Stat::SpecialDefense),
    ("attack", Stat::Attack),
    ("defense", Stat::Defense),
    ("speed", Stat::Speed),
    ("accuracy", Stat::Accuracy),
    ("evasion", Stat::Evasion),
];

/// Only these two magnitudes are recognized. Anything else is left to the
/// fallback classifier.
fn stage_magnitude(text: &NormalizedText) -> Option<i32> {
    if text.contains_any(&["two stages", "2 stages"]) {
        Some(2)
    } else if text.contains_any(&["one stage", "1 stage"]) {
        Some(1)
    } else {
        None
    }
}

fn stage_direction(text: &NormalizedText) -> Option<i32> {
    if text.contains_any(&["raises", "rises", "increased"]) {
        Some(1)
    } else if text.contains_any(&["lowers", "decreased", "lowered"]) {
        Some(-1)
    } else {
        None
    }
}

fn stage_context(text: &NormalizedText, stage: i32) -> (Trigger, Target) {
    if text.contains_any(&["enters battle", "sent out"]) {
        let target = if text.contains_any(&["opposing", "opponents", "opponent's"]) {
            Target::AllOpponents
        } else {
            Target::User
        };
        (Trigger::OnSwitchIn, target)
    } else if text.contains_any(&["after each turn", "end of each turn"]) {
        (Trigger::OnTurnEnd, Target::User)
    } else if text.contains_any(&["when hit", "struck", "being hit"]) {
        let target = if stage > 0 { Target::User } else { Target::Opponent };
        (Trigger::OnBeingHit, target)
    } else if text.contains("after") && text.contains("attack") {
        (Trigger::AfterMove, Target::User)
    } else {
        (Trigger::Passive, Target::User)
    }
}

/// Stat stage raised or lowered, e.g. "raises speed by one stage".
pub fn stat_stage_change(context: &RuleContext) -> Classification {
    let text = context.text;
    if !text.contains("stage") {
        return Classification::none();
    }
    let Some((_, stat)) = STAGE_STATS.iter().find(|(name, _)| text.contains(name)) else {
        return Classification::none();
    };
    let (Some(magnitude), Some(direction)) = (stage_magnitude(text), stage_direction(text)) else {
        return Classification::none();
    };

    let stage = magnitude * direction;
    let (trigger, target) = stage_context(text, stage);
    Classification::single(
        AbilityEffect::new(trigger, EffectType::StatStageChange, target)
            .with_condition(context.condition())
            .with_value(EffectValue {
                stat: Some(*stat),
                stage_change: Some(stage),
                ..Default::default()
            }),
        &[Category::StatBoostTrigger],
    )
}

fn passive_stat_multiplier(context: &RuleContext, stat: Stat, factor: f64) -> AbilityEffect {
    AbilityEffect::new(Trigger::Passive, EffectType::StatMultiplier, Target::User)
        .with_condition(context.condition())
        .with_value(EffectValue {
            stat: Some(stat),
            multiplier: multiplier(factor),
            ..Default::default()
        })
}

/// Raw stat multipliers such as "speed is doubled". Never applies to text
/// that talks about stages.
pub fn stat_multiplier(context: &RuleContext) -> Classification {
    let text = context.text;
    let mut classification = Classification::none();
    if text.contains("stage") {
        return classification;
    }

    if text.contains("speed") && text.contains("doubled") {
        classification.push(
            passive_stat_multiplier(context, Stat::Speed, 2.0),
            &[Category::StatMultiplier],
        );
    }

    let special_attack = text.contains("special attack");
    if text.contains("attack") && !special_attack && text.contains("doubled") {
        classification.push(
            passive_stat_multiplier(context, Stat::Attack, 2.0),
            &[Category::StatMultiplier, Category::PowerBoost],
        );
    }

    if special_attack && text.contains_any(&["1.5", "doubled"]) {
        let factor = if text.contains("1.5") { 1.5 } else { 2.0 };
        classification.push(
            passive_stat_multiplier(context, Stat::SpecialAttack, factor),
            &[Category::StatMultiplier, Category::PowerBoost],
        );
    }

    classification
}

pub fn accuracy_multiplier(context: &RuleContext) -> Classification {
    let text = context.text;
    if !(text.contains("moves have") && text.contains("their accuracy")) {
        return Classification::none();
    }
    let factor = if text.contains_any(&["1.3×", "1.3x"]) {
        1.3
    } else if text.contains_any(&["1.25×", "1.25x"]) {
        1.25
    } else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::AccuracyMultiplier, Target::User)
            .with_condition(context.condition())
            .with_value(EffectValue {
                stat: Some(Stat::Accuracy),
                multiplier: multiplier(factor),
                ..Default::default()
            }),
        &[Category::AccuracyBoost],
    )
}

pub fn evasion_multiplier(context: &RuleContext) -> Classification {
    let text = context.text;
    if !(text.contains("has") && text.contains("evasion")) || text.contains("opponent") {
        return Classification::none();
    }
    let factor = if text.contains_any(&["1.25×", "1.25x"]) {
        1.25
    } else if text.contains_any(&["1.2×", "1.2x"]) {
        1.2
    } else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::EvasionMultiplier, Target::User)
            .with_condition(context.condition())
            .with_value(EffectValue {
                stat: Some(Stat::Evasion),
                multiplier: multiplier(factor),
                ..Default::default()
            }),
        &[Category::EvasionBoost],
    )
}

pub fn prevent_stat_decrease(context: &RuleContext) -> Classification {
    if context
        .text
        .contains_any(&["cannot have its stats lowered", "cannot have any stat lowered"])
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::PreventStatDecrease, Target::User),
            &[Category::StatProtection],
        )
    } else {
        Classification::none()
    }
}

/// Protection for one named stat, e.g. "attack cannot be lowered".
pub fn specific_stat_protection(context: &RuleContext) -> Classification {
    let text = context.text;
    let stat = if text.contains("attack cannot be lowered") {
        Stat::Attack
    } else if text.contains("defense cannot be lowered") {
        Stat::Defense
    } else if text.contains("cannot have its accuracy lowered") {
        Stat::Accuracy
    } else if text.contains("cannot have its evasion lowered") {
        Stat::Evasion
    } else if text.contains("speed cannot be lowered") {
        Stat::Speed
    } else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::PreventStatDecrease, Target::User)
            .with_value(EffectValue {
                stat: Some(stat),
                ..Default::default()
            }),
        &[Category::StatProtection],
    )
}

/// A stat multiplied by 1.5 while the Pokémon has a major status ailment.
pub fn status_boost(context: &RuleContext) -> Classification {
    let text = context.text;
    if !text.contains_any(&[
        "has a major status ailment",
        "is asleep, burned, paralyzed, or poisoned",
    ]) {
        return Classification::none();
    }

    let stat = if text.contains_any(&["1.5× its attack", "1.5x its attack"]) {
        Stat::Attack
    } else if text.contains_any(&["1.5× its defense", "1.5x its defense"]) {
        Stat::Defense
    } else if text.contains_any(&["1.5× its speed", "1.5x its speed"]) {
        Stat::Speed
    } else if text.contains("1.5× its special attack") {
        Stat::SpecialAttack
    } else if text.contains("1.5× its special defense") {
        Stat::SpecialDefense
    } else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::Passive, EffectType::StatMultiplier, Target::User)
            .with_condition(Some(Condition::bare(ConditionType::Status)))
            .with_value(EffectValue {
                stat: Some(stat),
                multiplier: multiplier(1.5),
                ..Default::default()
            }),
        &[Category::StatusBoost],
    )
}

pub fn critical_rate(context: &RuleContext) -> Classification {
    if context.text.contains("critical hit rates one stage higher") {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::CriticalRateChange, Target::User)
                .with_value(EffectValue {
                    stage_change: Some(1),
                    ..Default::default()
                }),
            &[Category::CriticalBoost],
        )
    } else {
        Classification::none()
    }
}
