//! One-line English summaries of classified effects, used by the run
//! summary. Schema types live in another crate, so they are displayed
//! through the [`Described`] adaptor, in the same way `Path::display` works.

use schema::{
    AbilityEffect, Condition, ConditionType, ConditionValue, EffectType, EffectValue, HealAmount,
    Target, Trigger,
};
use std::fmt;

/// Display adaptor returned by [`Describe::describe`].
pub struct Described<'a, T: ?Sized>(pub &'a T);

pub trait Describe {
    fn describe(&self) -> Described<'_, Self> {
        Described(self)
    }
}

impl Describe for AbilityEffect {}
impl Describe for Condition {}
impl Describe for ConditionValue {}
impl Describe for EffectValue {}
impl Describe for HealAmount {}

fn trigger_phrase(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Passive => "Always",
        Trigger::OnSwitchIn => "On switch-in",
        Trigger::OnAttacking => "When attacking",
        Trigger::OnBeingHit => "When hit",
        Trigger::OnContact | Trigger::OnMakingContact => "On contact",
        Trigger::OnTurnEnd => "At the end of each turn",
        Trigger::OnSwitchOut => "On switch-out",
        Trigger::OnStatChange => "When its stats change",
        Trigger::OnKo => "After a knockout",
        Trigger::OnAllyFainted => "When an ally faints",
        Trigger::OnHpThreshold => "At an HP threshold",
        Trigger::AfterMove => "After moving",
        Trigger::OnCriticalHit => "On a critical hit",
        Trigger::OnFlinch => "When it flinches",
        Trigger::OnAllyMove => "When an ally moves",
        Trigger::OnAnyPokemonMove => "When any Pokémon moves",
        Trigger::AfterSpecificMove => "After a specific move",
        Trigger::OnItemConsumed => "When an item is consumed",
        Trigger::OnFaintAny => "When any Pokémon faints",
        Trigger::Unknown => "Under unknown circumstances",
    }
}

fn target_phrase(target: Target) -> &'static str {
    match target {
        Target::User => "the user",
        Target::Opponent => "the opponent",
        Target::AllOpponents => "all opponents",
        Target::Ally => "an ally",
        Target::AllAllies => "all allies",
        Target::Field => "the field",
        Target::Move => "the move",
        Target::Unknown => "an unknown target",
    }
}

impl fmt::Display for Described<'_, HealAmount> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            HealAmount::Fraction(fraction) => {
                write!(f, "{}/{} of max HP", fraction.numerator, fraction.denominator)
            }
            HealAmount::Percentage(percent) => write!(f, "{}% of max HP", percent),
        }
    }
}

impl fmt::Display for Described<'_, ConditionValue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ConditionValue::Fraction(fraction) => {
                write!(f, "{}/{}", fraction.numerator, fraction.denominator)
            }
            ConditionValue::Percentage(percent) => write!(f, "{}%", percent),
            ConditionValue::Weather(weather) => write!(f, "{}", weather),
            ConditionValue::Terrain(terrain) => write!(f, "{} terrain", terrain),
            ConditionValue::Types(types) => {
                let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
                write!(f, "{}", names.join("/"))
            }
            ConditionValue::Type(pokemon_type) => write!(f, "{}-type", pokemon_type),
            ConditionValue::MoveFlag(flag) => write!(f, "{} moves", flag),
            ConditionValue::Status(status) => write!(f, "{}", status),
            ConditionValue::Number(number) => write!(f, "{}", number),
            ConditionValue::Effectiveness(effectiveness) => write!(f, "{}", effectiveness),
            ConditionValue::ItemName(name) | ConditionValue::ItemCategory(name) => {
                write!(f, "{}", name)
            }
            ConditionValue::MoveNames(names) => write!(f, "{}", names.join(" or ")),
            ConditionValue::FlagName(name) => write!(f, "flag {}", name),
        }
    }
}

impl fmt::Display for Described<'_, Condition> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let condition = self.0;
        match (&condition.condition_type, &condition.value) {
            (ConditionType::HpFull, _) => write!(f, "at full HP"),
            (ConditionType::Status, None) => write!(f, "while statused"),
            (ConditionType::Weather, Some(value)) => write!(f, "in {}", value.describe()),
            (ConditionType::Terrain, Some(value)) => write!(f, "on {}", value.describe()),
            (ConditionType::MoveType, Some(value)) => write!(f, "against {} moves", value.describe()),
            (ConditionType::MoveFlag, Some(value)) => write!(f, "from {}", value.describe()),
            (condition_type, Some(value)) => {
                write!(f, "when {} is {}", condition_type, value.describe())
            }
            (condition_type, None) => write!(f, "when {}", condition_type),
        }
    }
}

impl fmt::Display for Described<'_, EffectValue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let mut parts: Vec<String> = Vec::new();
        if let Some(stat) = value.stat {
            parts.push(stat.display_name().to_string());
        }
        if let Some(stage) = value.stage_change {
            parts.push(format!("{:+} stage(s)", stage));
        }
        if let Some(multiplier) = value.multiplier() {
            parts.push(format!("×{}", multiplier));
        }
        if let Some(amount) = &value.heal_amount {
            parts.push(amount.describe().to_string());
        }
        if let Some(probability) = value.probability {
            parts.push(format!("{}% chance", probability));
        }
        if let Some(status) = value.status {
            parts.push(status.to_string());
        }
        if let Some(weather) = value.weather {
            parts.push(weather.to_string());
        }
        if let Some(terrain) = value.terrain {
            parts.push(format!("{} terrain", terrain));
        }
        if let Some(move_type) = value.move_type {
            parts.push(format!("{}-type", move_type));
        }
        if let Some(move_types) = &value.move_types {
            let names: Vec<&str> = move_types.iter().map(|t| t.as_str()).collect();
            parts.push(format!("{}-type", names.join("/")));
        }
        if let Some(flag) = value.move_flag {
            parts.push(format!("{} moves", flag));
        }
        if let (Some(up), Some(down)) = (value.stage_change_up, value.stage_change_down) {
            parts.push(format!("{:+}/{:+} stage(s)", up, down));
        }
        if value.highest_stat == Some(true) {
            parts.push("highest stat".to_string());
        }
        write!(f, "{}", parts.join(", "))
    }
}

impl fmt::Display for Described<'_, AbilityEffect> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let effect = self.0;
        let action = match effect.effect_type {
            EffectType::Unknown => "does something unrecognized".to_string(),
            other => other.as_str().replace('_', " "),
        };
        write!(
            f,
            "{}: {} on {}",
            trigger_phrase(effect.trigger),
            action,
            target_phrase(effect.target)
        )?;
        if let Some(value) = &effect.value {
            let detail = value.describe().to_string();
            if !detail.is_empty() {
                write!(f, " ({})", detail)?;
            }
        }
        if let Some(condition) = &effect.condition {
            write!(f, " {}", condition.describe())?;
        }
        Ok(())
    }
}
