use super::{Classification, RuleContext};
use crate::text_signals::{mentioned_terrain, NormalizedText};
use schema::{AbilityEffect, Category, EffectType, EffectValue, Target, Trigger, Weather};

fn announces_on_entry(text: &NormalizedText) -> bool {
    text.contains("when") && text.contains_any(&["enters", "battle"])
}

/// Terrain set when the Pokémon enters battle. Only the first terrain named
/// in the text is used.
pub fn terrain_setter(context: &RuleContext) -> Classification {
    let text = context.text;
    match mentioned_terrain(text) {
        Some(terrain) if announces_on_entry(text) => Classification::single(
            AbilityEffect::new(Trigger::OnSwitchIn, EffectType::SetTerrain, Target::Field)
                .with_value(EffectValue {
                    terrain: Some(terrain),
                    ..Default::default()
                }),
            &[Category::TerrainSetter],
        ),
        _ => Classification::none(),
    }
}

/// Weather summoned when the Pokémon enters battle. Text that mentions a
/// terrain belongs to the terrain family.
pub fn weather_setter(context: &RuleContext) -> Classification {
    let text = context.text;
    if text.contains("terrain") || !announces_on_entry(text) {
        return Classification::none();
    }

    let weather = if (text.contains("changes to") && text.contains("strong sunlight"))
        || (text.contains("summons") && text.contains("harsh"))
        || text.contains("turns the sunlight")
    {
        Weather::Sun
    } else if text.contains_any(&["changes to rain", "summons rain"]) {
        Weather::Rain
    } else if text.contains_any(&["changes to a sandstorm", "summons a sandstorm"]) {
        Weather::Sandstorm
    } else if text.contains_any(&["summons snow", "summons a hailstorm", "changes to hail"]) {
        Weather::Snow
    } else {
        return Classification::none();
    };

    Classification::single(
        AbilityEffect::new(Trigger::OnSwitchIn, EffectType::SetWeather, Target::Field).with_value(
            EffectValue {
                weather: Some(weather),
                ..Default::default()
            },
        ),
        &[Category::WeatherSetter],
    )
}

pub fn nullify_weather(context: &RuleContext) -> Classification {
    if context
        .text
        .contains("weather can still be in play, but will not have any of its effects")
    {
        Classification::single(
            AbilityEffect::new(Trigger::Passive, EffectType::NullifyWeather, Target::Field),
            &[Category::WeatherNullify],
        )
    } else {
        Classification::none()
    }
}
