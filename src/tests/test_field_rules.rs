#[cfg(test)]
mod tests {
    use crate::rules::{family, nullify_weather, terrain_setter, weather_setter, RULE_FAMILIES};
    use crate::tests::common::{cascade, run_family};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{
        AbilityEffect, Category, EffectType, EffectValue, Target, Terrain, Trigger, Weather,
    };
    use std::collections::HashSet;

    #[test]
    fn test_rule_table_order_and_lookup() {
        let names: Vec<&str> = RULE_FAMILIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
        assert_eq!(names[0], "terrain_setter");
        assert_eq!(names[1], "weather_setter");
        assert_eq!(names.last(), Some(&"damage_multiplier"));

        assert!(family("weather_setter").is_some());
        assert!(family("not_a_family").is_none());
    }

    fn weather_effect(weather: Weather) -> AbilityEffect {
        AbilityEffect::new(Trigger::OnSwitchIn, EffectType::SetWeather, Target::Field).with_value(
            EffectValue {
                weather: Some(weather),
                ..Default::default()
            },
        )
    }

    #[rstest]
    #[case("The weather changes to rain when this Pokémon enters battle.", Weather::Rain)]
    #[case(
        "The weather changes to strong sunlight when this Pokémon enters battle.",
        Weather::Sun
    )]
    #[case("Summons harsh sunlight when this Pokémon enters battle.", Weather::Sun)]
    #[case(
        "The weather changes to a sandstorm when this Pokémon enters battle.",
        Weather::Sandstorm
    )]
    #[case("Summons snow when this Pokémon enters battle.", Weather::Snow)]
    #[case("The weather changes to hail when this Pokémon enters battle.", Weather::Snow)]
    fn test_weather_setter(#[case] text: &str, #[case] weather: Weather) {
        let classification = run_family(weather_setter, text);
        assert_eq!(classification.effects, vec![weather_effect(weather)]);
        assert_eq!(classification.categories, vec![Category::WeatherSetter]);
    }

    #[test]
    fn test_weather_setter_requires_entry_wording() {
        let classification = run_family(weather_setter, "Summons rain.");
        assert!(classification.is_empty());
    }

    #[test]
    fn test_terrain_setter() {
        let classification = run_family(
            terrain_setter,
            "Changes the terrain to Grassy Terrain when this Pokémon enters battle.",
        );
        let expected = AbilityEffect::new(Trigger::OnSwitchIn, EffectType::SetTerrain, Target::Field)
            .with_value(EffectValue {
                terrain: Some(Terrain::Grassy),
                ..Default::default()
            });
        assert_eq!(classification.effects, vec![expected]);
        assert_eq!(classification.categories, vec![Category::TerrainSetter]);
    }

    #[test]
    fn test_terrain_text_never_sets_weather() {
        let text = "When this Pokémon enters battle, it changes the terrain to Electric Terrain and summons rain.";
        assert!(run_family(weather_setter, text).is_empty());

        let effects = cascade(text);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].effect_type, EffectType::SetTerrain);
        assert_eq!(
            effects[0].value.as_ref().and_then(|value| value.terrain),
            Some(Terrain::Electric)
        );
    }

    #[test]
    fn test_nullify_weather() {
        let classification = run_family(
            nullify_weather,
            "While this Pokémon is in battle, weather can still be in play, but will not have any of its effects.",
        );
        assert_eq!(
            classification.effects,
            vec![AbilityEffect::new(
                Trigger::Passive,
                EffectType::NullifyWeather,
                Target::Field
            )]
        );
        assert_eq!(classification.categories, vec![Category::WeatherNullify]);
    }
}
