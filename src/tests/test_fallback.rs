#[cfg(test)]
mod tests {
    use crate::rules::fallback::{classify_fallback, fallback_effect_type, fallback_trigger};
    use crate::text_signals::normalize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{AbilityEffect, Category, EffectType, Target, Trigger};

    #[test]
    fn test_unrecognized_text_is_a_special_mechanic() {
        let classification = classify_fallback(&normalize("Does something never described before."));
        assert_eq!(
            classification.effects,
            vec![AbilityEffect::new(
                Trigger::Passive,
                EffectType::Unknown,
                Target::User
            )]
        );
        assert_eq!(classification.categories, vec![Category::SpecialMechanic]);
    }

    #[test]
    fn test_empty_text() {
        let classification = classify_fallback(&normalize(""));
        assert_eq!(classification.effects.len(), 1);
        assert_eq!(classification.effects[0].trigger, Trigger::Passive);
        assert_eq!(classification.effects[0].effect_type, EffectType::Unknown);
    }

    #[rstest]
    #[case("When it enters battle, contact moves get stronger.", Trigger::OnSwitchIn)]
    #[case("Contact with this Pokémon at the end of each turn hurts.", Trigger::OnContact)]
    #[case("Something happens at the end of each turn when hit.", Trigger::OnTurnEnd)]
    #[case("Something happens when hit by an attack.", Trigger::OnBeingHit)]
    #[case("Something happens when attacking.", Trigger::OnAttacking)]
    #[case("Something happens.", Trigger::Passive)]
    fn test_trigger_priority(#[case] text: &str, #[case] expected: Trigger) {
        assert_eq!(fallback_trigger(&normalize(text)), expected);
    }

    #[rstest]
    #[case("Boosts power and damage.", EffectType::MovePowerMultiplier)]
    #[case("Deals more damage when doubled.", EffectType::DamageMultiplier)]
    #[case("Weight is halved.", EffectType::StatMultiplier)]
    #[case("Changes stat stages.", EffectType::StatStageChange)]
    #[case("Prevents the use of explosive moves.", EffectType::ImmuneToStatus)]
    #[case("Restores a held berry.", EffectType::HealHp)]
    #[case("Has a chance to cure allies.", EffectType::CureStatus)]
    #[case("Changes its form in the weather.", EffectType::SetWeather)]
    #[case("Changes its form on the terrain.", EffectType::SetTerrain)]
    fn test_effect_type_priority(#[case] text: &str, #[case] expected: EffectType) {
        assert_eq!(fallback_effect_type(&normalize(text)), expected);
    }

    #[test]
    fn test_field_effects_target_the_field() {
        let weather = classify_fallback(&normalize("Changes its form in the weather."));
        assert_eq!(weather.effects[0].target, Target::Field);
        assert!(weather.categories.is_empty());

        let terrain = classify_fallback(&normalize("Changes its form on the terrain."));
        assert_eq!(terrain.effects[0].target, Target::Field);
    }
}
