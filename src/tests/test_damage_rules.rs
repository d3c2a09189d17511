#[cfg(test)]
mod tests {
    use crate::rules::{
        always_hit, contact_punish, critical_damage, damage_multiplier, move_flag_power,
        no_recoil, prevent_critical, stab_change, survive_hit, type_defense, type_power,
    };
    use crate::tests::common::{cascade, run_family};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{
        Category, Condition, ConditionType, ConditionValue, EffectType, Effectiveness, HealAmount,
        MoveFlag, PokemonType, Status, Target, Trigger, Weather,
    };

    #[test]
    fn test_type_power_with_multi_type_phrase() {
        let classification = run_family(
            type_power,
            "Rock-, Ground-, and Steel-type moves have 1.3× power during a sandstorm.",
        );
        let effects = &classification.effects;
        assert_eq!(effects.len(), 2);

        let single = effects[0].value.clone().unwrap_or_default();
        assert_eq!(single.move_type, Some(PokemonType::Steel));
        assert_eq!(single.multiplier(), Some(1.3));

        let multi = effects[1].value.clone().unwrap_or_default();
        assert_eq!(
            multi.move_types,
            Some(vec![PokemonType::Rock, PokemonType::Ground, PokemonType::Steel])
        );
        for effect in effects {
            assert_eq!(effect.condition, Some(Condition::weather(Weather::Sandstorm)));
            assert_eq!(effect.effect_type, EffectType::MovePowerMultiplier);
        }
    }

    #[test]
    fn test_type_power_emits_every_named_type() {
        let classification = run_family(
            type_power,
            "Normal-type moves become Flying-type moves and have 1.2× power.",
        );
        let types: Vec<_> = classification
            .effects
            .iter()
            .map(|effect| effect.value.as_ref().and_then(|value| value.move_type))
            .collect();
        assert_eq!(types, vec![Some(PokemonType::Normal), Some(PokemonType::Flying)]);
        assert!(classification
            .effects
            .iter()
            .all(|effect| effect.value.as_ref().and_then(|v| v.multiplier()) == Some(1.2)));
        assert_eq!(
            classification.categories,
            vec![
                Category::PowerBoost,
                Category::TypeBoost,
                Category::PowerBoost,
                Category::TypeBoost
            ]
        );
    }

    #[test]
    fn test_type_power_skips_incoming_damage_text() {
        let text = "This Pokémon takes half as much damage from Fire-type moves.";
        assert!(run_family(type_power, text).is_empty());
    }

    #[test]
    fn test_halved_damage_from_two_types() {
        let effects = cascade("This Pokémon takes half as much damage from Fire- and Ice-type moves.");
        let summary: Vec<_> = effects
            .iter()
            .map(|effect| {
                let value = effect.value.clone().unwrap_or_default();
                (effect.effect_type, value.move_type, value.multiplier())
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (EffectType::MovePowerMultiplier, Some(PokemonType::Fire), Some(0.5)),
                (EffectType::MovePowerMultiplier, Some(PokemonType::Ice), Some(0.5)),
                (EffectType::DamageMultiplier, None, Some(0.5)),
            ]
        );
    }

    #[test]
    fn test_type_defense_categories() {
        let classification = run_family(
            type_defense,
            "This Pokémon takes half as much damage from Water-type moves.",
        );
        assert_eq!(classification.effects.len(), 1);
        assert_eq!(classification.categories, vec![Category::TypeDefense]);
    }

    #[test]
    fn test_super_effective_damage_reduction() {
        let classification = run_family(
            damage_multiplier,
            "This Pokémon takes 0.75× as much damage from super-effective moves.",
        );
        let effect = &classification.effects[0];
        assert_eq!(
            effect.condition,
            Some(Condition::new(
                ConditionType::Effectiveness,
                ConditionValue::Effectiveness(Effectiveness::SuperEffective)
            ))
        );
        assert_eq!(effect.value.as_ref().and_then(|v| v.multiplier()), Some(0.75));
        assert_eq!(classification.categories, vec![Category::DamageReduction]);
    }

    #[test]
    fn test_damage_multiplier_needs_a_factor() {
        let classification = run_family(damage_multiplier, "This Pokémon takes less damage.");
        assert!(classification.is_empty());
    }

    #[rstest]
    #[case("Moves that make contact have 1.33× their power.", MoveFlag::Contact, 1.33)]
    #[case("Punch-based moves have 1.2× their base power.", MoveFlag::Punch, 1.2)]
    #[case("Biting moves have 1.5× power.", MoveFlag::Bite, 1.5)]
    #[case("Pulse moves have 1.5× power.", MoveFlag::Pulse, 1.5)]
    #[case("Slicing moves have 1.5× power.", MoveFlag::Blade, 1.5)]
    fn test_move_flag_power(#[case] text: &str, #[case] flag: MoveFlag, #[case] factor: f64) {
        let classification = run_family(move_flag_power, text);
        let effect = &classification.effects[0];
        assert_eq!(effect.trigger, Trigger::OnAttacking);
        let value = effect.value.clone().unwrap_or_default();
        assert_eq!(value.move_flag, Some(flag));
        assert_eq!(value.multiplier(), Some(factor));
        assert_eq!(
            classification.categories,
            vec![Category::PowerBoost, Category::MoveFlagBoost]
        );
    }

    #[test]
    fn test_move_flag_without_factor_is_ignored() {
        assert!(run_family(move_flag_power, "Punch-based moves are stronger.").is_empty());
    }

    #[test]
    fn test_contact_recoil_damage() {
        let classification = run_family(
            contact_punish,
            "Whenever a move makes contact with this Pokémon, the move's user takes 1/8 of its maximum HP in damage.",
        );
        assert_eq!(classification.effects.len(), 1);
        let effect = &classification.effects[0];
        assert_eq!(effect.trigger, Trigger::OnBeingHit);
        assert_eq!(effect.target, Target::Opponent);
        assert_eq!(effect.effect_type, EffectType::ContactDamage);
        assert_eq!(
            effect.condition,
            Some(Condition::new(
                ConditionType::MoveFlag,
                ConditionValue::MoveFlag(MoveFlag::Contact)
            ))
        );
        assert_eq!(
            effect.value.as_ref().and_then(|v| v.heal_amount.clone()),
            Some(HealAmount::fraction(1, 8))
        );
    }

    #[test]
    fn test_contact_status() {
        let classification = run_family(
            contact_punish,
            "Whenever a move makes contact with this Pokémon, the move's user has a 30% chance of being paralyzed.",
        );
        let value = classification.effects[0].value.clone().unwrap_or_default();
        assert_eq!(classification.effects[0].effect_type, EffectType::InflictStatus);
        assert_eq!(value.status, Some(Status::Paralysis));
        assert_eq!(value.probability, Some(30));
        assert_eq!(classification.categories, vec![Category::ContactPunish]);
    }

    #[test]
    fn test_survive_hit_from_full_hp() {
        let classification = run_family(
            survive_hit,
            "When this Pokémon is at full HP, any hit that would knock it out will instead leave it with 1 HP.",
        );
        let effect = &classification.effects[0];
        assert_eq!(effect.condition, Some(Condition::bare(ConditionType::HpFull)));
        assert_eq!(effect.value.as_ref().and_then(|v| v.fixed_value), Some(1));
        assert_eq!(classification.categories, vec![Category::Defensive]);
    }

    #[test]
    fn test_stab_change() {
        let classification = run_family(
            stab_change,
            "This Pokémon inflicts twice as much damage with moves whose types match its own.",
        );
        let value = classification.effects[0].value.clone().unwrap_or_default();
        assert_eq!(value.type_source.as_deref(), Some("own_type"));
        assert_eq!(value.multiplier(), Some(2.0));
    }

    #[rstest]
    #[case(critical_damage, "This Pokémon inflicts triple damage with critical hits.", EffectType::CriticalDamageMultiplier)]
    #[case(prevent_critical, "Moves cannot score critical hits against this Pokémon.", EffectType::PreventCritical)]
    #[case(always_hit, "Moves used by or against this Pokémon never miss.", EffectType::AlwaysHit)]
    #[case(no_recoil, "This Pokémon does not receive recoil damage from its recoil moves.", EffectType::PreventRecoil)]
    fn test_fixed_phrase_families(
        #[case] rule: crate::rules::RuleFamily,
        #[case] text: &str,
        #[case] expected: EffectType,
    ) {
        let classification = run_family(rule, text);
        assert_eq!(classification.effects.len(), 1);
        assert_eq!(classification.effects[0].effect_type, expected);
        assert_eq!(classification.effects[0].trigger, Trigger::Passive);
    }
}
