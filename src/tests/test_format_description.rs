#[cfg(test)]
mod tests {
    use crate::rules::format_description::Describe;
    use crate::tests::common::cascade;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{
        AbilityEffect, Condition, ConditionType, ConditionValue, EffectType, HealAmount,
        PokemonType, Target, Trigger,
    };

    #[rstest]
    #[case(
        "Raises the user's Speed by one stage when it enters battle.",
        "On switch-in: stat stage change on the user (Speed, +1 stage(s))"
    )]
    #[case(
        "This Pokémon's Speed is doubled during strong sunlight.",
        "Always: stat multiplier on the user (Speed, ×2) in sun"
    )]
    #[case(
        "Whenever a move makes contact with this Pokémon, the move's user takes 1/8 of its maximum HP in damage.",
        "When hit: contact damage on the opponent (1/8 of max HP) from contact moves"
    )]
    #[case(
        "This Pokémon cannot be paralyzed.",
        "Always: immune to status on the user (paralysis)"
    )]
    fn test_describe_classified_effect(#[case] text: &str, #[case] expected: &str) {
        let effects = cascade(text);
        assert_eq!(effects[0].describe().to_string(), expected);
    }

    #[test]
    fn test_describe_unknown_effect() {
        let effect = AbilityEffect::new(Trigger::Passive, EffectType::Unknown, Target::User);
        assert_eq!(
            effect.describe().to_string(),
            "Always: does something unrecognized on the user"
        );
    }

    #[rstest]
    #[case(Condition::bare(ConditionType::HpFull), "at full HP")]
    #[case(Condition::bare(ConditionType::Status), "while statused")]
    #[case(
        Condition::new(ConditionType::MoveType, ConditionValue::Type(PokemonType::Electric)),
        "against electric-type moves"
    )]
    fn test_describe_condition(#[case] condition: Condition, #[case] expected: &str) {
        assert_eq!(condition.describe().to_string(), expected);
    }

    #[test]
    fn test_describe_heal_amount() {
        assert_eq!(HealAmount::fraction(1, 16).describe().to_string(), "1/16 of max HP");
        assert_eq!(HealAmount::Percentage(25).describe().to_string(), "25% of max HP");
    }
}
