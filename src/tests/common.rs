use crate::rules::{run_cascade, Classification, RuleContext, RuleFamily};
use crate::text_signals::{normalize, SituationalSignals};
use schema::{AbilityEffect, AbilityRecord};

/// A builder for ability records with placeholder localized fields.
///
/// # Example
/// ```ignore
/// let record = TestAbilityBuilder::new("limber")
///     .with_effect("This Pokémon cannot be paralyzed.")
///     .build();
/// ```
pub struct TestAbilityBuilder {
    id: u32,
    name: String,
    effect: String,
}

impl TestAbilityBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: 1,
            name: name.to_string(),
            effect: String::new(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_effect(mut self, effect: &str) -> Self {
        self.effect = effect.to_string();
        self
    }

    pub fn build(self) -> AbilityRecord {
        AbilityRecord {
            id: self.id,
            name_localized: format!("{}-ja", self.name),
            effect_localized: format!("{}-ja", self.effect),
            name: self.name,
            effect: self.effect,
        }
    }
}

/// Run a single rule family over raw text, with signals detected the same
/// way the assembler does.
pub fn run_family(rule: RuleFamily, text: &str) -> Classification {
    let normalized = normalize(text);
    let condition = SituationalSignals::detect(&normalized).combined();
    rule(&RuleContext::new(&normalized, condition.as_ref()))
}

/// Run the full cascade over raw text.
pub fn cascade(text: &str) -> Vec<AbilityEffect> {
    let normalized = normalize(text);
    let condition = SituationalSignals::detect(&normalized).combined();
    run_cascade(&RuleContext::new(&normalized, condition.as_ref())).effects
}
