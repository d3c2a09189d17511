// In: src/lib.rs

//! Ability Metadata Engine
//!
//! Turns the English description of a Pokémon ability into structured,
//! searchable effects: trigger, optional condition, effect type, target and
//! a typed value payload. The batch generator writes the result as a
//! deterministic JSON asset.

// --- MODULE DECLARATIONS ---
pub mod assembler;
pub mod config;
pub mod errors;
pub mod exclusivity;
pub mod pipeline;
pub mod rules;
pub mod signature;
pub mod text_signals;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the records and the closed vocabulary.
pub use schema::{
    // Records
    AbilityEffect,
    AbilityMetadata,
    AbilityRecord,
    // Vocabulary
    Category,
    Condition,
    ConditionType,
    ConditionValue,
    EffectType,
    EffectValue,
    Fraction,
    HealAmount,
    PokemonType,
    Stat,
    Status,
    Target,
    Trigger,
    SCHEMA_VERSION,
};

// --- From this crate's modules (`src/`) ---

// Per-ability classification.
pub use assembler::{classify, classify_with_source, ClassificationSource};
pub use text_signals::{normalize, NormalizedText, SituationalSignals};

// Batch generation.
pub use config::GeneratorConfig;
pub use pipeline::{run, AbilityCorpus, RunSummary};

// Crate-specific error and result types.
pub use errors::{ConfigError, ConfigResult, PipelineError, PipelineResult};
