// Ability Metadata Schema - Shared type definitions
// This crate contains the closed effect vocabulary and the ability records
// that are shared between the classification engine, its batch generator and
// any consumer that reads the shipped metadata asset.

// Re-export the main types
pub use ability_data::*;
pub use battle_data::*;
pub use effect_types::*;
pub use pokemon_types::*;

#[macro_use]
mod vocabulary;

pub mod ability_data;
pub mod battle_data;
pub mod effect_types;
pub mod pokemon_types;

/// Current version of the metadata record layout.
pub const SCHEMA_VERSION: u32 = 1;
