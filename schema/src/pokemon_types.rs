use strum::{EnumIter, EnumString, IntoStaticStr};

/// Elemental type of a move or a Pokémon, as it appears in ability text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Unknown,
}

closed_vocabulary!(PokemonType);

impl PokemonType {
    /// The 18 elemental types in the order the type-power rules scan them.
    pub const ELEMENTAL: [PokemonType; 18] = [
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Grass,
        PokemonType::Electric,
        PokemonType::Normal,
        PokemonType::Steel,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Fairy,
        PokemonType::Fighting,
        PokemonType::Flying,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Rock,
        PokemonType::Bug,
        PokemonType::Ghost,
        PokemonType::Ice,
        PokemonType::Psychic,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_elemental_table_covers_every_known_type_once() {
        let mut known: Vec<&str> = PokemonType::all()
            .filter(|t| !t.is_unknown())
            .map(|t| t.as_str())
            .collect();
        let mut scanned: Vec<&str> = PokemonType::ELEMENTAL.iter().map(|t| t.as_str()).collect();
        known.sort();
        scanned.sort();
        assert_eq!(known, scanned);
    }

    #[test]
    fn test_unrecognized_type_tag_is_unknown() {
        let decoded: PokemonType = serde_json::from_str("\"stellar\"").unwrap();
        assert_eq!(decoded, PokemonType::Unknown);
        assert_eq!(PokemonType::decode("psychic"), PokemonType::Psychic);
    }
}
