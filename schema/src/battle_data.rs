use strum::{EnumIter, EnumString, IntoStaticStr};

/// Battle statistic an effect reads or modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Weather {
    Sun,
    Rain,
    Sandstorm,
    Hail,
    Snow,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
    Unknown,
}

/// Major status ailments plus the volatile conditions abilities commonly
/// grant immunity to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadlyPoisoned,
    Sleep,
    Confusion,
    Infatuation,
    Flinch,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MoveFlag {
    Contact,
    Sound,
    Punch,
    Bite,
    Pulse,
    Blade,
    Ballistic,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Effectiveness {
    SuperEffective,
    NotVeryEffective,
    Unknown,
}

/// What a cumulative boost counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AccumulationSource {
    DefeatedAllies,
    DefeatedOpponents,
    DefeatedAny,
    Unknown,
}

closed_vocabulary!(
    Stat,
    Weather,
    Terrain,
    Status,
    MoveFlag,
    Effectiveness,
    AccumulationSource
);

impl Stat {
    /// Human-readable name, as used in ability text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
            Stat::Accuracy => "Accuracy",
            Stat::Evasion => "Evasion",
            Stat::Unknown => "an unknown stat",
        }
    }
}
