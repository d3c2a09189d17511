use std::cmp::Ordering;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The event that makes an effect activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Trigger {
    Passive,
    OnSwitchIn,
    OnAttacking,
    OnBeingHit,
    OnContact,
    OnMakingContact,
    OnTurnEnd,
    OnSwitchOut,
    OnStatChange,
    OnKo,
    OnAllyFainted,
    OnHpThreshold,
    AfterMove,
    OnCriticalHit,
    OnFlinch,
    OnAllyMove,
    OnAnyPokemonMove,
    AfterSpecificMove,
    OnItemConsumed,
    OnFaintAny,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConditionType {
    HpBelow,
    HpAbove,
    HpFull,
    Weather,
    Terrain,
    MoveType,
    PokemonType,
    MovePower,
    MoveCategory,
    MoveFlag,
    Status,
    Confused,
    TurnCount,
    HasItem,
    TargetSwitchedIn,
    Effectiveness,
    HoldingSpecificItem,
    HighestStat,
    SpecificMoveUsed,
    DefeatedAlliesCount,
    FlagActive,
    OpposingPokemonCount,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EffectType {
    StatMultiplier,
    StatStageChange,
    PreventStatDecrease,
    IgnoreStatChanges,
    ReverseStatChanges,
    DoubleStatChanges,
    MovePowerMultiplier,
    DamageMultiplier,
    ImmuneToMove,
    ImmuneToType,
    AbsorbType,
    ContactDamage,
    SurviveHit,
    ImmuneToStatus,
    InflictStatus,
    CureStatus,
    SyncStatus,
    SetWeather,
    SetTerrain,
    NullifyWeather,
    HealHp,
    AccuracyMultiplier,
    EvasionMultiplier,
    CriticalRateChange,
    CriticalDamageMultiplier,
    PreventCritical,
    AlwaysHit,
    AdditionalEffectChance,
    RemoveAdditionalEffect,
    PreventAdditionalEffect,
    MultiHitCount,
    PriorityChange,
    ConvertMoveType,
    MakeNonContact,
    ReflectStatusMove,
    ChangeUserType,
    ChangeTargetType,
    IgnoreAbility,
    NullifyAbilities,
    CopyAbility,
    ChangeAbility,
    SwapAbility,
    PreventItemLoss,
    StealItem,
    DisableItem,
    BerryEffect,
    PreventSwitch,
    PreventForcedSwitch,
    ForceSwitch,
    RedirectMove,
    FormChange,
    Transform,
    Disguise,
    PreventRecoil,
    ImmuneToIndirectDamage,
    IncreasePpCost,
    DisableMove,
    WeightMultiplier,
    PreventAction,
    ProtectAlly,
    DamageReductionFullHp,
    BypassProtection,
    ReflectStatChanges,
    CopyStatChanges,
    CumulativeStatBoost,
    RandomStatChange,
    SetAccuracyFixed,
    ForceSlowStatusMove,
    MultiHitExact,
    ReplicateMove,
    CreateHazard,
    GrantAbilityToAlly,
    BoostAllyMovePower,
    HealAlly,
    PassItemToAlly,
    ProtectAllyFromStatus,
    SetFlag,
    ConsumeItemAgain,
    Unknown,
}

/// Who or what an effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Target {
    #[strum(serialize = "self")]
    User,
    Opponent,
    AllOpponents,
    Ally,
    AllAllies,
    Field,
    Move,
    Unknown,
}

/// Coarse search tag attached to an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    WeatherSetter,
    WeatherDependent,
    WeatherBoost,
    WeatherNullify,
    TerrainSetter,
    TerrainDependent,
    TerrainBoost,
    StatBoost,
    StatBoostTrigger,
    StatReducer,
    StatMultiplier,
    StatProtection,
    TypeBoost,
    TypeImmunity,
    TypeDefense,
    TypeChange,
    StatusImmunity,
    #[strum(serialize = "status_inflict")]
    StatusInflictor,
    StatusRecovery,
    StatusReflection,
    StatusBoost,
    DamageReduction,
    DamageIncrease,
    Healing,
    Recovery,
    SwitchInEffect,
    SwitchOutEffect,
    RandomEffect,
    HpDependent,
    PowerBoost,
    MoveFlagBoost,
    AccuracyBoost,
    EvasionBoost,
    CriticalBoost,
    ContactPunish,
    Defensive,
    Flinch,
    EffectBoost,
    MoveImmunity,
    Drawback,
    SpecialMechanic,
    Unknown,
}

closed_vocabulary!(Trigger, ConditionType, EffectType, Target, Category);

// Categories are kept in a sorted set; ordering by wire tag keeps the
// serialized list alphabetical and stable across regenerations.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Trigger {
    /// Triggers surfaced in the search filter UI.
    pub const UI_CASES: [Trigger; 8] = [
        Trigger::Passive,
        Trigger::OnSwitchIn,
        Trigger::OnAttacking,
        Trigger::OnBeingHit,
        Trigger::OnTurnEnd,
        Trigger::OnSwitchOut,
        Trigger::OnContact,
        Trigger::OnStatChange,
    ];

    pub fn ui_cases() -> &'static [Trigger] {
        &Self::UI_CASES
    }
}

impl EffectType {
    /// Effect types surfaced in the search filter UI.
    pub const UI_CASES: [EffectType; 12] = [
        EffectType::StatMultiplier,
        EffectType::MovePowerMultiplier,
        EffectType::ImmuneToType,
        EffectType::AbsorbType,
        EffectType::ImmuneToStatus,
        EffectType::SetWeather,
        EffectType::SetTerrain,
        EffectType::HealHp,
        EffectType::StatStageChange,
        EffectType::PreventStatDecrease,
        EffectType::DamageMultiplier,
        EffectType::ContactDamage,
    ];

    pub fn ui_cases() -> &'static [EffectType] {
        &Self::UI_CASES
    }
}

impl Category {
    /// Categories offered as browse filters.
    pub const UI_CASES: [Category; 17] = [
        Category::WeatherSetter,
        Category::WeatherDependent,
        Category::TerrainSetter,
        Category::TerrainDependent,
        Category::StatBoost,
        Category::StatReducer,
        Category::TypeBoost,
        Category::TypeImmunity,
        Category::TypeDefense,
        Category::StatusImmunity,
        Category::StatusInflictor,
        Category::DamageReduction,
        Category::DamageIncrease,
        Category::Healing,
        Category::SwitchInEffect,
        Category::RandomEffect,
        Category::HpDependent,
    ];

    pub fn ui_cases() -> &'static [Category] {
        &Self::UI_CASES
    }
}
