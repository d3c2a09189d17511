use crate::{
    AccumulationSource, Category, ConditionType, EffectType, Effectiveness, MoveFlag, PokemonType,
    Stat, Status, Target, Terrain, Trigger, Weather, SCHEMA_VERSION,
};
use ordered_float::OrderedFloat;
use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// One ability as it appears in the source corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityRecord {
    pub id: u32,
    pub name: String,
    #[serde(default, alias = "nameJa")]
    pub name_localized: String,
    pub effect: String,
    #[serde(default, alias = "effectJa")]
    pub effect_localized: String,
}

/// The structured classification of one ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityMetadata {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub id: u32,
    pub name: String,
    pub name_localized: String,
    pub effect: String,
    pub effect_localized: String,
    pub effects: Vec<AbilityEffect>,
    pub categories: BTreeSet<Category>,
    #[serde(
        rename = "pokemonRestriction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub species_restriction: Option<Vec<String>>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityEffect {
    pub trigger: Trigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    pub effect_type: EffectType,
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<EffectValue>,
}

impl AbilityEffect {
    pub fn new(trigger: Trigger, effect_type: EffectType, target: Target) -> Self {
        Self {
            trigger,
            condition: None,
            effect_type,
            target,
            value: None,
        }
    }

    pub fn with_condition(mut self, condition: Option<Condition>) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_value(mut self, value: EffectValue) -> Self {
        self.value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
}

impl Condition {
    pub fn new(condition_type: ConditionType, value: ConditionValue) -> Self {
        Self {
            condition_type,
            value: Some(value),
        }
    }

    pub fn bare(condition_type: ConditionType) -> Self {
        Self {
            condition_type,
            value: None,
        }
    }

    pub fn weather(weather: Weather) -> Self {
        Self::new(ConditionType::Weather, ConditionValue::Weather(weather))
    }

    pub fn terrain(terrain: Terrain) -> Self {
        Self::new(ConditionType::Terrain, ConditionValue::Terrain(terrain))
    }
}

/// An exact ratio. Never reduced, never converted to a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    #[serde(default)]
    pub numerator: u32,
    #[serde(default = "default_denominator")]
    pub denominator: u32,
}

fn default_denominator() -> u32 {
    1
}

impl Fraction {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

/// Payload of a condition. On the wire this is a single-key object such as
/// `{"percentage": 30}` or `{"fraction": {"numerator": 1, "denominator": 4}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    Fraction(Fraction),
    Percentage(u32),
    Weather(Weather),
    Terrain(Terrain),
    Types(Vec<PokemonType>),
    Type(PokemonType),
    MoveFlag(MoveFlag),
    Status(Status),
    Number(i64),
    Effectiveness(Effectiveness),
    ItemName(String),
    ItemCategory(String),
    MoveNames(Vec<String>),
    FlagName(String),
}

/// Keys tried, in order, when decoding a `ConditionValue`. The first key that
/// is present and whose payload has the expected shape wins.
pub const CONDITION_VALUE_PROBE_ORDER: [&str; 14] = [
    "fraction",
    "percentage",
    "weather",
    "terrain",
    "types",
    "type",
    "moveFlag",
    "status",
    "number",
    "effectiveness",
    "itemName",
    "itemCategory",
    "moveNames",
    "flagName",
];

/// Keys tried, in order, when decoding a `HealAmount`.
pub const HEAL_AMOUNT_PROBE_ORDER: [&str; 2] = ["fraction", "percentage"];

fn probe<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    object.get(key).and_then(|payload| T::deserialize(payload).ok())
}

fn key_list(object: &Map<String, Value>) -> String {
    object.keys().cloned().collect::<Vec<_>>().join(", ")
}

impl ConditionValue {
    pub fn wire_key(&self) -> &'static str {
        match self {
            ConditionValue::Fraction(_) => "fraction",
            ConditionValue::Percentage(_) => "percentage",
            ConditionValue::Weather(_) => "weather",
            ConditionValue::Terrain(_) => "terrain",
            ConditionValue::Types(_) => "types",
            ConditionValue::Type(_) => "type",
            ConditionValue::MoveFlag(_) => "moveFlag",
            ConditionValue::Status(_) => "status",
            ConditionValue::Number(_) => "number",
            ConditionValue::Effectiveness(_) => "effectiveness",
            ConditionValue::ItemName(_) => "itemName",
            ConditionValue::ItemCategory(_) => "itemCategory",
            ConditionValue::MoveNames(_) => "moveNames",
            ConditionValue::FlagName(_) => "flagName",
        }
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        probe(object, "fraction")
            .map(ConditionValue::Fraction)
            .or_else(|| probe(object, "percentage").map(ConditionValue::Percentage))
            .or_else(|| probe(object, "weather").map(ConditionValue::Weather))
            .or_else(|| probe(object, "terrain").map(ConditionValue::Terrain))
            .or_else(|| probe(object, "types").map(ConditionValue::Types))
            .or_else(|| probe(object, "type").map(ConditionValue::Type))
            .or_else(|| probe(object, "moveFlag").map(ConditionValue::MoveFlag))
            .or_else(|| probe(object, "status").map(ConditionValue::Status))
            .or_else(|| probe(object, "number").map(ConditionValue::Number))
            .or_else(|| probe(object, "effectiveness").map(ConditionValue::Effectiveness))
            .or_else(|| probe(object, "itemName").map(ConditionValue::ItemName))
            .or_else(|| probe(object, "itemCategory").map(ConditionValue::ItemCategory))
            .or_else(|| probe(object, "moveNames").map(ConditionValue::MoveNames))
            .or_else(|| probe(object, "flagName").map(ConditionValue::FlagName))
    }
}

impl Serialize for ConditionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let key = self.wire_key();
        match self {
            ConditionValue::Fraction(fraction) => map.serialize_entry(key, fraction)?,
            ConditionValue::Percentage(value) => map.serialize_entry(key, value)?,
            ConditionValue::Weather(weather) => map.serialize_entry(key, weather)?,
            ConditionValue::Terrain(terrain) => map.serialize_entry(key, terrain)?,
            ConditionValue::Types(types) => map.serialize_entry(key, types)?,
            ConditionValue::Type(pokemon_type) => map.serialize_entry(key, pokemon_type)?,
            ConditionValue::MoveFlag(flag) => map.serialize_entry(key, flag)?,
            ConditionValue::Status(status) => map.serialize_entry(key, status)?,
            ConditionValue::Number(number) => map.serialize_entry(key, number)?,
            ConditionValue::Effectiveness(effectiveness) => map.serialize_entry(key, effectiveness)?,
            ConditionValue::ItemName(name)
            | ConditionValue::ItemCategory(name)
            | ConditionValue::FlagName(name) => map.serialize_entry(key, name)?,
            ConditionValue::MoveNames(names) => map.serialize_entry(key, names)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConditionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        ConditionValue::from_object(&object).ok_or_else(|| {
            de::Error::custom(format!(
                "unable to decode ConditionValue from keys [{}]",
                key_list(&object)
            ))
        })
    }
}

/// How much HP an effect restores or removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealAmount {
    Fraction(Fraction),
    Percentage(u32),
}

impl HealAmount {
    pub const fn fraction(numerator: u32, denominator: u32) -> Self {
        HealAmount::Fraction(Fraction::new(numerator, denominator))
    }
}

impl Serialize for HealAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            HealAmount::Fraction(fraction) => map.serialize_entry("fraction", fraction)?,
            HealAmount::Percentage(value) => map.serialize_entry("percentage", value)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HealAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        probe(&object, "fraction")
            .map(HealAmount::Fraction)
            .or_else(|| probe(&object, "percentage").map(HealAmount::Percentage))
            .ok_or_else(|| {
                de::Error::custom(format!(
                    "unable to decode HealAmount from keys [{}]",
                    key_list(&object)
                ))
            })
    }
}

/// Typed payload of an effect. Only the fields relevant to the effect type
/// are populated; the rest stay `None` and are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<Stat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<OrderedFloat<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_change: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heal_amount: Option<HealAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_type: Option<PokemonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_types: Option<Vec<PokemonType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_flag: Option<MoveFlag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<Effectiveness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_move_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_move_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_form_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_element: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulation_source: Option<AccumulationSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_stat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_change_up: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_change_down: Option<i32>,
}

impl EffectValue {
    pub fn multiplier(&self) -> Option<f64> {
        self.multiplier.map(|m| m.into_inner())
    }
}
