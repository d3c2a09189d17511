//! Situational signals read straight off ability text.
//!
//! Every function here is a pure phrase-containment check over lowercased
//! text. Punctuation is never stripped: rules downstream key on tokens such
//! as `1.5×` and `¼`.

use schema::{Condition, Terrain, Weather};

/// Lowercased ability text. Built once per ability and shared by every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText(text.to_lowercase())
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.0.contains(phrase)
    }

    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|phrase| self.0.contains(phrase))
    }

    pub fn contains_all(&self, phrases: &[&str]) -> bool {
        phrases.iter().all(|phrase| self.0.contains(phrase))
    }
}

// Specific synonyms come before general ones within each entry.
const WEATHER_PHRASES: [(Weather, &[&str]); 4] = [
    (
        Weather::Sun,
        &["during strong sunlight", "during harsh sunlight", "in harsh sunlight"],
    ),
    (Weather::Rain, &["during rain"]),
    (Weather::Sandstorm, &["during a sandstorm", "during sandstorm"]),
    (Weather::Snow, &["during snow", "during hail"]),
];

const TERRAIN_PHRASES: [(Terrain, &str); 4] = [
    (Terrain::Electric, "electric terrain"),
    (Terrain::Grassy, "grassy terrain"),
    (Terrain::Misty, "misty terrain"),
    (Terrain::Psychic, "psychic terrain"),
];

/// The weather an effect is conditional on, if the text names one.
pub fn detect_weather_condition(text: &NormalizedText) -> Option<Condition> {
    WEATHER_PHRASES
        .iter()
        .find(|(_, phrases)| text.contains_any(phrases))
        .map(|(weather, _)| Condition::weather(*weather))
}

/// The terrain an effect is conditional on, if the text names one.
pub fn detect_terrain_condition(text: &NormalizedText) -> Option<Condition> {
    TERRAIN_PHRASES
        .iter()
        .find(|(_, phrase)| text.contains(phrase))
        .map(|(terrain, _)| Condition::terrain(*terrain))
}

/// Terrain named anywhere in the text, used by the terrain-setter family.
pub fn mentioned_terrain(text: &NormalizedText) -> Option<Terrain> {
    TERRAIN_PHRASES
        .iter()
        .find(|(_, phrase)| text.contains(phrase))
        .map(|(terrain, _)| *terrain)
}

/// Field conditions detected once per ability and handed to every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SituationalSignals {
    pub weather: Option<Condition>,
    pub terrain: Option<Condition>,
}

impl SituationalSignals {
    pub fn detect(text: &NormalizedText) -> Self {
        Self {
            weather: detect_weather_condition(text),
            terrain: detect_terrain_condition(text),
        }
    }

    /// Weather wins when both kinds of phrase appear.
    pub fn combined(&self) -> Option<Condition> {
        self.weather.clone().or_else(|| self.terrain.clone())
    }
}
