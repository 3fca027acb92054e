use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

/// Wire code for an item that could not be assessed.
pub const UNSCOREABLE_CODE: &str = "UN";

/// Breakdown text shown for an item that could not be assessed.
pub const UNSCOREABLE_DISPLAY: &str = "No evaluable";

/// A single response to a scale item.
///
/// Serialized as a bare number (`3`) or the string `"UN"`. Numeric strings
/// (`"3"`) are accepted on input since HTML form controls submit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseValue {
    Points(u32),
    /// Not testable (amputation, intubation, ...). Contributes 0.
    Unscoreable,
}

impl ResponseValue {
    /// Points this response adds to the total.
    pub fn points(self) -> u32 {
        match self {
            ResponseValue::Points(points) => points,
            ResponseValue::Unscoreable => 0,
        }
    }

    pub fn is_scoreable(self) -> bool {
        matches!(self, ResponseValue::Points(_))
    }

    /// Text used in a score breakdown.
    pub fn display(self) -> String {
        match self {
            ResponseValue::Points(points) => points.to_string(),
            ResponseValue::Unscoreable => UNSCOREABLE_DISPLAY.to_string(),
        }
    }
}

impl From<u32> for ResponseValue {
    fn from(points: u32) -> Self {
        ResponseValue::Points(points)
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Points(points) => write!(f, "{points}"),
            ResponseValue::Unscoreable => f.write_str(UNSCOREABLE_CODE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid response value '{0}': expected a non-negative integer or \"UN\"")]
pub struct ParseResponseError(String);

impl FromStr for ResponseValue {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNSCOREABLE_CODE {
            return Ok(ResponseValue::Unscoreable);
        }
        s.parse::<u32>()
            .map(ResponseValue::Points)
            .map_err(|_| ParseResponseError(s.to_string()))
    }
}

impl Serialize for ResponseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseValue::Points(points) => serializer.serialize_u32(*points),
            ResponseValue::Unscoreable => serializer.serialize_str(UNSCOREABLE_CODE),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponseValueVisitor;

        impl Visitor<'_> for ResponseValueVisitor {
            type Value = ResponseValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or \"UN\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(ResponseValue::Points)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(ResponseValue::Points)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(ResponseValueVisitor)
    }
}

/// One submission for a scale: item id to selected response.
///
/// Deserializing rejects an item id that appears more than once, so a
/// submission never silently keeps only the last of two answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, ResponseValue>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for ResponseSet {
    type Target = BTreeMap<String, ResponseValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ResponseSet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, ResponseValue)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (String, ResponseValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(String, ResponseValue); N]> for ResponseSet {
    fn from(entries: [(String, ResponseValue); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}

impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponseSetVisitor;

        impl<'de> Visitor<'de> for ResponseSetVisitor {
            type Value = ResponseSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of item ids to responses")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut responses = BTreeMap::new();
                while let Some((item_id, value)) = map.next_entry::<String, ResponseValue>()? {
                    if responses.contains_key(&item_id) {
                        return Err(de::Error::custom(format!(
                            "duplicate response for item '{item_id}'"
                        )));
                    }
                    responses.insert(item_id, value);
                }
                Ok(ResponseSet(responses))
            }
        }

        deserializer.deserialize_map(ResponseSetVisitor)
    }
}

/// A selectable answer for an item, as shown on an input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    #[ts(type = "number | \"UN\"")]
    pub value: ResponseValue,
    pub description: String,
}

/// One clinical observation slot within a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDefinition {
    pub id: String,
    pub label: String,
    pub options: Vec<ResponseOption>,
}

impl ItemDefinition {
    pub fn allowed_values(&self) -> impl Iterator<Item = ResponseValue> + '_ {
        self.options.iter().map(|o| o.value)
    }

    pub fn allows(&self, value: ResponseValue) -> bool {
        self.allowed_values().any(|v| v == value)
    }

    pub fn accepts_unscoreable(&self) -> bool {
        self.allows(ResponseValue::Unscoreable)
    }

    /// Largest point value this item can contribute.
    pub fn max_points(&self) -> u32 {
        self.allowed_values().map(ResponseValue::points).max().unwrap_or(0)
    }
}

/// A contiguous score range mapped to a severity label.
///
/// `max_score: None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationBand {
    pub min_score: u32,
    pub max_score: Option<u32>,
    pub label: String,
}

impl InterpretationBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min_score && self.max_score.is_none_or(|max| score <= max)
    }
}

/// A clinical scale: ordered items plus the table that interprets totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<ItemDefinition>,
    pub interpretation_bands: Vec<InterpretationBand>,
}

impl ScaleDefinition {
    pub fn item(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Sum of every item's largest point value.
    pub fn max_possible_score(&self) -> u32 {
        self.items.iter().map(ItemDefinition::max_points).sum()
    }

    /// The band containing `score`, if any.
    pub fn interpret(&self, score: u32) -> Option<&InterpretationBand> {
        self.interpretation_bands.iter().find(|b| b.contains(score))
    }
}

/// One line of an itemized result, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakdownEntry {
    pub item_id: String,
    pub item_label: String,
    #[ts(type = "number | \"UN\"")]
    pub response: ResponseValue,
    pub response_display: String,
}

/// Outcome of scoring a complete submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub scale_id: String,
    pub scale_name: String,
    pub total_score: u32,
    pub max_possible_score: u32,
    pub interpretation: String,
    pub breakdown: Vec<BreakdownEntry>,
}
