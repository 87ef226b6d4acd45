use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::core::{Dated, Phase};

/// One measured phase duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    #[serde(rename = "_id", alias = "id", deserialize_with = "string_or_number")]
    pub id: String,
    /// Phase label as stored. Labels outside the three phases are kept so
    /// the record can still be listed and deleted.
    #[serde(rename = "type", default)]
    pub phase: PhaseLabel,
    /// Seconds, 2 decimals.
    #[serde(deserialize_with = "number_or_string")]
    pub duration: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The `type` of a saved timing.
///
/// The Store accepts any label; only the exact phase names count toward
/// stats and sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhaseLabel {
    Known(Phase),
    Other(String),
}

impl PhaseLabel {
    /// The phase, if the label is one of the three phase names.
    #[must_use]
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::Known(phase) => Some(*phase),
            Self::Other(_) => None,
        }
    }

    /// The label as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(phase) => phase.as_str(),
            Self::Other(label) => label,
        }
    }
}

impl Default for PhaseLabel {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Phase> for PhaseLabel {
    fn from(phase: Phase) -> Self {
        Self::Known(phase)
    }
}

impl PartialEq<Phase> for PhaseLabel {
    fn eq(&self, other: &Phase) -> bool {
        self.phase() == Some(*other)
    }
}

impl std::fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconciled inhale/hold/exhale triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreathSession {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub inhale: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub hold: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub exhale: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Free-form personal details. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub height: String,
    #[serde(deserialize_with = "lenient_string")]
    pub weight: String,
    #[serde(deserialize_with = "lenient_string")]
    pub medical: String,
    #[serde(deserialize_with = "lenient_string")]
    pub notes: String,
    /// Set by the Store on save; never sent back.
    #[serde(skip_serializing)]
    pub updated: Option<String>,
}

impl Profile {
    /// Labeled fields in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Name", &self.full_name),
            ("Age", &self.age),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Height", &self.height),
            ("Weight", &self.weight),
            ("Medical", &self.medical),
            ("Notes", &self.notes),
        ]
    }

    /// True when every field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.trim().is_empty())
    }
}

/// Body of a create-timing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTiming {
    #[serde(rename = "type")]
    pub phase: Phase,
    /// Seconds as a 2-decimal string.
    pub duration: String,
}

/// Body of a create-session request. Values are 2-decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSession {
    pub inhale: String,
    pub hold: String,
    pub exhale: String,
}

/// Response from creating a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub id: Option<String>,
}

/// Store liveness report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timings_count: usize,
    #[serde(default)]
    pub sessions_count: usize,
}

impl Dated for TimingRecord {
    fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl Dated for BreathSession {
    fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn date(&self) -> &str {
        &self.date
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
    Null,
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom("number out of range")),
        Scalar::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid number '{s}': {e}"))),
        Scalar::Null => Err(de::Error::custom("expected a number, found null")),
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    optional_string_or_number(deserializer)?
        .ok_or_else(|| de::Error::custom("expected an id, found null"))
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Number(n) => Some(n.to_string()),
        Scalar::Text(s) => Some(s),
        Scalar::Null => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_string_or_number(deserializer)?.unwrap_or_default())
}
