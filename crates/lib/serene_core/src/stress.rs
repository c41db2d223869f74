//! Stress information record: the user's self-reported stress state.
//!
//! Scalar fields are overwritten wholesale on update. List fields are
//! replaced (never merged) when a non-empty value is supplied; a single
//! string where a list is expected becomes a one-element list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Confirmation returned by [`StressInfo::update`].
pub const STRESS_INFO_UPDATED: &str = "Stress information updated successfully!";

/// Self-reported stress level.
///
/// The four known levels are what the classifier extracts from messages.
/// Explicit updates accept any non-empty text, kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Severe,
    Other(String),
}

impl StressLevel {
    pub fn as_str(&self) -> &str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::Severe => "severe",
            StressLevel::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for StressLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => StressLevel::Low,
            "moderate" => StressLevel::Moderate,
            "high" => StressLevel::High,
            "severe" => StressLevel::Severe,
            _ => StressLevel::Other(value),
        }
    }
}

impl From<&str> for StressLevel {
    fn from(value: &str) -> Self {
        StressLevel::from(value.to_string())
    }
}

impl From<StressLevel> for String {
    fn from(level: StressLevel) -> Self {
        match level {
            StressLevel::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A list-typed update value: either one string or a sequence of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl FieldValue {
    /// Whether the value should overwrite the stored list.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Scalar(value) => !value.is_empty(),
            FieldValue::Sequence(values) => !values.is_empty(),
        }
    }

    /// Resolve into the canonical ordered sequence.
    pub fn into_sequence(self) -> Vec<String> {
        match self {
            FieldValue::Scalar(value) => vec![value],
            FieldValue::Sequence(values) => values,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Sequence(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Sequence(values.into_iter().map(str::to_string).collect())
    }
}

/// Stress state of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressInfo {
    pub stress_level: Option<StressLevel>,
    pub stress_triggers: Vec<String>,
    pub coping_mechanisms: Vec<String>,
    pub sleep_quality: Option<String>,
    pub physical_symptoms: Vec<String>,
    pub emotional_symptoms: Vec<String>,
}

/// Partial update for [`StressInfo`]. Omitted or empty fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StressInfoUpdate {
    pub stress_level: Option<String>,
    #[serde(alias = "stress_triggers")]
    pub triggers: Option<FieldValue>,
    pub coping_mechanisms: Option<FieldValue>,
    pub sleep_quality: Option<String>,
    pub physical_symptoms: Option<FieldValue>,
    pub emotional_symptoms: Option<FieldValue>,
}

impl StressInfo {
    /// Apply a partial update and return the confirmation message.
    pub fn update(&mut self, update: StressInfoUpdate) -> &'static str {
        if let Some(level) = update.stress_level.filter(|v| !v.is_empty()) {
            self.stress_level = Some(StressLevel::from(level));
        }
        replace_list(&mut self.stress_triggers, update.triggers);
        replace_list(&mut self.coping_mechanisms, update.coping_mechanisms);
        if let Some(quality) = update.sleep_quality.filter(|v| !v.is_empty()) {
            self.sleep_quality = Some(quality);
        }
        replace_list(&mut self.physical_symptoms, update.physical_symptoms);
        replace_list(&mut self.emotional_symptoms, update.emotional_symptoms);
        STRESS_INFO_UPDATED
    }

    /// Overwrite only the stress level.
    pub fn set_level(&mut self, level: StressLevel) {
        self.stress_level = Some(level);
    }
}

fn replace_list(target: &mut Vec<String>, value: Option<FieldValue>) {
    if let Some(value) = value.filter(FieldValue::is_truthy) {
        *target = value.into_sequence();
    }
}
