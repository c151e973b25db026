use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Please fill in all fields before submitting: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Obligation title {0:?} is already taken")]
    DuplicateTitle(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObligationLevel {
    ComponentObligation,
    OrganisationObligation,
    ProjectObligation,
    LicenseObligation,
}

impl ObligationLevel {
    pub const ALL: [ObligationLevel; 4] = [
        ObligationLevel::ComponentObligation,
        ObligationLevel::OrganisationObligation,
        ObligationLevel::ProjectObligation,
        ObligationLevel::LicenseObligation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ObligationLevel::ComponentObligation => "Component Obligation",
            ObligationLevel::OrganisationObligation => "Organisation Obligation",
            ObligationLevel::ProjectObligation => "Project Obligation",
            ObligationLevel::LicenseObligation => "License Obligation",
        }
    }
}

impl fmt::Display for ObligationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObligationType {
    Permission,
    Risk,
    Exception,
    Restriction,
    Obligation,
}

impl ObligationType {
    pub const ALL: [ObligationType; 5] = [
        ObligationType::Permission,
        ObligationType::Risk,
        ObligationType::Exception,
        ObligationType::Restriction,
        ObligationType::Obligation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ObligationType::Permission => "Permission",
            ObligationType::Risk => "Risk",
            ObligationType::Exception => "Exception",
            ObligationType::Restriction => "Restriction",
            ObligationType::Obligation => "Obligation",
        }
    }
}

impl fmt::Display for ObligationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An obligation record as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub obligation_level: Option<ObligationLevel>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub obligation_type: Option<ObligationType>,
}

// Unset enums arrive as "" from the backend.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(other) => T::deserialize(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl ObligationDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Every required field must be present and not blank.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.text.trim().is_empty() {
            missing.push("text");
        }
        if self.obligation_level.is_none() {
            missing.push("obligationLevel");
        }
        if self.obligation_type.is_none() {
            missing.push("obligationType");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DocumentError::MissingFields(missing))
        }
    }

    pub fn preview(&self) -> String {
        format!("{}\n{}", self.title, self.text)
    }
}
