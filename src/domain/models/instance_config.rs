//! Instance configuration domain model.
//!
//! A [`ConfigItem`] is the in-memory descriptor built from the environment
//! on every run; an [`InstanceConfiguration`] is the persisted record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grouping tag on stored configuration.
///
/// The seeder never interprets the category; it is carried through to the
/// store for the surrounding system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConfigCategory {
    Authentication,
    Google,
    Github,
    Oidc,
    Smtp,
    Openai,
    Unsplash,
    /// A category written by something other than the seeder.
    Other(String),
}

impl ConfigCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Authentication => "AUTHENTICATION",
            Self::Google => "GOOGLE",
            Self::Github => "GITHUB",
            Self::Oidc => "OIDC",
            Self::Smtp => "SMTP",
            Self::Openai => "OPENAI",
            Self::Unsplash => "UNSPLASH",
            Self::Other(other) => other,
        }
    }

    /// Parse a stored category label. Unknown labels are preserved.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "AUTHENTICATION" => Self::Authentication,
            "GOOGLE" => Self::Google,
            "GITHUB" => Self::Github,
            "OIDC" => Self::Oidc,
            "SMTP" => Self::Smtp,
            "OPENAI" => Self::Openai,
            "UNSPLASH" => Self::Unsplash,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl fmt::Display for ConfigCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ConfigCategory {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ConfigCategory> for String {
    fn from(category: ConfigCategory) -> Self {
        category.as_str().to_string()
    }
}

/// A configuration item awaiting seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    /// Stable identity across runs
    pub key: String,
    /// Resolved value; `None` means unset
    pub value: Option<String>,
    pub category: ConfigCategory,
    /// Whether the value must be stored as ciphertext
    pub is_encrypted: bool,
}

impl ConfigItem {
    pub fn new(
        key: impl Into<String>,
        value: Option<String>,
        category: ConfigCategory,
        is_encrypted: bool,
    ) -> Self {
        Self {
            key: key.into(),
            value,
            category,
            is_encrypted,
        }
    }

    /// True when the value is absent or the empty string.
    pub fn is_blank(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }
}

/// A persisted configuration record.
///
/// `value` holds ciphertext when `is_encrypted` is set, except for blank
/// values which are stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfiguration {
    pub id: Uuid,
    pub key: String,
    pub value: Option<String>,
    pub category: ConfigCategory,
    pub is_encrypted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InstanceConfiguration {
    pub fn new(
        key: impl Into<String>,
        value: Option<String>,
        category: ConfigCategory,
        is_encrypted: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            key: key.into(),
            value,
            category,
            is_encrypted,
            created_at: now,
            updated_at: now,
        }
    }
}
