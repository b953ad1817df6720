use crate::core::{CollectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How `get_item_by_id` compares identifiers.
///
/// Parsing, both through `FromStr` and serde, trims whitespace, ignores case and
/// accepts `strict`/`loose` as aliases. Serialization writes the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LookupMode {
    /// Same type, same value.
    #[default]
    Exact,
    /// Numeric text matches the equal number (see `ItemKey::loose_eq`).
    Coercive,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Coercive => "coercive",
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "strict" => Ok(Self::Exact),
            "coercive" | "loose" => Ok(Self::Coercive),
            other => Err(CollectionError::InvalidConfig(format!(
                "unknown lookup mode '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for LookupMode {
    type Error = CollectionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Collection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Logical name, used in log events and snapshots
    pub name: String,

    /// Identifier comparison used by lookups
    pub lookup_mode: LookupMode,

    /// Capacity reserved up front
    pub initial_capacity: usize,
}

impl CollectionConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lookup_mode: LookupMode::Exact,
            initial_capacity: 0,
        }
    }

    /// Set the collection name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the lookup mode
    pub fn lookup_mode(mut self, mode: LookupMode) -> Self {
        self.lookup_mode = mode;
        self
    }

    /// Set the initial capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parse from a JSON document. Missing fields keep their defaults.
    ///
    /// ```
    /// # use item_collection::{CollectionConfig, LookupMode};
    /// let config = CollectionConfig::from_json(r#"{"name": "orders", "lookup_mode": "loose"}"#).unwrap();
    /// assert_eq!(config.name, "orders");
    /// assert_eq!(config.lookup_mode, LookupMode::Coercive);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CollectionError::InvalidConfig(
                "collection name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new("items")
    }
}
