use crate::error::WynnError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// How players are keyed in guild and online-player responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Identifier {
    #[default]
    Username,
    Uuid,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Username => write!(f, "username"),
            Identifier::Uuid => write!(f, "uuid"),
        }
    }
}

impl FromStr for Identifier {
    type Err = WynnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "username" | "name" => Ok(Identifier::Username),
            "uuid" => Ok(Identifier::Uuid),
            other => Err(WynnError::InvalidParameters(format!(
                "unknown identifier '{}', expected username or uuid",
                other
            ))),
        }
    }
}

// Base (non-donor) classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassName {
    Warrior,
    Archer,
    Mage,
    Assassin,
    Shaman,
}

impl ClassName {
    pub const ALL: [ClassName; 5] = [
        ClassName::Warrior,
        ClassName::Archer,
        ClassName::Mage,
        ClassName::Assassin,
        ClassName::Shaman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::Warrior => "warrior",
            ClassName::Archer => "archer",
            ClassName::Mage => "mage",
            ClassName::Assassin => "assassin",
            ClassName::Shaman => "shaman",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassName {
    type Err = WynnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ClassName::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == lower)
            .ok_or_else(|| {
                WynnError::InvalidParameters(format!("unknown class '{}'", s))
            })
    }
}

/// Server filter for the online-player list: `"WC1"`, `1`, or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerSelector {
    Name(String),
    Number(u32),
    List(Vec<ServerSelector>),
}

impl fmt::Display for ServerSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerSelector::Name(name) => f.write_str(name),
            ServerSelector::Number(n) => write!(f, "{}", n),
            ServerSelector::List(items) => {
                let joined: Vec<String> = items.iter().map(|s| s.to_string()).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

impl From<&str> for ServerSelector {
    fn from(name: &str) -> Self {
        ServerSelector::Name(name.to_string())
    }
}

impl From<String> for ServerSelector {
    fn from(name: String) -> Self {
        ServerSelector::Name(name)
    }
}

impl From<u32> for ServerSelector {
    fn from(n: u32) -> Self {
        ServerSelector::Number(n)
    }
}

impl<T: Into<ServerSelector>> From<Vec<T>> for ServerSelector {
    fn from(items: Vec<T>) -> Self {
        ServerSelector::List(items.into_iter().map(Into::into).collect())
    }
}

/// A single filter value or a list of them. Serialized as a JSON scalar or
/// array to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Number(i64),
    List(Vec<FilterValue>),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(n.into())
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(items: Vec<T>) -> Self {
        FilterValue::List(items.into_iter().map(Into::into).collect())
    }
}

// Item search request body. Unset filters are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    pub query: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_range: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professions: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifications: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_ids: Option<FilterValue>,
    /// Sent as the `fullResult` query marker, never in the body.
    #[serde(skip)]
    pub full_result: bool,
}

impl ItemQuery {
    pub fn new(query: impl Into<String>) -> Self {
        ItemQuery {
            query: query.into(),
            ..ItemQuery::default()
        }
    }

    pub fn item_type(mut self, value: impl Into<FilterValue>) -> Self {
        self.item_type = Some(value.into());
        self
    }

    pub fn tier(mut self, value: impl Into<FilterValue>) -> Self {
        self.tier = Some(value.into());
        self
    }

    pub fn attack_speed(mut self, value: impl Into<FilterValue>) -> Self {
        self.attack_speed = Some(value.into());
        self
    }

    pub fn level_range(mut self, value: impl Into<FilterValue>) -> Self {
        self.level_range = Some(value.into());
        self
    }

    pub fn professions(mut self, value: impl Into<FilterValue>) -> Self {
        self.professions = Some(value.into());
        self
    }

    pub fn identifications(mut self, value: impl Into<FilterValue>) -> Self {
        self.identifications = Some(value.into());
        self
    }

    pub fn major_ids(mut self, value: impl Into<FilterValue>) -> Self {
        self.major_ids = Some(value.into());
        self
    }

    pub fn full_result(mut self, enabled: bool) -> Self {
        self.full_result = enabled;
        self
    }
}
