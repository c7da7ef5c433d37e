use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::DashboardError;

/// Maintenance indicator attached to every record.
///
/// Anything the feed sends that is not one of the three known colours is
/// folded into `Unknown` instead of failing the record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Green,
    Yellow,
    Red,
    #[default]
    Unknown,
}

impl Health {
    pub fn from_feed(value: Option<&str>) -> Self {
        match value {
            Some("green") => Health::Green,
            Some("yellow") => Health::Yellow,
            Some("red") => Health::Red,
            _ => Health::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Health::Green => "green",
            Health::Yellow => "yellow",
            Health::Red => "red",
            Health::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Health::Green => "Healthy",
            Health::Yellow => "Needs attention",
            Health::Red => "Stale",
            Health::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Health {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Health::Green),
            "yellow" => Ok(Health::Yellow),
            "red" => Ok(Health::Red),
            "unknown" => Ok(Health::Unknown),
            other => Err(DashboardError::InvalidHealth(other.to_string())),
        }
    }
}
