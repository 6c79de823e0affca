//! Health Value Object
//!
//! Triage state of a registered victim. Critical victims always receive at
//! least one medical unit per distribution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Health of a victim, stored lower-cased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    #[default]
    Normal,
    Critical,
}

impl Health {
    pub fn as_str(&self) -> &'static str {
        match self {
            Health::Normal => "normal",
            Health::Critical => "critical",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Health::Critical)
    }

    /// Medical units a distribution actually consumes for this victim.
    pub fn required_medical(&self, requested: u32) -> u32 {
        match self {
            Health::Critical => requested.max(1),
            Health::Normal => requested,
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized health text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown health '{0}' (expected normal or critical)")]
pub struct UnknownHealth(pub String);

impl FromStr for Health {
    type Err = UnknownHealth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Health::Normal),
            "critical" => Ok(Health::Critical),
            _ => Err(UnknownHealth(s.to_string())),
        }
    }
}
