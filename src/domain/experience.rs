use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Iniciante,
    Basico,
    Intermediario,
    Avancado,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::Iniciante,
        Experience::Basico,
        Experience::Intermediario,
        Experience::Avancado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Iniciante => "iniciante",
            Experience::Basico => "basico",
            Experience::Intermediario => "intermediario",
            Experience::Avancado => "avancado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Experience::Iniciante => "Iniciante",
            Experience::Basico => "Básico",
            Experience::Intermediario => "Intermediário",
            Experience::Avancado => "Avançado",
        }
    }

    /// Parses a select value, where the empty string means "not chosen".
    pub fn parse_optional(
        value: &str,
    ) -> Result<Option<Experience>, ValidationError> {
        match value.trim() {
            "" => Ok(None),
            value => value.parse().map(Some),
        }
    }
}

impl FromStr for Experience {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Experience::ALL
            .into_iter()
            .find(|experience| experience.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(format!("Unknown experience level: {s}"))
            })
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Competition division picked on an individual tournament entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentCategory {
    Iniciante,
    Intermediario,
    Avancado,
    Elite,
}

impl TournamentCategory {
    pub const ALL: [TournamentCategory; 4] = [
        TournamentCategory::Iniciante,
        TournamentCategory::Intermediario,
        TournamentCategory::Avancado,
        TournamentCategory::Elite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentCategory::Iniciante => "iniciante",
            TournamentCategory::Intermediario => "intermediario",
            TournamentCategory::Avancado => "avancado",
            TournamentCategory::Elite => "elite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TournamentCategory::Iniciante => "Iniciante",
            TournamentCategory::Intermediario => "Intermediário",
            TournamentCategory::Avancado => "Avançado",
            TournamentCategory::Elite => "Elite",
        }
    }

    pub fn parse_optional(
        value: &str,
    ) -> Result<Option<TournamentCategory>, ValidationError> {
        match value.trim() {
            "" => Ok(None),
            value => TournamentCategory::ALL
                .into_iter()
                .find(|category| category.as_str() == value)
                .map(Some)
                .ok_or_else(|| {
                    ValidationError::new(format!(
                        "Unknown tournament category: {value}"
                    ))
                }),
        }
    }
}
