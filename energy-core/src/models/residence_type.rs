use serde::{Deserialize, Serialize};

/// Display metadata only; the residence type never enters the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Flat,
    Tenement,
}

impl ResidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Tenement => "Tenement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Flat" => Some(Self::Flat),
            "Tenement" => Some(Self::Tenement),
            _ => None,
        }
    }

    pub fn all() -> &'static [ResidenceType] {
        &[Self::Flat, Self::Tenement]
    }
}
