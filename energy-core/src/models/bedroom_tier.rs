use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedroomTier {
    OneBhk,
    TwoBhk,
    ThreeBhk,
}

impl BedroomTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
            Self::ThreeBhk => "3BHK",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1BHK" => Some(Self::OneBhk),
            "2BHK" => Some(Self::TwoBhk),
            "3BHK" => Some(Self::ThreeBhk),
            _ => None,
        }
    }

    pub fn all() -> &'static [BedroomTier] {
        &[Self::OneBhk, Self::TwoBhk, Self::ThreeBhk]
    }
}
