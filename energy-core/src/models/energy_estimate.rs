use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HouseholdProfile;

/// A completed estimate: the profile it was computed from, verbatim, plus
/// the calculated loads. Created fresh per invocation; nothing here is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    // User-provided values, preserved for presentation
    pub profile: HouseholdProfile,

    // Calculated values
    pub base_load_kw: Decimal,
    pub appliance_load_kw: Decimal,
    pub total_kw: Decimal,

    /// Display-only timestamp attached by the presenter after the fact;
    /// never an input to the calculation.
    pub computed_at: Option<DateTime<Utc>>,
}

impl EnergyEstimate {
    pub fn with_timestamp(
        mut self,
        at: DateTime<Utc>,
    ) -> Self {
        self.computed_at = Some(at);
        self
    }
}
