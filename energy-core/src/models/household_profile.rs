use serde::{Deserialize, Serialize};

use crate::models::{BedroomTier, ResidenceType};

/// User-entered household attributes.
///
/// Only `bedroom_tier` and the three appliance flags participate in the
/// consumption arithmetic; the remaining fields are carried through to the
/// result record verbatim for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub name: String,
    pub age: u8,
    pub city: String,
    pub area: String,
    pub residence_type: ResidenceType,

    // Inputs to the calculation
    pub bedroom_tier: BedroomTier,
    pub has_air_conditioner: bool,
    pub has_refrigerator: bool,
    pub has_washing_machine: bool,
}

impl HouseholdProfile {
    /// Number of appliance flags that are set.
    pub fn appliance_count(&self) -> u32 {
        u32::from(self.has_air_conditioner)
            + u32::from(self.has_refrigerator)
            + u32::from(self.has_washing_machine)
    }
}
