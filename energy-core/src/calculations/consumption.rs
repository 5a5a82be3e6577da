//! Household daily consumption worksheet.
//!
//! This module maps a [`HouseholdProfile`] to a daily energy estimate as a
//! fixed-weight sum: a base load keyed on the bedroom tier, plus a flat
//! increment for each appliance that is present.
//!
//! # Rate Table
//!
//! | Bedroom tier | Base load (kW) |
//! |--------------|----------------|
//! | 1BHK         | 2.4            |
//! | 2BHK         | 3.6            |
//! | 3BHK         | 4.8            |
//!
//! Each appliance present (air conditioner, refrigerator, washing machine)
//! adds 3.0 kW, independent of which appliance it is. The remaining profile
//! fields (name, age, city, area, residence type) never enter the
//! arithmetic; they ride along for presentation only.
//!
//! # Example
//!
//! ```
//! use energy_core::calculations::{ConsumptionRates, ConsumptionWorksheet};
//! use energy_core::models::{BedroomTier, HouseholdProfile, ResidenceType};
//! use rust_decimal_macros::dec;
//!
//! let worksheet = ConsumptionWorksheet::new(ConsumptionRates::default());
//!
//! let profile = HouseholdProfile {
//!     name: "Asha Patel".to_string(),
//!     age: 31,
//!     city: "Ahmedabad".to_string(),
//!     area: "Navrangpura".to_string(),
//!     residence_type: ResidenceType::Flat,
//!     bedroom_tier: BedroomTier::TwoBhk,
//!     has_air_conditioner: true,
//!     has_refrigerator: false,
//!     has_washing_machine: false,
//! };
//!
//! let breakdown = worksheet.calculate(&profile);
//!
//! assert_eq!(breakdown.base_load_kw, dec!(3.6));
//! assert_eq!(breakdown.appliance_load_kw, dec!(3.0));
//! assert_eq!(breakdown.total_kw, dec!(6.6));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_to_tenth;
use crate::models::{BedroomTier, EnergyEstimate, HouseholdProfile};

/// Errors that can occur when validating an overridden rate table.
///
/// The built-in table ([`ConsumptionRates::default`]) is valid by
/// construction; validation exists for tables loaded from user-supplied
/// configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsumptionRatesError {
    /// Every tier's base load must be positive.
    #[error("base load for {tier} must be positive, got {value}")]
    NonPositiveBaseLoad { tier: &'static str, value: Decimal },

    /// The per-appliance increment must be non-negative.
    #[error("per-appliance load must be non-negative, got {0}")]
    NegativeApplianceLoad(Decimal),
}

/// The fixed-weight rate table behind the worksheet.
///
/// A single `per_appliance_kw` field covers all three appliances: the
/// model applies the same increment regardless of appliance type, so the
/// table deliberately has no room for per-appliance wattages.
///
/// # Example
///
/// ```
/// use energy_core::calculations::ConsumptionRates;
/// use rust_decimal_macros::dec;
///
/// let rates = ConsumptionRates::default();
///
/// assert_eq!(rates.one_bhk_base_kw, dec!(2.4));
/// assert_eq!(rates.two_bhk_base_kw, dec!(3.6));
/// assert_eq!(rates.three_bhk_base_kw, dec!(4.8));
/// assert_eq!(rates.per_appliance_kw, dec!(3.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionRates {
    pub one_bhk_base_kw: Decimal,
    pub two_bhk_base_kw: Decimal,
    pub three_bhk_base_kw: Decimal,
    pub per_appliance_kw: Decimal,
}

impl Default for ConsumptionRates {
    fn default() -> Self {
        Self {
            one_bhk_base_kw: Decimal::new(24, 1),   // 2.4
            two_bhk_base_kw: Decimal::new(36, 1),   // 3.6
            three_bhk_base_kw: Decimal::new(48, 1), // 4.8
            per_appliance_kw: Decimal::new(30, 1),  // 3.0
        }
    }
}

impl ConsumptionRates {
    /// Base load for the given bedroom tier.
    pub fn base_load_for(
        &self,
        tier: BedroomTier,
    ) -> Decimal {
        match tier {
            BedroomTier::OneBhk => self.one_bhk_base_kw,
            BedroomTier::TwoBhk => self.two_bhk_base_kw,
            BedroomTier::ThreeBhk => self.three_bhk_base_kw,
        }
    }

    /// Validates the rate table.
    ///
    /// # Errors
    ///
    /// Returns [`ConsumptionRatesError`] if:
    /// - any tier's base load is zero or negative
    /// - the per-appliance load is negative
    ///
    /// # Example
    ///
    /// ```
    /// use energy_core::calculations::{ConsumptionRates, ConsumptionRatesError};
    /// use rust_decimal_macros::dec;
    ///
    /// let rates = ConsumptionRates {
    ///     two_bhk_base_kw: dec!(-1.0),
    ///     ..ConsumptionRates::default()
    /// };
    ///
    /// let result = rates.validate();
    /// assert_eq!(
    ///     result,
    ///     Err(ConsumptionRatesError::NonPositiveBaseLoad {
    ///         tier: "2BHK",
    ///         value: dec!(-1.0),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConsumptionRatesError> {
        for tier in BedroomTier::all() {
            let value = self.base_load_for(*tier);
            if value <= Decimal::ZERO {
                return Err(ConsumptionRatesError::NonPositiveBaseLoad {
                    tier: tier.as_str(),
                    value,
                });
            }
        }
        if self.per_appliance_kw < Decimal::ZERO {
            return Err(ConsumptionRatesError::NegativeApplianceLoad(
                self.per_appliance_kw,
            ));
        }
        Ok(())
    }
}

/// Result of the consumption worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionBreakdown {
    /// Fixed draw attributed to dwelling size.
    pub base_load_kw: Decimal,

    /// Additional draw attributed to the appliances present.
    pub appliance_load_kw: Decimal,

    /// `base_load_kw + appliance_load_kw`.
    pub total_kw: Decimal,
}

/// Calculator for the daily consumption worksheet.
///
/// The calculation is a total function over its input domain: every tier
/// and flag combination is valid, so there is no error path and no state.
/// Calling [`ConsumptionWorksheet::calculate`] twice with the same profile
/// yields the same breakdown.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionWorksheet {
    rates: ConsumptionRates,
}

impl ConsumptionWorksheet {
    /// Creates a new worksheet over the given rate table.
    pub fn new(rates: ConsumptionRates) -> Self {
        Self { rates }
    }

    /// The rate table this worksheet computes with.
    pub fn rates(&self) -> &ConsumptionRates {
        &self.rates
    }

    /// Calculates the daily consumption breakdown for a profile.
    ///
    /// # Example
    ///
    /// ```
    /// use energy_core::calculations::ConsumptionWorksheet;
    /// use energy_core::models::{BedroomTier, HouseholdProfile, ResidenceType};
    /// use rust_decimal_macros::dec;
    ///
    /// let worksheet = ConsumptionWorksheet::default();
    ///
    /// let profile = HouseholdProfile {
    ///     name: "Ravi".to_string(),
    ///     age: 45,
    ///     city: "Surat".to_string(),
    ///     area: "Adajan".to_string(),
    ///     residence_type: ResidenceType::Tenement,
    ///     bedroom_tier: BedroomTier::ThreeBhk,
    ///     has_air_conditioner: true,
    ///     has_refrigerator: true,
    ///     has_washing_machine: true,
    /// };
    ///
    /// let breakdown = worksheet.calculate(&profile);
    ///
    /// assert_eq!(breakdown.total_kw, dec!(13.8));
    /// ```
    pub fn calculate(
        &self,
        profile: &HouseholdProfile,
    ) -> ConsumptionBreakdown {
        let base_load_kw = self.base_load(profile.bedroom_tier);
        let appliance_load_kw = self.appliance_load(profile.appliance_count());
        let total_kw = self.total_load(base_load_kw, appliance_load_kw);

        debug!(
            tier = profile.bedroom_tier.as_str(),
            appliances = profile.appliance_count(),
            %total_kw,
            "consumption worksheet complete"
        );

        ConsumptionBreakdown {
            base_load_kw,
            appliance_load_kw,
            total_kw,
        }
    }

    /// Calculates the breakdown and wraps it into an [`EnergyEstimate`],
    /// carrying the profile through verbatim. The display timestamp is left
    /// unset for the presenter to attach.
    pub fn estimate(
        &self,
        profile: HouseholdProfile,
    ) -> EnergyEstimate {
        let breakdown = self.calculate(&profile);
        EnergyEstimate {
            profile,
            base_load_kw: breakdown.base_load_kw,
            appliance_load_kw: breakdown.appliance_load_kw,
            total_kw: breakdown.total_kw,
            computed_at: None,
        }
    }

    /// Base load keyed on the bedroom tier.
    fn base_load(
        &self,
        tier: BedroomTier,
    ) -> Decimal {
        round_to_tenth(self.rates.base_load_for(tier))
    }

    /// Flat increment for each appliance present.
    fn appliance_load(
        &self,
        count: u32,
    ) -> Decimal {
        round_to_tenth(self.rates.per_appliance_kw * Decimal::from(count))
    }

    /// Sum of the base and appliance loads.
    fn total_load(
        &self,
        base_load_kw: Decimal,
        appliance_load_kw: Decimal,
    ) -> Decimal {
        round_to_tenth(base_load_kw + appliance_load_kw)
    }
}
