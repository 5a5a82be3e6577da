//! Consumption projections derived from a daily total.
//!
//! The worksheet produces a single daily figure; everything longer-range is
//! a scalar multiple of it. Multipliers are calendar-naive on purpose:
//! 7 days to a week, 30 to a month, 365 to a year. Each period is priced at
//! a flat unit rate; the constant is currency-agnostic and the presenter
//! decides what symbol, if any, to print next to it.
//!
//! # Example
//!
//! ```
//! use energy_core::calculations::{ProjectionPeriod, ProjectionTable};
//! use rust_decimal_macros::dec;
//!
//! let table = ProjectionTable::with_default_price(dec!(10.0));
//!
//! assert_eq!(table.consumption_for(ProjectionPeriod::Monthly), dec!(300.0));
//! assert_eq!(table.cost_for(ProjectionPeriod::Monthly), dec!(1500.0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Reporting period for a consumption projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ProjectionPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Days in the period, as applied to the daily total.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Daily => Decimal::ONE,
            Self::Weekly => Decimal::from(7),
            Self::Monthly => Decimal::from(30),
            Self::Yearly => Decimal::from(365),
        }
    }

    /// All periods in display order.
    pub fn all() -> &'static [ProjectionPeriod] {
        &[Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly]
    }
}

/// One period of a projection: scaled consumption and its estimated cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub period: ProjectionPeriod,
    pub consumption_kw: Decimal,
    pub estimated_cost: Decimal,
}

/// Scales a daily consumption total across reporting periods and prices
/// each period at a flat unit rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionTable {
    total_kw: Decimal,
    unit_price_per_kwh: Decimal,
}

impl ProjectionTable {
    /// Flat price applied per kWh when no override is supplied.
    pub fn default_unit_price() -> Decimal {
        Decimal::from(5)
    }

    pub fn new(
        total_kw: Decimal,
        unit_price_per_kwh: Decimal,
    ) -> Self {
        Self {
            total_kw,
            unit_price_per_kwh,
        }
    }

    pub fn with_default_price(total_kw: Decimal) -> Self {
        Self::new(total_kw, Self::default_unit_price())
    }

    pub fn unit_price_per_kwh(&self) -> Decimal {
        self.unit_price_per_kwh
    }

    /// Consumption over the period: the daily total times the period
    /// multiplier, exact.
    pub fn consumption_for(
        &self,
        period: ProjectionPeriod,
    ) -> Decimal {
        self.total_kw * period.multiplier()
    }

    /// Estimated cost over the period, rounded to two decimal places.
    pub fn cost_for(
        &self,
        period: ProjectionPeriod,
    ) -> Decimal {
        round_half_up(self.consumption_for(period) * self.unit_price_per_kwh)
    }

    pub fn row(
        &self,
        period: ProjectionPeriod,
    ) -> ProjectionRow {
        ProjectionRow {
            period,
            consumption_kw: self.consumption_for(period),
            estimated_cost: self.cost_for(period),
        }
    }

    /// All four periods in display order.
    pub fn rows(&self) -> Vec<ProjectionRow> {
        ProjectionPeriod::all()
            .iter()
            .map(|period| self.row(*period))
            .collect()
    }
}
