//! Text presentation of an energy estimate.
//!
//! Everything here is display only: the numbers arrive fully computed and
//! nothing feeds back into the calculator. The layout runs top to bottom:
//! profile card, per-appliance metrics, total headline, breakdown shares,
//! then the projection chart and costs.

use std::fmt;

use energy_core::calculations::common::round_to_tenth;
use energy_core::{ConsumptionRates, EnergyEstimate, ProjectionTable};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Column width of the projection bars.
const BAR_WIDTH: usize = 32;

/// Renders an [`EnergyEstimate`] with its projection as a plain-text block.
pub struct Report<'a> {
    estimate: &'a EnergyEstimate,
    rates: &'a ConsumptionRates,
    projection: &'a ProjectionTable,
}

impl<'a> Report<'a> {
    pub fn new(
        estimate: &'a EnergyEstimate,
        rates: &'a ConsumptionRates,
        projection: &'a ProjectionTable,
    ) -> Self {
        Self {
            estimate,
            rates,
            projection,
        }
    }

    fn appliance_rows(&self) -> [(&'static str, bool); 3] {
        let profile = &self.estimate.profile;
        [
            ("Air Conditioner", profile.has_air_conditioner),
            ("Refrigerator", profile.has_refrigerator),
            ("Washing Machine", profile.has_washing_machine),
        ]
    }

    /// Share of the total, in percent at one decimal place.
    fn share_percent(&self, part: Decimal) -> Decimal {
        if self.estimate.total_kw.is_zero() {
            return Decimal::ZERO;
        }
        round_to_tenth(part * Decimal::from(100) / self.estimate.total_kw)
    }

    /// Bar scaled so the largest period fills the full width. Non-zero
    /// values always get at least one mark.
    fn bar(&self, consumption_kw: Decimal, max_kw: Decimal) -> String {
        if max_kw.is_zero() || consumption_kw.is_zero() {
            return String::new();
        }
        let width = (consumption_kw * Decimal::from(BAR_WIDTH as u64) / max_kw)
            .round()
            .to_usize()
            .unwrap_or(0);
        "#".repeat(width.clamp(1, BAR_WIDTH))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = self.estimate;
        let profile = &estimate.profile;

        writeln!(f, "Energy Consumption Estimate")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Profile")?;
        writeln!(f, "  Name:       {}", profile.name)?;
        writeln!(f, "  Age:        {}", profile.age)?;
        writeln!(f, "  Location:   {}, {}", profile.city, profile.area)?;
        writeln!(
            f,
            "  Home:       {} {}",
            profile.bedroom_tier.as_str(),
            profile.residence_type.as_str()
        )?;
        writeln!(f)?;

        writeln!(f, "Consumption")?;
        writeln!(
            f,
            "  {:<18} {:>5.1} kW",
            "Base load:", estimate.base_load_kw
        )?;
        for (label, present) in self.appliance_rows() {
            let load = if present {
                self.rates.per_appliance_kw
            } else {
                Decimal::ZERO
            };
            let status = if present { "Active" } else { "Inactive" };
            writeln!(f, "  {:<18} {:>5.1} kW  ({status})", format!("{label}:"), load)?;
        }
        writeln!(f)?;
        writeln!(f, "  Total daily estimate: {:.1} kW", estimate.total_kw)?;
        writeln!(f)?;

        writeln!(f, "Breakdown")?;
        writeln!(
            f,
            "  Base load   {:>5.1}%",
            self.share_percent(estimate.base_load_kw)
        )?;
        writeln!(
            f,
            "  Appliances  {:>5.1}%",
            self.share_percent(estimate.appliance_load_kw)
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "Projection (unit price {}/kWh)",
            self.projection.unit_price_per_kwh()
        )?;
        let rows = self.projection.rows();
        let max_kw = rows
            .last()
            .map(|row| row.consumption_kw)
            .unwrap_or(Decimal::ZERO);
        for row in &rows {
            writeln!(
                f,
                "  {:<8} {:<width$}  {:>9.1} kW  {:>12.2}",
                row.period.label(),
                self.bar(row.consumption_kw, max_kw),
                row.consumption_kw,
                row.estimated_cost,
                width = BAR_WIDTH,
            )?;
        }

        if let Some(at) = estimate.computed_at {
            writeln!(f)?;
            writeln!(f, "Computed at {}", at.format("%Y-%m-%d %H:%M:%S"))?;
        }

        Ok(())
    }
}
