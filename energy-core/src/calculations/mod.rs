//! Calculation modules for the household energy estimator.
//!
//! The consumption worksheet turns a household profile into a daily load
//! breakdown; the projection table scales that total across reporting
//! periods and prices it.

pub mod common;
pub mod consumption;
pub mod projection;

pub use consumption::{
    ConsumptionBreakdown, ConsumptionRates, ConsumptionRatesError, ConsumptionWorksheet,
};
pub use projection::{ProjectionPeriod, ProjectionRow, ProjectionTable};
