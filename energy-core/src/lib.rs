pub mod calculations;
pub mod models;

pub use calculations::{
    ConsumptionBreakdown, ConsumptionRates, ConsumptionRatesError, ConsumptionWorksheet,
    ProjectionPeriod, ProjectionRow, ProjectionTable,
};
pub use models::*;
