//! CSV export of the projection table.
//!
//! One row per reporting period, mirroring the on-screen cost table:
//!
//! ```csv
//! period,consumption_kw,estimated_cost
//! Daily,10.0,50.00
//! Weekly,70.0,350.00
//! Monthly,300.0,1500.00
//! Yearly,3650.0,18250.00
//! ```
//!
//! Consumption is written at one decimal place, cost at two.

use std::io::Write;
use std::path::Path;

use energy_core::ProjectionTable;

/// Writes the projection table as CSV to any writer.
///
/// # Errors
///
/// Returns a [`csv::Error`] when the underlying writer fails.
pub fn write_csv<W: Write>(writer: W, projection: &ProjectionTable) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(["period", "consumption_kw", "estimated_cost"])?;
    for row in projection.rows() {
        out.write_record([
            row.period.label().to_string(),
            format!("{:.1}", row.consumption_kw),
            format!("{:.2}", row.estimated_cost),
        ])?;
    }
    out.flush()?;

    Ok(())
}

/// Convenience wrapper: create `path` and delegate to [`write_csv`].
pub fn write_to_file(path: &Path, projection: &ProjectionTable) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("cannot create '{}': {e}", path.display()))?;
    write_csv(file, projection)?;
    Ok(())
}
