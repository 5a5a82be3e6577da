//! Loader for the optional rates override file.
//!
//! ## File format
//!
//! TOML. Every key is optional; anything omitted falls back to the built-in
//! rate table and unit price. Unknown keys are rejected so a typo cannot
//! silently leave a default in place.
//!
//! ```toml
//! [base_load_kw]
//! one_bhk = 2.4
//! two_bhk = 3.6
//! three_bhk = 4.8
//!
//! [appliances]
//! per_appliance_kw = 3.0
//!
//! [tariff]
//! unit_price_per_kwh = 5.0
//! ```
//!
//! | Key | Meaning |
//! |------------------------------------|--------------------------------------------|
//! | `base_load_kw.one_bhk`             | Daily base load for a 1BHK home (kW)       |
//! | `base_load_kw.two_bhk`             | Daily base load for a 2BHK home (kW)       |
//! | `base_load_kw.three_bhk`           | Daily base load for a 3BHK home (kW)       |
//! | `appliances.per_appliance_kw`      | Increment per appliance present (kW)       |
//! | `tariff.unit_price_per_kwh`        | Flat price per kWh used for cost estimates |
//!
//! Loaded tables go through [`ConsumptionRates::validate`] before they reach
//! the worksheet.

use rust_decimal::Decimal;
use serde::Deserialize;

use energy_core::calculations::{ConsumptionRates, ConsumptionRatesError, ProjectionTable};

// ---------------------------------------------------------------------------
// Serde-compatible sections that mirror the TOML layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RatesFile {
    #[serde(default)]
    base_load_kw: BaseLoads,
    #[serde(default)]
    appliances: Appliances,
    #[serde(default)]
    tariff: Tariff,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BaseLoads {
    one_bhk: Option<Decimal>,
    two_bhk: Option<Decimal>,
    three_bhk: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Appliances {
    per_appliance_kw: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Tariff {
    unit_price_per_kwh: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a rates override file.
#[derive(Debug, thiserror::Error)]
pub enum RatesFileError {
    /// The TOML failed to parse (syntax error, wrong value type, or an
    /// unknown key).
    #[error("rates file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The resulting rate table failed validation.
    #[error(transparent)]
    Invalid(#[from] ConsumptionRatesError),

    /// The unit price must be positive.
    #[error("unit price per kWh must be positive, got {0}")]
    NonPositiveUnitPrice(Decimal),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parsed and validated rates, ready to hand to the worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRates {
    pub rates: ConsumptionRates,
    pub unit_price_per_kwh: Decimal,
}

impl Default for LoadedRates {
    fn default() -> Self {
        Self {
            rates: ConsumptionRates::default(),
            unit_price_per_kwh: ProjectionTable::default_unit_price(),
        }
    }
}

/// Parse TOML text (the full file contents as a `&str`) and return the
/// merged, validated rates.
///
/// # Errors
///
/// * [`RatesFileError::Parse`] – if the TOML is structurally invalid,
///   contains an unknown key, or a value has the wrong type.
/// * [`RatesFileError::Invalid`] – if a base load is zero/negative or the
///   per-appliance load is negative.
/// * [`RatesFileError::NonPositiveUnitPrice`] – if the unit price is zero
///   or negative.
pub fn load_from_str(input: &str) -> Result<LoadedRates, RatesFileError> {
    let file: RatesFile = toml::from_str(input)?;
    let defaults = ConsumptionRates::default();

    let rates = ConsumptionRates {
        one_bhk_base_kw: file.base_load_kw.one_bhk.unwrap_or(defaults.one_bhk_base_kw),
        two_bhk_base_kw: file.base_load_kw.two_bhk.unwrap_or(defaults.two_bhk_base_kw),
        three_bhk_base_kw: file
            .base_load_kw
            .three_bhk
            .unwrap_or(defaults.three_bhk_base_kw),
        per_appliance_kw: file
            .appliances
            .per_appliance_kw
            .unwrap_or(defaults.per_appliance_kw),
    };
    rates.validate()?;

    let unit_price_per_kwh = file
        .tariff
        .unit_price_per_kwh
        .unwrap_or_else(ProjectionTable::default_unit_price);
    if unit_price_per_kwh <= Decimal::ZERO {
        return Err(RatesFileError::NonPositiveUnitPrice(unit_price_per_kwh));
    }

    Ok(LoadedRates {
        rates,
        unit_price_per_kwh,
    })
}

/// Convenience wrapper: read a file from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// Returns an `io::Error` when the file cannot be read, or a
/// [`RatesFileError`] when the contents are invalid.
pub fn load_from_file(
    path: &std::path::Path
) -> Result<LoadedRates, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let rates = load_from_str(&contents)?;
    Ok(rates)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const FULL_TOML: &str = "\
[base_load_kw]
one_bhk = 2.0
two_bhk = 3.0
three_bhk = 4.0

[appliances]
per_appliance_kw = 2.5

[tariff]
unit_price_per_kwh = 6.5
";

    // -----------------------------------------------------------------------
    // 1. Full file – every key overridden
    // -----------------------------------------------------------------------
    #[test]
    fn test_full_file_overrides_every_key() {
        let loaded = load_from_str(FULL_TOML).expect("full file should load");

        assert_eq!(loaded.rates.one_bhk_base_kw, dec!(2.0));
        assert_eq!(loaded.rates.two_bhk_base_kw, dec!(3.0));
        assert_eq!(loaded.rates.three_bhk_base_kw, dec!(4.0));
        assert_eq!(loaded.rates.per_appliance_kw, dec!(2.5));
        assert_eq!(loaded.unit_price_per_kwh, dec!(6.5));
    }

    // -----------------------------------------------------------------------
    // 2. Partial file – omitted keys fall back to the defaults
    // -----------------------------------------------------------------------
    #[test]
    fn test_partial_file_falls_back_per_key() {
        let toml = "\
[base_load_kw]
two_bhk = 4.2
";
        let loaded = load_from_str(toml).expect("partial file should load");

        assert_eq!(loaded.rates.one_bhk_base_kw, dec!(2.4));
        assert_eq!(loaded.rates.two_bhk_base_kw, dec!(4.2));
        assert_eq!(loaded.rates.three_bhk_base_kw, dec!(4.8));
        assert_eq!(loaded.rates.per_appliance_kw, dec!(3.0));
        assert_eq!(loaded.unit_price_per_kwh, dec!(5));
    }

    #[test]
    fn test_empty_file_yields_the_defaults() {
        let loaded = load_from_str("").expect("empty file is valid");

        assert_eq!(loaded, LoadedRates::default());
    }

    #[test]
    fn test_tariff_only_file_keeps_the_default_table() {
        let toml = "\
[tariff]
unit_price_per_kwh = 8
";
        let loaded = load_from_str(toml).expect("tariff-only file should load");

        assert_eq!(loaded.rates, ConsumptionRates::default());
        assert_eq!(loaded.unit_price_per_kwh, dec!(8));
    }

    // -----------------------------------------------------------------------
    // 3. Error: unknown keys are rejected, not silently ignored
    // -----------------------------------------------------------------------
    #[test]
    fn test_unknown_key_returns_parse_error() {
        let toml = "\
[base_load_kw]
four_bhk = 6.0
";
        let result = load_from_str(toml);

        assert!(matches!(result, Err(RatesFileError::Parse(_))));
    }

    #[test]
    fn test_unknown_section_returns_parse_error() {
        let toml = "\
[discounts]
festive = 0.5
";
        let result = load_from_str(toml);

        assert!(matches!(result, Err(RatesFileError::Parse(_))));
    }

    // -----------------------------------------------------------------------
    // 4. Error: invalid values are rejected through validation
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_base_load_is_rejected() {
        let toml = "\
[base_load_kw]
one_bhk = -2.4
";
        let result = load_from_str(toml);

        assert!(matches!(result, Err(RatesFileError::Invalid(_))));
    }

    #[test]
    fn test_zero_unit_price_is_rejected() {
        let toml = "\
[tariff]
unit_price_per_kwh = 0
";
        let result = load_from_str(toml);

        assert!(matches!(
            result,
            Err(RatesFileError::NonPositiveUnitPrice(_))
        ));
    }

    #[test]
    fn test_non_numeric_value_returns_parse_error() {
        let toml = "\
[base_load_kw]
one_bhk = true
";
        let result = load_from_str(toml);

        assert!(matches!(result, Err(RatesFileError::Parse(_))));
    }
}
