//! End-to-end flow: raw form fields in, rendered report and CSV out.
//!
//! Exercises the same path the binary takes, minus argument parsing:
//! collector validation, the consumption worksheet, projections, and both
//! presenters.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use energy_cli::export;
use energy_cli::form::ProfileForm;
use energy_cli::report::Report;
use energy_core::{ConsumptionWorksheet, ProjectionTable};

fn filled_form() -> ProfileForm {
    ProfileForm {
        name: "Ravi Shah".to_string(),
        age: "45".to_string(),
        city: "Surat".to_string(),
        area: "Adajan".to_string(),
        residence_type: "Tenement".to_string(),
        bedroom_tier: "3BHK".to_string(),
        has_air_conditioner: true,
        has_refrigerator: true,
        has_washing_machine: true,
        errors: Vec::new(),
    }
}

#[test]
fn full_flow_produces_the_expected_report() {
    let mut form = filled_form();
    let profile = form.validate().expect("filled form should validate");

    let worksheet = ConsumptionWorksheet::default();
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
    let estimate = worksheet.estimate(profile).with_timestamp(at);

    assert_eq!(estimate.total_kw, dec!(13.8));

    let projection = ProjectionTable::with_default_price(estimate.total_kw);
    let rendered = Report::new(&estimate, worksheet.rates(), &projection).to_string();

    assert!(rendered.contains("Name:       Ravi Shah"));
    assert!(rendered.contains("Home:       3BHK Tenement"));
    assert!(rendered.contains("Total daily estimate: 13.8 kW"));
    assert!(rendered.contains("Computed at 2024-06-01 09:30:00"));
}

#[test]
fn full_flow_exports_the_projection_csv() {
    let mut form = filled_form();
    let profile = form.validate().expect("filled form should validate");

    let worksheet = ConsumptionWorksheet::default();
    let estimate = worksheet.estimate(profile);
    let projection = ProjectionTable::with_default_price(estimate.total_kw);

    let mut buffer = Vec::new();
    export::write_csv(&mut buffer, &projection).expect("writing to a Vec cannot fail");
    let csv = String::from_utf8(buffer).unwrap();

    assert!(csv.starts_with("period,consumption_kw,estimated_cost\n"));
    assert!(csv.contains("Daily,13.8,69.00\n"));
    assert!(csv.contains("Monthly,414.0,2070.00\n"));
}

#[test]
fn missing_required_fields_never_reach_the_worksheet() {
    let mut form = ProfileForm {
        name: String::new(),
        city: "  ".to_string(),
        ..filled_form()
    };

    let result = form.validate();

    assert!(result.is_err());
    assert_eq!(
        form.errors,
        vec!["Name is required".to_string(), "City is required".to_string()]
    );
}
