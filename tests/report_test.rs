use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use tenant_desk::core::printer::OutputFormat;
use tenant_desk::{
    run_report, Category, DeskConfig, FinancialReportService, Property, ReportOverrides,
};

#[test]
fn test_sample_report_output() -> Result<()> {
    let config = DeskConfig::sample();
    let mut out: Vec<u8> = Vec::new();

    run_report(config.report()?, ReportOverrides::default(), &mut out)?;
    let output = String::from_utf8(out)?;

    let expected = "\
Financial Report: Monthly Rent Summary
----------------------------
Property: Apartment A
Rent Amount: 1500.00
Owner: John Doe
Location: City Center
Category: Standard
Yearly Rent: 18000.00
--------------------
Property: House B
Rent Amount: 2000.00
Owner: Jane Smith
Location: Suburb
Category: Standard
Yearly Rent: 24000.00
--------------------
Property: Condo C
Rent Amount: 1800.00
Owner: Bob Johnson
Location: Downtown
Category: Standard
Yearly Rent: 21600.00
--------------------
Total Monthly Rent: $5300.00
Total Yearly Rent: $63600.00
";
    assert_eq!(output, expected);

    Ok(())
}

#[test]
fn test_threshold_equal_rent_is_standard() {
    let service = FinancialReportService::new(2000.0);
    let items = service.generate_report_items(&[Property::new("X", 2000.0, "O", "L")]);

    assert_eq!(items[0].category(), Category::Standard);
}

#[test]
fn test_category_matches_threshold_comparison() {
    let thresholds = [-1.0, 0.0, 999.99, 1500.0, 2000.0, 10_000.0];
    let rents = [-50.0, 0.0, 999.99, 1000.0, 1500.0, 2000.0, 2000.01];

    for threshold in thresholds {
        let service = FinancialReportService::new(threshold);
        let properties: Vec<Property> = rents
            .iter()
            .map(|rent| Property::new("P", *rent, "O", "L"))
            .collect();

        for item in service.generate_report_items(&properties) {
            let rent = item.property().rent_amount();
            let expected = if rent > threshold {
                Category::Premium
            } else {
                Category::Standard
            };
            assert_eq!(item.category(), expected, "rent {} threshold {}", rent, threshold);
            assert_eq!(item.yearly_rent(), rent * 12.0);
        }
    }
}

#[test]
fn test_empty_property_list() -> Result<()> {
    let service = FinancialReportService::new(2000.0);
    assert_eq!(service.calculate_total_rent(&[]), 0.0);
    assert!(service.generate_report_items(&[]).is_empty());

    let config = DeskConfig::from_toml_str(
        r#"
[report]
title = "Vacant"
premium_threshold = 2000.0
"#,
    )?;
    let mut out: Vec<u8> = Vec::new();
    run_report(config.report()?, ReportOverrides::default(), &mut out)?;

    let output = String::from_utf8(out)?;
    assert!(output.ends_with("Total Monthly Rent: $0.00\nTotal Yearly Rent: $0.00\n"));
    Ok(())
}

#[test]
fn test_report_from_config_file_as_json() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[report]
title = "Harbor"
premium_threshold = 1000.0
format = "json"

[[report.properties]]
name = "Loft D"
rent_amount = 2500.0
owner_name = "Ann Lee"
location = "Harbor"

[[report.properties]]
name = "Studio E"
rent_amount = 900.0
owner_name = "Ann Lee"
location = "Harbor"
"#,
    )?;

    let config = DeskConfig::load_or_sample(temp_file.path().to_str())?;
    let mut out: Vec<u8> = Vec::new();
    let summary = run_report(config.report()?, ReportOverrides::default(), &mut out)?;

    assert_eq!(summary.total_monthly_rent, 3400.0);
    assert_eq!(summary.total_yearly_rent, 40800.0);

    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value["premium_count"], 1);
    assert_eq!(value["items"][0]["category"], "Premium");
    assert_eq!(value["items"][1]["category"], "Standard");
    assert_eq!(value["items"][1]["yearly_rent"], 10800.0);

    Ok(())
}

#[test]
fn test_csv_override_for_sample_data() -> Result<()> {
    let config = DeskConfig::sample();
    let mut out: Vec<u8> = Vec::new();

    run_report(
        config.report()?,
        ReportOverrides {
            format: Some(OutputFormat::Csv),
            ..Default::default()
        },
        &mut out,
    )?;

    let output = String::from_utf8(out)?;
    assert_eq!(output.lines().count(), 4);
    assert!(output.contains("Apartment A,1500.00,John Doe,City Center,Standard,18000.00"));

    Ok(())
}

#[test]
fn test_bundled_config_matches_sample_data() -> Result<()> {
    let bundled = DeskConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/desk-config.toml"))?;
    let sample = DeskConfig::sample();

    assert_eq!(bundled.report()?.properties, sample.report()?.properties);
    assert_eq!(bundled.messaging()?.messages, sample.messaging()?.messages);
    assert_eq!(bundled.report()?.format.as_deref(), Some("text"));

    Ok(())
}
