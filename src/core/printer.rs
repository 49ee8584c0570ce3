use crate::domain::model::{PropertyReportItem, ReportSummary};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

const HEADER_DIVIDER: &str = "----------------------------";
const ITEM_DIVIDER: &str = "--------------------";

/// Writes the plain-text financial report to any `Write` sink.
pub struct ReportPrinter<W: Write> {
    out: W,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_financial_report(
        &mut self,
        title: &str,
        report_items: &[PropertyReportItem],
        total_monthly_rent: f64,
    ) -> Result<()> {
        writeln!(self.out, "Financial Report: {}", title)?;
        writeln!(self.out, "{}", HEADER_DIVIDER)?;

        for item in report_items {
            writeln!(self.out, "{}", item.generate_report_line())?;
            writeln!(self.out, "{}", ITEM_DIVIDER)?;
        }

        writeln!(self.out, "Total Monthly Rent: ${:.2}", total_monthly_rent)?;
        writeln!(self.out, "Total Yearly Rent: ${:.2}", total_monthly_rent * 12.0)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, summary: &ReportSummary, out: &mut dyn Write) -> Result<()> {
        ReportPrinter::new(out).print_financial_report(
            &summary.title,
            &summary.items,
            summary.total_monthly_rent,
        )
    }

    fn format_name(&self) -> &'static str {
        "text"
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    property: &'a str,
    rent_amount: String,
    owner: &'a str,
    location: &'a str,
    category: String,
    yearly_rent: String,
}

pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn render(&self, summary: &ReportSummary, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);

        for item in &summary.items {
            let property = item.property();
            writer.serialize(CsvRow {
                property: property.name(),
                rent_amount: format!("{:.2}", property.rent_amount()),
                owner: property.owner_name(),
                location: property.location(),
                category: item.category().to_string(),
                yearly_rent: format!("{:.2}", item.yearly_rent()),
            })?;
        }

        if summary.items.is_empty() {
            writer.write_record([
                "property",
                "rent_amount",
                "owner",
                "location",
                "category",
                "yearly_rent",
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    summary: &'a ReportSummary,
    premium_count: usize,
}

pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, summary: &ReportSummary, out: &mut dyn Write) -> Result<()> {
        let report = JsonReport {
            generated_at: Utc::now(),
            summary,
            premium_count: summary.premium_count(),
        };

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
