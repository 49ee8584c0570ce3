use crate::config::{MessagingConfig, ReportConfig};
use crate::core::messaging::MessagingService;
use crate::core::printer::OutputFormat;
use crate::core::report::FinancialReportService;
use crate::domain::model::ReportSummary;
use crate::utils::error::Result;
use crate::utils::validation;
use std::io::Write;

/// Sends every configured message, then prints the detail view for one
/// recipient followed by the whole inbox.
pub fn run_messaging(
    config: &MessagingConfig,
    recipient: Option<&str>,
    out: &mut dyn Write,
) -> Result<MessagingService> {
    let mut service = MessagingService::new();
    for message in &config.messages {
        service.send_message(message.content(), message.sender(), message.recipient());
    }
    tracing::info!(
        "Delivered {} messages to {} recipients",
        service.message_count(),
        service.recipients().len()
    );

    let detail_recipient = recipient.unwrap_or(&config.detail_recipient);
    for message in service.messages_for_recipient(detail_recipient) {
        writeln!(out, "[Detail]")?;
        writeln!(out, "{}", message.to_detailed_string())?;
    }

    writeln!(out, "==== All Messages ====")?;
    writeln!(out, "{}", service.all_messages_as_string())?;
    out.flush()?;

    Ok(service)
}

/// Command-line values that take precedence over the report config.
#[derive(Debug, Clone, Default)]
pub struct ReportOverrides {
    pub format: Option<OutputFormat>,
    pub threshold: Option<f64>,
    pub title: Option<String>,
}

pub fn run_report(
    config: &ReportConfig,
    overrides: ReportOverrides,
    out: &mut dyn Write,
) -> Result<ReportSummary> {
    let threshold = overrides.threshold.unwrap_or(config.premium_threshold);
    validation::validate_finite("threshold", threshold)?;

    let title = overrides.title.unwrap_or_else(|| config.title.clone());
    let format = match overrides.format {
        Some(format) => format,
        None => resolve_format(config.format.as_deref())?,
    };

    let service = FinancialReportService::new(threshold);
    let summary = service.summarize(&title, &config.properties);
    tracing::info!(
        "Report '{}': {} properties, {} premium",
        summary.title,
        summary.items.len(),
        summary.premium_count()
    );

    let renderer = format.renderer();
    tracing::debug!("Rendering report as {}", renderer.format_name());
    renderer.render(&summary, out)?;

    Ok(summary)
}

fn resolve_format(name: Option<&str>) -> Result<OutputFormat> {
    match name {
        None => Ok(OutputFormat::default()),
        Some(name) => {
            validation::validate_one_of("report.format", name, &OutputFormat::NAMES)?;
            Ok(OutputFormat::from_name(name).unwrap_or_default())
        }
    }
}
