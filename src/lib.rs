pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::{run_messaging, run_report, ReportOverrides};
pub use config::DeskConfig;
pub use crate::core::{
    messaging::MessagingService, printer::ReportPrinter, report::FinancialReportService,
};
pub use domain::model::{Category, Message, Property, PropertyReportItem, ReportSummary};
pub use utils::error::{DeskError, Result};
