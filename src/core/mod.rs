pub mod messaging;
pub mod printer;
pub mod report;

pub use crate::domain::model::{Category, Message, Property, PropertyReportItem, ReportSummary};
pub use crate::domain::ports::ReportRenderer;
pub use crate::utils::error::Result;
