use crate::domain::model::ReportSummary;
use crate::utils::error::Result;
use std::io::Write;

/// Output seam for financial reports. One implementation per output format.
pub trait ReportRenderer {
    fn render(&self, summary: &ReportSummary, out: &mut dyn Write) -> Result<()>;

    fn format_name(&self) -> &'static str;
}
