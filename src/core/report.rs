use crate::domain::model::{Property, PropertyReportItem, ReportSummary};

pub struct FinancialReportService {
    premium_threshold: f64,
}

impl FinancialReportService {
    pub fn new(premium_threshold: f64) -> Self {
        Self { premium_threshold }
    }

    pub fn premium_threshold(&self) -> f64 {
        self.premium_threshold
    }

    /// One item per property, in input order.
    pub fn generate_report_items(&self, properties: &[Property]) -> Vec<PropertyReportItem> {
        let items: Vec<PropertyReportItem> = properties
            .iter()
            .cloned()
            .map(|property| PropertyReportItem::new(property, self.premium_threshold))
            .collect();

        tracing::debug!(
            "Generated {} report items (threshold {:.2})",
            items.len(),
            self.premium_threshold
        );
        items
    }

    /// Monthly total across all properties; an empty list totals `0.0`.
    pub fn calculate_total_rent(&self, properties: &[Property]) -> f64 {
        properties
            .iter()
            .map(Property::rent_amount)
            .fold(0.0, |total, rent| total + rent)
    }

    pub fn summarize(&self, title: &str, properties: &[Property]) -> ReportSummary {
        let items = self.generate_report_items(properties);
        let total = self.calculate_total_rent(properties);
        ReportSummary::new(title, items, total)
    }
}
