use serde::{Deserialize, Serialize};
use std::fmt;

/// A message addressed to a single recipient. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    content: String,
    sender: String,
    recipient: String,
}

impl Message {
    pub fn new(
        content: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn to_summary_string(&self) -> String {
        format!(
            "Content: {}\nSender: {}\nRecipient: {}",
            self.content, self.sender, self.recipient
        )
    }

    /// Summary plus content length, upper-cased sender and lower-cased
    /// recipient. Length counts Unicode scalar values, not UTF-16 units.
    pub fn to_detailed_string(&self) -> String {
        format!(
            "{}\nContent Length: {}\nSender Uppercase: {}\nRecipient Lowercase: {}",
            self.to_summary_string(),
            self.content.chars().count(),
            self.sender.to_uppercase(),
            self.recipient.to_lowercase()
        )
    }
}

/// A rental property with its monthly rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    rent_amount: f64,
    owner_name: String,
    location: String,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        rent_amount: f64,
        owner_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rent_amount,
            owner_name: owner_name.into(),
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rent_amount(&self) -> f64 {
        self.rent_amount
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Premium,
    Standard,
}

impl Category {
    /// Strictly above the threshold is premium; equal is standard.
    pub fn classify(rent_amount: f64, premium_threshold: f64) -> Self {
        if rent_amount > premium_threshold {
            Category::Premium
        } else {
            Category::Standard
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Premium => f.write_str("Premium"),
            Category::Standard => f.write_str("Standard"),
        }
    }
}

/// A property with its derived report fields, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyReportItem {
    property: Property,
    yearly_rent: f64,
    category: Category,
}

impl PropertyReportItem {
    pub fn new(property: Property, premium_threshold: f64) -> Self {
        let yearly_rent = property.rent_amount() * 12.0;
        let category = Category::classify(property.rent_amount(), premium_threshold);
        Self {
            property,
            yearly_rent,
            category,
        }
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn yearly_rent(&self) -> f64 {
        self.yearly_rent
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn generate_report_line(&self) -> String {
        format!(
            "Property: {}\nRent Amount: {:.2}\nOwner: {}\nLocation: {}\nCategory: {}\nYearly Rent: {:.2}",
            self.property.name(),
            self.property.rent_amount(),
            self.property.owner_name(),
            self.property.location(),
            self.category,
            self.yearly_rent
        )
    }
}

/// Report items plus monthly and yearly totals for one titled report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub title: String,
    pub items: Vec<PropertyReportItem>,
    pub total_monthly_rent: f64,
    pub total_yearly_rent: f64,
}

impl ReportSummary {
    /// The yearly total is always derived from the monthly total.
    pub fn new(
        title: impl Into<String>,
        items: Vec<PropertyReportItem>,
        total_monthly_rent: f64,
    ) -> Self {
        Self {
            title: title.into(),
            items,
            total_monthly_rent,
            total_yearly_rent: total_monthly_rent * 12.0,
        }
    }

    pub fn premium_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.category() == Category::Premium)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_summary() {
        let message = Message::new("Hi", "A", "B");
        assert_eq!(message.to_summary_string(), "Content: Hi\nSender: A\nRecipient: B");
    }

    #[test]
    fn test_message_detailed() {
        let message = Message::new("Rent due", "Property Owner", "Tenant A");
        let detailed = message.to_detailed_string();
        let lines: Vec<&str> = detailed.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "Content Length: 8");
        assert_eq!(lines[4], "Sender Uppercase: PROPERTY OWNER");
        assert_eq!(lines[5], "Recipient Lowercase: tenant a");
    }

    #[test]
    fn test_content_length_counts_characters() {
        let message = Message::new("Hyra på Södermalm", "A", "B");
        assert!(message.to_detailed_string().contains("Content Length: 17"));
    }

    #[test]
    fn test_category_boundary() {
        assert_eq!(Category::classify(2000.0, 2000.0), Category::Standard);
        assert_eq!(Category::classify(2000.01, 2000.0), Category::Premium);
        assert_eq!(Category::classify(-10.0, 2000.0), Category::Standard);
        assert_eq!(Category::Premium.to_string(), "Premium");
    }

    #[test]
    fn test_report_item_derived_fields() {
        let item = PropertyReportItem::new(
            Property::new("Condo C", 1800.0, "Bob Johnson", "Downtown"),
            2000.0,
        );

        assert_eq!(item.yearly_rent(), 21600.0);
        assert_eq!(item.category(), Category::Standard);
        assert_eq!(
            item.generate_report_line(),
            "Property: Condo C\nRent Amount: 1800.00\nOwner: Bob Johnson\nLocation: Downtown\nCategory: Standard\nYearly Rent: 21600.00"
        );
    }
}
