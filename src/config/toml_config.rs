use crate::domain::model::{Message, Property};
use crate::utils::error::{DeskError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sample data and report settings, either built in or read from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    pub report: Option<ReportConfig>,
    pub messaging: Option<MessagingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: String,
    pub premium_threshold: f64,
    pub format: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    pub detail_recipient: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl DeskConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeskError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DeskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeskError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The fixed demo data: three properties and three messages.
    pub fn sample() -> Self {
        Self {
            report: Some(ReportConfig {
                title: "Monthly Rent Summary".to_string(),
                premium_threshold: 2000.0,
                format: None,
                properties: vec![
                    Property::new("Apartment A", 1500.0, "John Doe", "City Center"),
                    Property::new("House B", 2000.0, "Jane Smith", "Suburb"),
                    Property::new("Condo C", 1800.0, "Bob Johnson", "Downtown"),
                ],
            }),
            messaging: Some(MessagingConfig {
                detail_recipient: "Tenant A".to_string(),
                messages: vec![
                    Message::new("Hello, tenant!", "Property Manager", "Tenant A"),
                    Message::new("Rent due next week.", "Property Owner", "Tenant A"),
                    Message::new("Maintenance request.", "Tenant A", "Property Manager"),
                ],
            }),
        }
    }

    /// Reads `path` when given, otherwise falls back to [`DeskConfig::sample`].
    pub fn load_or_sample(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                Self::from_file(path)
            }
            None => {
                tracing::debug!("No config file given, using built-in sample data");
                Ok(Self::sample())
            }
        }
    }

    pub fn report(&self) -> Result<&ReportConfig> {
        validation::validate_required_field("report", &self.report)
    }

    pub fn messaging(&self) -> Result<&MessagingConfig> {
        validation::validate_required_field("messaging", &self.messaging)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(report) = &self.report {
            validation::validate_non_empty_string("report.title", &report.title)?;
            validation::validate_finite("report.premium_threshold", report.premium_threshold)?;
            if let Some(format) = &report.format {
                validation::validate_one_of(
                    "report.format",
                    format,
                    &crate::core::printer::OutputFormat::NAMES,
                )?;
            }
        }

        if let Some(messaging) = &self.messaging {
            validation::validate_non_empty_string(
                "messaging.detail_recipient",
                &messaging.detail_recipient,
            )?;
        }

        Ok(())
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self::sample()
    }
}

impl Validate for DeskConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
