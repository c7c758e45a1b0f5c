use std::env;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{AppError, Result};

/// Main engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub app: AppConfig,
    pub numbering: NumberingConfig,
    pub tax: TaxConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Human-readable document number prefixes ("INV-2025-001", "QT-2025-001")
#[derive(Debug, Clone, Deserialize)]
pub struct NumberingConfig {
    pub invoice_prefix: String,
    pub quotation_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// Percentage rate applied when a quotation does not carry its own
    pub default_rate: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app: AppConfig {
                env: "development".to_string(),
                log_level: "info".to_string(),
            },
            numbering: NumberingConfig {
                invoice_prefix: "INV".to_string(),
                quotation_prefix: "QT".to_string(),
            },
            tax: TaxConfig {
                default_rate: Decimal::from(18),
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let defaults = EngineConfig::default();

        let config = EngineConfig {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or(defaults.app.env),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.app.log_level),
            },
            numbering: NumberingConfig {
                invoice_prefix: env::var("INVOICE_PREFIX")
                    .unwrap_or(defaults.numbering.invoice_prefix),
                quotation_prefix: env::var("QUOTATION_PREFIX")
                    .unwrap_or(defaults.numbering.quotation_prefix),
            },
            tax: TaxConfig {
                default_rate: match env::var("DEFAULT_TAX_RATE") {
                    Ok(raw) => raw.parse().map_err(|_| {
                        AppError::configuration("Invalid DEFAULT_TAX_RATE".to_string())
                    })?,
                    Err(_) => defaults.tax.default_rate,
                },
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.numbering.invoice_prefix.trim().is_empty() {
            return Err(AppError::configuration(
                "Invoice prefix must not be empty".to_string(),
            ));
        }

        if self.numbering.quotation_prefix.trim().is_empty() {
            return Err(AppError::configuration(
                "Quotation prefix must not be empty".to_string(),
            ));
        }

        if self.tax.default_rate < Decimal::ZERO || self.tax.default_rate > Decimal::from(100) {
            return Err(AppError::configuration(
                "Default tax rate must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }
}
