use config::{Config, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::pricing::EdgeCalculator;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub edge: EdgeConfig,
    #[serde(default)]
    pub consistency: ConsistencyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Thresholds gating whether a priced edge is worth trading
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeConfig {
    /// Taker fee rate on cost (e.g. 0.0175 = 1.75%)
    #[serde(default = "default_taker_fee")]
    pub taker_fee: Decimal,
    /// Minimum price discrepancy worth acting on (cents)
    #[serde(default = "default_min_edge_cents")]
    pub min_edge_cents: Decimal,
    /// Minimum return on investment (percent)
    #[serde(default = "default_min_roi_pct")]
    pub min_roi_pct: Decimal,
    /// Maximum exposure per trade (dollars)
    #[serde(default = "default_max_trade_cost")]
    pub max_trade_cost: Decimal,
    /// Exchange lot size (contracts)
    #[serde(default = "default_min_order_size")]
    pub min_order_size: u64,
}

fn default_taker_fee() -> Decimal {
    dec!(0.0175)
}

fn default_min_edge_cents() -> Decimal {
    dec!(3)
}

fn default_min_roi_pct() -> Decimal {
    dec!(8)
}

fn default_max_trade_cost() -> Decimal {
    dec!(100)
}

fn default_min_order_size() -> u64 {
    100
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            taker_fee: default_taker_fee(),
            min_edge_cents: default_min_edge_cents(),
            min_roi_pct: default_min_roi_pct(),
            max_trade_cost: default_max_trade_cost(),
            min_order_size: default_min_order_size(),
        }
    }
}

impl EdgeConfig {
    /// Build an edge calculator with these thresholds
    pub fn calculator(&self) -> EdgeCalculator {
        EdgeCalculator {
            taker_fee: self.taker_fee,
            min_edge_cents: self.min_edge_cents,
            min_roi_pct: self.min_roi_pct,
            max_trade_cost: self.max_trade_cost,
            min_order_size: self.min_order_size,
        }
    }
}

/// Consistency-analysis alerting
#[derive(Debug, Clone, Deserialize)]
pub struct ConsistencyConfig {
    /// Curl energy above which the market counts as highly inefficient
    #[serde(default = "default_high_energy_threshold")]
    pub high_energy_threshold: f64,
}

fn default_high_energy_threshold() -> f64 {
    100.0
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            high_energy_threshold: default_high_energy_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("consistency.high_energy_threshold", 100.0)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("GAMBIT_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (GAMBIT_EDGE__MIN_ROI_PCT, etc.)
            .add_source(
                Environment::with_prefix("GAMBIT")
                    .separator("__")
                    .try_parsing(true),
            );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.edge.taker_fee < Decimal::ZERO || self.edge.taker_fee >= Decimal::ONE {
            errors.push("edge.taker_fee must be in [0, 1)".to_string());
        }

        if self.edge.min_edge_cents < Decimal::ZERO {
            errors.push("edge.min_edge_cents must be non-negative".to_string());
        }

        if self.edge.max_trade_cost <= Decimal::ZERO {
            errors.push("edge.max_trade_cost must be positive".to_string());
        }

        if self.edge.min_order_size == 0 {
            errors.push("edge.min_order_size must be positive".to_string());
        }

        if self.consistency.high_energy_threshold <= 0.0 {
            errors.push("consistency.high_energy_threshold must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
