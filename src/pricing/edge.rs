//! Edge and ROI math for fair-value versus market-price comparisons
//!
//! Prices are in contract cents (0-100 for a binary market); a fair value
//! percentage from the pricing model maps one-to-one onto cents. Money
//! amounts stay in `Decimal` so fee and ROI thresholds compare exactly.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Taker fee rate charged on cost (1.75%)
pub const TAKER_FEE: Decimal = Decimal::from_parts(175, 0, 0, false, 4);

/// Minimum gross edge worth acting on (cents)
pub const MIN_EDGE_CENTS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Minimum net return on cost (percent)
pub const MIN_ROI_PCT: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Maximum dollars committed to a single trade
pub const MAX_TRADE_COST: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Exchange minimum order size (contracts)
pub const MIN_ORDER_SIZE: u64 = 100;

/// Outcome of comparing a model fair value against a quoted ask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeAssessment {
    /// Model fair value (cents)
    pub fair_value_cents: Decimal,
    /// Quoted ask (cents)
    pub market_price_cents: Decimal,
    /// Gross edge: fair value minus ask (cents)
    pub edge_cents: Decimal,
    /// Taker fee on the ask (cents)
    pub taker_fee_cents: Decimal,
    /// Net return on cost after fees (percent)
    pub net_roi_pct: Decimal,
    /// Whether both edge and ROI thresholds are met
    pub tradeable: bool,
}

/// Threshold-driven edge calculator
#[derive(Debug, Clone)]
pub struct EdgeCalculator {
    /// Taker fee rate on cost (e.g. 0.0175 = 1.75%)
    pub taker_fee: Decimal,
    /// Minimum gross edge (cents)
    pub min_edge_cents: Decimal,
    /// Minimum net ROI (percent)
    pub min_roi_pct: Decimal,
    /// Maximum cost per trade (dollars)
    pub max_trade_cost: Decimal,
    /// Exchange minimum order size (contracts)
    pub min_order_size: u64,
}

impl EdgeCalculator {
    /// Create a calculator with the standard exchange settings
    pub fn new() -> Self {
        Self {
            taker_fee: TAKER_FEE,
            min_edge_cents: MIN_EDGE_CENTS,
            min_roi_pct: MIN_ROI_PCT,
            max_trade_cost: MAX_TRADE_COST,
            min_order_size: MIN_ORDER_SIZE,
        }
    }

    /// Create a calculator with custom thresholds
    pub fn with_thresholds(
        taker_fee: Decimal,
        min_edge_cents: Decimal,
        min_roi_pct: Decimal,
    ) -> Self {
        Self {
            taker_fee,
            min_edge_cents,
            min_roi_pct,
            ..Self::new()
        }
    }

    /// Compare a model fair value (percent, 0-100) against a quoted ask.
    ///
    /// A non-positive or degenerate ask is never tradeable; ROI reports as
    /// zero rather than dividing by a zero cost.
    pub fn assess(&self, fair_value_pct: f64, ask_cents: Decimal) -> EdgeAssessment {
        let fair_value_cents =
            Decimal::from_f64_retain(fair_value_pct).unwrap_or(Decimal::ZERO);
        let edge_cents = fair_value_cents - ask_cents;
        let taker_fee_cents = ask_cents * self.taker_fee;

        let net_roi_pct = if ask_cents > Decimal::ZERO {
            (edge_cents - taker_fee_cents) / ask_cents * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        let tradeable = ask_cents > Decimal::ZERO
            && edge_cents >= self.min_edge_cents
            && net_roi_pct >= self.min_roi_pct;

        EdgeAssessment {
            fair_value_cents,
            market_price_cents: ask_cents,
            edge_cents,
            taker_fee_cents,
            net_roi_pct,
            tradeable,
        }
    }

    /// Contracts affordable at `ask_cents` under the cost cap, respecting
    /// the exchange minimum order size. Returns 0 when the cap cannot fund
    /// a minimum-size order.
    pub fn max_contracts(&self, ask_cents: Decimal) -> u64 {
        if ask_cents <= Decimal::ZERO {
            return 0;
        }
        let cost_per_contract = ask_cents / Decimal::from(100);
        let affordable = (self.max_trade_cost / cost_per_contract)
            .floor()
            .to_u64()
            .unwrap_or(0);
        if affordable < self.min_order_size {
            0
        } else {
            affordable
        }
    }
}

impl Default for EdgeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
