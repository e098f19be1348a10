//! Odds conversion and vig removal
//!
//! Converts sportsbook quotes (American or decimal convention) into implied
//! probabilities and strips the bookmaker margin to recover true
//! probabilities. All probabilities are percentages in [0, 100].

use tracing::debug;

use crate::error::{GambitError, Result};

/// Convert a quoted odds value to an implied probability percentage.
///
/// Quotes between 1.0 and 10.0 (exclusive) are treated as decimal odds;
/// everything else is read as American odds. A non-finite quote is a parse
/// failure and comes back as `Err(DegenerateOdds)` so callers can tell a
/// bad feed value apart from a genuine 0% probability.
pub fn implied_probability(odds: f64) -> Result<f64> {
    if !odds.is_finite() {
        debug!(odds, "rejecting non-finite odds quote");
        return Err(GambitError::DegenerateOdds { value: odds });
    }

    // Decimal odds (rare, but mixed-convention feeds happen)
    if odds > 1.0 && odds < 10.0 {
        return Ok((1.0 / odds) * 100.0);
    }

    // American odds
    if odds > 0.0 {
        Ok(100.0 / (odds + 100.0) * 100.0)
    } else {
        Ok(-odds / (-odds + 100.0) * 100.0)
    }
}

/// Normalize a favorite/underdog probability pair so the two sum to 100%,
/// removing the bookmaker's margin (vigorish). Returns the favorite's true
/// probability. A zero total (both legs degenerate) yields 0.0.
pub fn remove_vig(prob_favorite: f64, prob_underdog: f64) -> f64 {
    let total_implied = prob_favorite + prob_underdog;
    if total_implied == 0.0 {
        return 0.0;
    }
    prob_favorite / total_implied * 100.0
}
