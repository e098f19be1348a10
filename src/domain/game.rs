use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Sportsbook quote for one game: consensus point spread plus the
/// moneyline pair for favorite and underdog.
///
/// Odds may be quoted in American convention (-110, +150) or, rarely,
/// decimal convention (1.91); the pricing layer disambiguates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameOdds {
    /// Point spread in points (sign as quoted; the model uses the magnitude)
    pub spread_points: f64,
    /// Moneyline for the favorite (e.g. -280)
    pub favorite_odds: f64,
    /// Moneyline for the underdog (e.g. +230)
    pub underdog_odds: f64,
}

/// One observed pairwise spread between two teams in a reporting cycle.
///
/// Flow convention: a positive spread means `home` is favored by that many
/// points, i.e. the flow runs away -> home.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadObservation {
    pub home: String,
    pub away: String,
    pub spread: f64,
}

impl SpreadObservation {
    pub fn new(home: impl Into<String>, away: impl Into<String>, spread: f64) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            spread,
        }
    }
}

/// Load a slate from a JSON records file: an array of
/// `{home, away, spread}` objects.
pub fn load_slate<P: AsRef<Path>>(path: P) -> Result<Vec<SpreadObservation>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
