use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::load_slate;
use crate::hodge::{self, DISCREPANCY_THRESHOLD_POINTS};
use crate::pricing;

#[derive(Parser)]
#[command(name = "gambit")]
#[command(version = "0.1.0")]
#[command(about = "Gaussian spread pricing and Hodge consistency analysis for NBA markets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory path
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price one game from its spread and moneyline pair
    FairValue {
        /// Point spread in points (sign is ignored for the fit)
        #[arg(short, long, allow_negative_numbers = true)]
        spread: f64,
        /// American odds for the favorite (e.g. -280)
        #[arg(short, long, allow_negative_numbers = true)]
        favorite: f64,
        /// American odds for the underdog (e.g. 230)
        #[arg(short, long, allow_negative_numbers = true)]
        underdog: f64,
        /// Score-differential threshold to price against
        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        threshold: f64,
        /// Quoted ask in cents; enables the edge assessment
        #[arg(short, long)]
        ask: Option<f64>,
    },
    /// Analyze a slate of spread quotes for cyclic inconsistency
    Consistency {
        /// JSON file holding an array of {home, away, spread} records
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Price one game and optionally compare against a quoted ask
pub fn run_fair_value(
    config: &AppConfig,
    spread: f64,
    favorite: f64,
    underdog: f64,
    threshold: f64,
    ask: Option<f64>,
    json: bool,
) -> Result<()> {
    let params = pricing::solve_parameters(spread, favorite, underdog);
    let fair = params.fair_value(threshold);

    let assessment = ask.map(|ask_cents| {
        let ask_cents = Decimal::from_f64_retain(ask_cents).unwrap_or(Decimal::ZERO);
        config.edge.calculator().assess(fair, ask_cents)
    });

    if json {
        let payload = serde_json::json!({
            "mu": params.mu,
            "sigma": params.sigma,
            "threshold": threshold,
            "fair_value_pct": fair,
            "edge": assessment,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\x1b[36m╔══════════════════════════════════════════════════════════════╗\x1b[0m");
    println!("\x1b[36m║            GAMBIT - Gaussian Spread Pricing Model            ║\x1b[0m");
    println!("\x1b[36m╚══════════════════════════════════════════════════════════════╝\x1b[0m\n");

    println!("\x1b[33m📊 Fitted Parameters:\x1b[0m");
    println!("   Mu (expected margin):   {:.2} points", params.mu);
    println!("   Sigma (volatility):     {:.2} points\n", params.sigma);

    println!("\x1b[33m🎯 Fair Value:\x1b[0m");
    println!(
        "   P(differential > {:.1}) = {:.2}%\n",
        threshold, fair
    );

    if let Some(a) = assessment {
        println!("\x1b[33m💰 Edge vs Market:\x1b[0m");
        println!("   Fair Value:    {:.2}¢", a.fair_value_cents);
        println!("   Market Ask:    {:.2}¢", a.market_price_cents);
        println!("   Gross Edge:    {:.2}¢", a.edge_cents);
        println!("   Taker Fee:     {:.2}¢", a.taker_fee_cents);
        println!("   Net ROI:       {:.2}%", a.net_roi_pct);
        if a.tradeable {
            println!(
                "   \x1b[32m✓ TRADEABLE\x1b[0m (edge >= {}¢, ROI >= {}%)",
                config.edge.min_edge_cents, config.edge.min_roi_pct
            );
        } else {
            println!("   \x1b[31m✗ Below thresholds\x1b[0m");
        }
    }

    Ok(())
}

/// Run the Hodge consistency analysis over a slate file
pub fn run_consistency(config: &AppConfig, input: &Path, json: bool) -> Result<()> {
    let observations = load_slate(input)
        .with_context(|| format!("Failed to load slate file {}", input.display()))?;
    debug!(count = observations.len(), "loaded spread observations");

    let report = hodge::market_inconsistency(&observations)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\x1b[36m╔══════════════════════════════════════════════════════════════╗\x1b[0m");
    println!("\x1b[36m║          GAMBIT - Discrete Hodge Market Decomposition        ║\x1b[0m");
    println!("\x1b[36m╚══════════════════════════════════════════════════════════════╝\x1b[0m\n");

    println!("\x1b[33m🏀 Power Rankings (relative potentials):\x1b[0m");
    for (i, rating) in report.rankings.iter().enumerate() {
        println!("   {:>2}. {:<12} {:+8.2}", i + 1, rating.team, rating.potential);
    }
    println!();

    println!(
        "\x1b[33m🌀 Market Curl Energy (Inefficiency): {:.2}\x1b[0m",
        report.total_curl_energy
    );
    if report.total_curl_energy > config.consistency.high_energy_threshold {
        println!("   \x1b[31m🚨 HIGH INEFFICIENCY DETECTED: cyclic arbitrage present!\x1b[0m");
    }

    if report.arbitrage_loops.is_empty() {
        println!(
            "\n   No matchup exceeds the {DISCREPANCY_THRESHOLD_POINTS:.1}-point discrepancy threshold."
        );
    } else {
        println!("\n\x1b[33m⚡ Flagged Matchups:\x1b[0m");
        for arb in &report.arbitrage_loops {
            println!(
                "   {} | vegas {:+.1} | implied {:+.2} | discrepancy {:+.2}",
                arb.matchup, arb.vegas_spread, arb.hodge_implied, arb.discrepancy
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_fair_value_with_negative_odds() {
        let cli = Cli::parse_from([
            "gambit",
            "fair-value",
            "--spread",
            "6.5",
            "--favorite",
            "-280",
            "--underdog",
            "230",
        ]);
        match cli.command {
            Commands::FairValue {
                spread,
                favorite,
                underdog,
                threshold,
                ask,
            } => {
                assert_eq!(spread, 6.5);
                assert_eq!(favorite, -280.0);
                assert_eq!(underdog, 230.0);
                assert_eq!(threshold, 0.0);
                assert!(ask.is_none());
            }
            _ => panic!("expected fair-value command"),
        }
    }

    #[test]
    fn test_cli_parses_consistency_input() {
        let cli = Cli::parse_from(["gambit", "--json", "consistency", "--input", "slate.json"]);
        assert!(cli.json);
        match cli.command {
            Commands::Consistency { input } => {
                assert_eq!(input, PathBuf::from("slate.json"));
            }
            _ => panic!("expected consistency command"),
        }
    }

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }
}
