use gambit::{
    load_slate, market_inconsistency, solve_game, solve_parameters, AppConfig, GambitError,
    GameOdds, SpreadObservation,
};
use rust_decimal_macros::dec;

fn obs(home: &str, away: &str, spread: f64) -> SpreadObservation {
    SpreadObservation::new(home, away, spread)
}

#[test]
fn fair_value_pipeline_prices_a_quoted_game() {
    // DraftKings-style record for a 6.5-point favorite
    let record: GameOdds = serde_json::from_str(
        r#"{"spread_points": 6.5, "favorite_odds": -280.0, "underdog_odds": 230.0}"#,
    )
    .unwrap();

    let params = solve_game(&record);
    assert_eq!(params.mu, 6.5);
    assert!(params.sigma > 5.0 && params.sigma < 25.0);

    // Favorite covering zero should be well above even money
    let fair = params.fair_value(0.0);
    assert!(fair > 65.0 && fair < 80.0, "fair value={fair}");

    // Against a 52-cent ask this is a clear, fee-covered edge
    let config = AppConfig::default();
    let assessment = config.edge.calculator().assess(fair, dec!(52));
    assert!(assessment.tradeable);
    assert!(assessment.edge_cents > dec!(15));
    assert!(assessment.net_roi_pct > dec!(8));
}

#[test]
fn even_game_prices_at_fifty_with_no_edge() {
    let params = solve_parameters(0.0, -110.0, -110.0);
    assert_eq!(params.sigma, 13.5);

    let fair = params.fair_value(0.0);
    assert!((fair - 50.0).abs() < 1e-9);

    let config = AppConfig::default();
    let assessment = config.edge.calculator().assess(fair, dec!(50));
    assert!(!assessment.tradeable);
}

#[test]
fn consistent_slate_yields_clean_rankings() {
    let raw = r#"[
        {"home": "NYK", "away": "BOS", "spread": 5.0},
        {"home": "PHI", "away": "NYK", "spread": 3.0},
        {"home": "PHI", "away": "BOS", "spread": 8.0}
    ]"#;
    let slate: Vec<SpreadObservation> = serde_json::from_str(raw).unwrap();

    let report = market_inconsistency(&slate).unwrap();
    assert_eq!(report.rankings.len(), 3);
    assert!(report
        .rankings
        .windows(2)
        .all(|pair| pair[0].potential >= pair[1].potential));
    assert_eq!(report.rankings[0].team, "PHI");
    assert!(report.total_curl_energy < 1e-9);
    assert!(report.arbitrage_loops.is_empty());
    assert!(!report.is_highly_inefficient());
}

#[test]
fn duplicate_quotes_use_the_latest_line() {
    let report = market_inconsistency(&[
        obs("LAL", "GSW", 5.0),
        obs("LAL", "GSW", 9.0),
    ])
    .unwrap();

    let potential = |team: &str| {
        report
            .rankings
            .iter()
            .find(|r| r.team == team)
            .map(|r| r.potential)
            .unwrap()
    };
    assert!((potential("LAL") - potential("GSW") - 9.0).abs() < 1e-9);
}

#[test]
fn cyclically_inconsistent_slate_is_flagged() {
    // Two consistent 2-hop paths between DEN and OKC imply a 4-point gap;
    // the direct quote says 12. The direct edge carries the concentrated
    // residual.
    let report = market_inconsistency(&[
        obs("MIN", "DEN", 2.0),
        obs("OKC", "MIN", 2.0),
        obs("UTA", "DEN", 2.0),
        obs("OKC", "UTA", 2.0),
        obs("OKC", "DEN", 12.0),
    ])
    .unwrap();

    assert!(report.total_curl_energy > 0.0);
    assert_eq!(report.arbitrage_loops.len(), 1);
    assert_eq!(report.arbitrage_loops[0].matchup, "DEN vs OKC");
    assert!(report.arbitrage_loops[0].discrepancy > 3.0);
}

#[test]
fn badly_inconsistent_slate_trips_the_energy_alert() {
    // Same shape scaled up: paths imply 8, direct quote says 24.
    // Residuals are -4 on each path leg and +8 on the direct edge,
    // energy 4*16 + 64 = 128.
    let report = market_inconsistency(&[
        obs("MIN", "DEN", 4.0),
        obs("OKC", "MIN", 4.0),
        obs("UTA", "DEN", 4.0),
        obs("OKC", "UTA", 4.0),
        obs("OKC", "DEN", 24.0),
    ])
    .unwrap();

    assert!((report.total_curl_energy - 128.0).abs() < 1e-6);
    assert!(report.is_highly_inefficient());
    assert_eq!(report.arbitrage_loops.len(), 5);
    assert!(report
        .arbitrage_loops
        .iter()
        .any(|a| a.matchup == "DEN vs OKC" && (a.discrepancy - 8.0).abs() < 1e-6));
}

#[test]
fn empty_slate_reports_insufficient_data() {
    let err = market_inconsistency(&[]).unwrap_err();
    assert!(matches!(err, GambitError::InsufficientData { nodes: 0 }));
    assert!(err.to_string().contains("at least 2"));
}

/// Temp path namespaced by process id so parallel test runs on one
/// machine cannot collide.
fn slate_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gambit_slate_{tag}_{}.json", std::process::id()))
}

#[test]
fn slate_file_loads_and_rejects_garbage() {
    let good = slate_path("good");
    std::fs::write(
        &good,
        r#"[{"home": "LAL", "away": "GSW", "spread": 7.0}]"#,
    )
    .unwrap();
    let slate = load_slate(&good).unwrap();
    assert_eq!(slate.len(), 1);
    assert_eq!(slate[0].home, "LAL");
    let _ = std::fs::remove_file(&good);

    let bad = slate_path("bad");
    std::fs::write(&bad, "not json at all").unwrap();
    assert!(matches!(load_slate(&bad), Err(GambitError::Json(_))));
    let _ = std::fs::remove_file(&bad);

    let missing = slate_path("missing");
    assert!(matches!(load_slate(&missing), Err(GambitError::Io(_))));
}
