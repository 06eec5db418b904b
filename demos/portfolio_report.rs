use quantvec::{
    PortfolioAnalyzer, ReturnsStore, Vector, DIVERSIFICATION_THRESHOLD, PAIRS_TRADING_THRESHOLD,
};

fn sample_portfolio() -> Vec<(String, Vector)> {
    // 5 assets, 20 trading days of daily returns
    vec![
        (
            "SPY".to_string(),
            Vector::from_slice(&[
                0.01, -0.02, 0.015, -0.01, 0.02, -0.015, 0.005, 0.01, -0.01, 0.02, 0.008, -0.012,
                0.018, -0.008, 0.015, -0.01, 0.012, 0.005, -0.015, 0.01,
            ]),
        ),
        (
            "QQQ".to_string(),
            Vector::from_slice(&[
                0.012, -0.025, 0.018, -0.008, 0.025, -0.012, 0.008, 0.015, -0.008, 0.025, 0.01,
                -0.015, 0.022, -0.01, 0.018, -0.012, 0.015, 0.008, -0.018, 0.012,
            ]),
        ),
        (
            "GLD".to_string(),
            Vector::from_slice(&[
                -0.005, 0.01, -0.002, 0.015, -0.01, 0.008, -0.003, -0.005, 0.012, -0.008, 0.002,
                0.008, -0.005, 0.01, -0.008, 0.012, -0.002, 0.005, 0.008, -0.005,
            ]),
        ),
        (
            "TLT".to_string(),
            Vector::from_slice(&[
                0.003, 0.008, -0.002, 0.012, -0.005, 0.01, -0.003, 0.005, 0.008, -0.005, 0.008,
                0.005, -0.008, 0.01, -0.005, 0.008, -0.002, 0.008, 0.005, -0.008,
            ]),
        ),
        (
            "VNQ".to_string(),
            Vector::from_slice(&[
                0.008, -0.015, 0.012, -0.008, 0.015, -0.01, 0.005, 0.008, -0.012, 0.015, 0.005,
                -0.01, 0.012, -0.005, 0.01, -0.008, 0.008, 0.002, -0.01, 0.008,
            ]),
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Portfolio Correlation Report");
    println!("============================\n");

    let portfolio = sample_portfolio();
    let analyzer = PortfolioAnalyzer::new(portfolio.clone());

    // Per-asset statistics
    println!("PORTFOLIO STATISTICS");
    println!(
        "{:<8} {:>9} {:>9} {:>8} {:>9} {:>9}",
        "Asset", "Mean", "Vol", "Sharpe", "Max", "Min"
    );
    println!("{}", "-".repeat(56));
    for stat in analyzer.asset_statistics()? {
        println!(
            "{:<8} {:>9.4} {:>9.4} {:>8.2} {:>9.4} {:>9.4}",
            stat.asset,
            stat.mean_return,
            stat.volatility,
            stat.sharpe_approx,
            stat.max_return,
            stat.min_return
        );
    }

    // Correlation matrix
    let matrix = analyzer.correlation_matrix()?;
    println!("\nCORRELATION MATRIX");
    print!("{:>8}", "");
    for asset in &matrix.assets {
        print!(" {:>7}", asset);
    }
    println!();
    for (i, asset) in matrix.assets.iter().enumerate() {
        print!("{:>7}:", asset);
        for j in 0..matrix.size() {
            print!(" {:>7.3}", matrix.get(i, j).unwrap());
        }
        println!();
    }

    // Selection filters
    println!(
        "\nDIVERSIFICATION OPPORTUNITIES (|corr| < {})",
        DIVERSIFICATION_THRESHOLD
    );
    let diversified = analyzer.diversification_pairs(DIVERSIFICATION_THRESHOLD)?;
    if diversified.is_empty() {
        println!("  none found");
    }
    for pair in diversified.iter().take(3) {
        println!(
            "  {} + {}: correlation = {:.3}",
            pair.asset_a, pair.asset_b, pair.correlation
        );
    }

    println!(
        "\nPAIRS TRADING CANDIDATES (corr >= {})",
        PAIRS_TRADING_THRESHOLD
    );
    let candidates = analyzer.pairs_trading_candidates(PAIRS_TRADING_THRESHOLD)?;
    if candidates.is_empty() {
        println!("  none found");
    }
    for pair in candidates.iter().take(3) {
        println!(
            "  {} / {}: correlation = {:.3}",
            pair.asset_a, pair.asset_b, pair.correlation
        );
    }

    // Persistence round-trip
    let temp_path = std::env::temp_dir().join("demo_returns.json");
    let store = ReturnsStore::new(&temp_path);
    store.save(&portfolio)?;
    let loaded = store.load()?;
    println!(
        "\nSaved and reloaded {} return series via {:?}",
        loaded.len(),
        temp_path
    );
    store.clear()?;

    Ok(())
}
