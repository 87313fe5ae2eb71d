//! Runs every Tradekit routine on synthetic data and prints the results.
//!
//! `RUST_LOG=tradekit=debug cargo run --example walkthrough` shows the
//! library's trace events.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use tracing_subscriber::EnvFilter;

use tradekit::{
    aggregate, compute_parabolic_sar, compute_rsi, estimate_vix, simulate, Result,
    SimulationConfig, TradekitError,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(config.seed);

    // Random-walk close prices around the initial price
    let mut level = config.initial_price;
    let price_data: Vec<f64> = (0..config.day_count)
        .map(|_| {
            let step: f64 = StandardNormal.sample(&mut rng);
            level += step;
            level
        })
        .collect();

    let paths = simulate(&mut rng, config.initial_price, config.day_count, config.simulation_count)?;
    // Wilder's convention: no losses at all reads as 100
    let rsi = match compute_rsi(&price_data, 14) {
        Err(TradekitError::DegenerateInput { .. }) => 100.0,
        other => other?,
    };
    let sar = compute_parabolic_sar(&price_data, 0.02, 0.2)?;
    let consensus = aggregate(paths.rows())?;
    let quotes: Vec<f64> = (1..=10).map(f64::from).collect();
    let vix = estimate_vix(&quotes, 30.0)?;

    println!("Monte Carlo Result:");
    for row in paths.rows() {
        println!("{:?}", row);
    }

    println!("\nRSI Result:");
    println!("{rsi}");

    println!("\nParabolic SAR Result:");
    println!("{:?}", sar);

    println!("\nWisdom of Crowds Result:");
    println!("{:?}", consensus);

    println!("\nVIX Result:");
    println!("{vix}");

    Ok(())
}
