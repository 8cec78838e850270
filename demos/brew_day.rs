// ============================================================================
// Brew Day Example
// ============================================================================
//
// Run with structured logs:
//   RUST_LOG=debug cargo run --example brew_day --features logging

use brew_calc::prelude::*;
use rust_decimal::Decimal;

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> Result<(), BrewError> {
    init_logging();

    println!("=== Brew Day: American Wheat ===\n");

    let planner = BrewPlannerBuilder::new()
        .with_config(BrewhouseConfig::cooler_mash_tun().with_trub_loss(Decimal::new(25, 2)))
        .with_mash_efficiency(Decimal::new(68, 2))
        .build()?;

    let recipe = [
        planner.grain("American Wheat", 0.67)?,
        planner.grain("American Pale (2-Row)", 0.33)?,
    ];

    let sheet = planner.plan(1.052, 5.5, &recipe)?;

    println!("Sheet {} ({})", sheet.id, sheet.created_at);
    println!("Target: OG {} / {} gal\n", sheet.target_gravity, sheet.volume);

    println!("Grain bill:");
    for line in sheet.grain_bill_lines() {
        println!("  {}", line);
    }
    println!("  Total: {} lbs\n", sheet.total_grain_weight);

    println!("Mash:");
    println!("  Strike water: {} qt at {} F", sheet.mash_water, sheet.strike_temp);

    // Step from the saccharification rest up to mash-out with boiling water
    let infusion = planner.infusion_for_step(
        planner.config().mash_temp,
        168,
        212,
        sheet.mash_water,
        sheet.total_grain_weight,
    )?;
    println!("  Mash-out infusion: {} qt of boiling water", infusion);

    println!("\nWater:");
    println!("  Collect {} gal in total", sheet.required_water);

    #[cfg(feature = "serde")]
    if let Ok(json) = sheet.to_json() {
        println!("\n{}", json);
    }

    Ok(())
}
