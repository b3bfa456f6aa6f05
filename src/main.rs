mod analysis;
mod error;
mod io;
mod model;

use std::env;
use std::process;

use crate::io::{input, reporting};
use crate::model::demand::DemandDistribution;
use crate::model::prices::PriceSet;

const DEFAULT_COST_PRICE: f64 = 60.0;
const DEFAULT_SELL_PRICE: f64 = 90.0;
const DEFAULT_SALVAGE_PRICE: f64 = 30.0;

const CHART_FILE: &str = "expected_payoff_chart.csv";

fn main() {
    println!("=== Newsvendor Order-Quantity Solver ===");

    // 1. COLLECT PRICES
    // Either three positional arguments (cost sell salvage), or interactive
    // prompts with the reference defaults.
    let prices = match collect_prices() {
        Ok(prices) => prices,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // 2. SURFACE DEGENERATE ECONOMICS (non-fatal)
    for warning in prices.warnings() {
        println!("Warning: {warning}. Results may be economically degenerate.");
    }

    // 3. LOAD THE DEMAND DISTRIBUTION
    // The 120-day reference sales history; the core accepts any distribution.
    let distribution = DemandDistribution::reference();

    // 4. RUN THE ANALYSIS
    let result = match analysis::analyze(&prices, &distribution) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // 5. PRINT THE PAYOFF TABLE AND EXPECTED PAYOFFS
    println!("\nPayoff Table:");
    reporting::print_payoff_table(&result.table);

    println!("\nExpected Payoffs:");
    reporting::print_expected_payoffs(&result.expected, &result.optimal);

    println!(
        "\nMaximum expected profit: {:.2}",
        result.optimal.expected_profit
    );
    println!(
        "Optimum number of boxes to order: {}",
        result.optimal.quantity
    );

    // 6. EXPORT CHART DATA
    match reporting::write_chart_data(CHART_FILE, &result.expected, &result.optimal) {
        Ok(_) => println!("\nChart data written to ./{CHART_FILE}"),
        Err(e) => eprintln!("Error writing chart data: {e}"),
    }
}

/// Reads the three prices from argv if given, otherwise prompts on stdin.
fn collect_prices() -> Result<PriceSet, Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    if !args.is_empty() {
        if args.len() != 3 {
            return Err("expected exactly three arguments: <cost> <sell> <salvage>".into());
        }
        let cost: f64 = args[0].parse()?;
        let sell: f64 = args[1].parse()?;
        let salvage: f64 = args[2].parse()?;
        return Ok(PriceSet::new(cost, sell, salvage)?);
    }

    let cost = input::read_price("Enter cost price", DEFAULT_COST_PRICE)?;
    let sell = input::read_price("Enter selling price", DEFAULT_SELL_PRICE)?;
    let salvage = input::read_price("Enter salvage price", DEFAULT_SALVAGE_PRICE)?;
    Ok(PriceSet::new(cost, sell, salvage)?)
}
