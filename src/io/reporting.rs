// src/io/reporting.rs

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::analysis::expected::{ExpectedPayoff, OptimalOrder};
use crate::analysis::payoff::PayoffTable;

/// Prints the payoff matrix: one row per demand level, one payoff column
/// per candidate order quantity. Values are rounded to 2 decimals for
/// display only; the table itself keeps full precision.
pub fn print_payoff_table(table: &PayoffTable) {
    print!("{:>8} {:>6} {:>12}", "Demand", "Days", "Probability");
    for q in &table.order_quantities {
        print!(" {:>10}", format!("Order {q}"));
    }
    println!();

    for row in &table.rows {
        print!(
            "{:>8} {:>6} {:>12.2}",
            row.demand, row.observed_days, row.probability
        );
        for payoff in &row.payoffs {
            print!(" {payoff:>10.2}");
        }
        println!();
    }
}

/// Prints the expected payoff per order quantity, marking the optimum.
pub fn print_expected_payoffs(series: &[ExpectedPayoff], optimal: &OptimalOrder) {
    println!("{:>14} {:>16}", "Order Quantity", "Expected Payoff");
    for point in series {
        let marker = if point.order_quantity == optimal.quantity {
            "  <- optimal"
        } else {
            ""
        };
        println!(
            "{:>14} {:>16.2}{marker}",
            point.order_quantity, point.expected_payoff
        );
    }
}

// One CSV row of the chart export.
#[derive(Debug, Clone, Copy, Serialize)]
struct ChartPoint {
    order_quantity: u32,
    expected_payoff: f64,
    optimal: bool,
}

/// Writes the expected-payoff series to a CSV file for the plotting
/// collaborator, with the optimal point flagged.
pub fn write_chart_data(
    file_path: &str,
    series: &[ExpectedPayoff],
    optimal: &OptimalOrder,
) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for point in series {
        wtr.serialize(ChartPoint {
            order_quantity: point.order_quantity,
            expected_payoff: point.expected_payoff,
            optimal: point.order_quantity == optimal.quantity,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
