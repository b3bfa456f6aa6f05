// src/analysis/payoff.rs

use crate::model::demand::DemandDistribution;
use crate::model::prices::PriceSet;

/// Single-period profit for one (order quantity, realized demand) pair.
///
/// # Formula
/// - Ordered more than demanded: revenue on the `demand` units actually
///   sold, full cost on everything ordered, salvage on the leftovers.
/// - Demand meets or exceeds the order (including `q == demand`): every
///   ordered unit sells at the margin; no salvage term.
///
/// Demand beyond the order quantity is simply lost: this variant of the
/// newsvendor model carries no shortage cost.
pub fn payoff(prices: &PriceSet, order_quantity: u32, demand: u32) -> f64 {
    let q = f64::from(order_quantity);
    let d = f64::from(demand);

    if order_quantity > demand {
        d * prices.sell_price - q * prices.cost_price + (q - d) * prices.salvage_price
    } else {
        q * (prices.sell_price - prices.cost_price)
    }
}

/// One demand level's row of the payoff table.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffRow {
    pub demand: u32,
    pub observed_days: u32,
    pub probability: f64,
    /// Payoffs aligned with `PayoffTable::order_quantities`.
    pub payoffs: Vec<f64>,
}

/// Payoff matrix: one row per demand level, one column per candidate
/// order quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffTable {
    pub order_quantities: Vec<u32>,
    pub rows: Vec<PayoffRow>,
}

/// Enumerates the full payoff matrix over the distribution's demand levels
/// and its candidate order quantities.
pub fn build_payoff_table(prices: &PriceSet, distribution: &DemandDistribution) -> PayoffTable {
    let order_quantities = distribution.candidate_quantities();

    let rows = distribution
        .records()
        .iter()
        .map(|record| PayoffRow {
            demand: record.demand,
            observed_days: record.observed_days,
            probability: distribution.probability(record),
            payoffs: order_quantities
                .iter()
                .map(|&q| payoff(prices, q, record.demand))
                .collect(),
        })
        .collect();

    PayoffTable {
        order_quantities,
        rows,
    }
}
