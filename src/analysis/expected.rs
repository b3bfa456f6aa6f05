// src/analysis/expected.rs

use serde::Serialize;

use crate::analysis::payoff::PayoffTable;
use crate::error::{NewsvendorError, Result};

/// One point of the expected-payoff series (the chartable output).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpectedPayoff {
    pub order_quantity: u32,
    pub expected_payoff: f64,
}

/// The arg-max of the expected-payoff series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalOrder {
    pub quantity: u32,
    pub expected_profit: f64,
}

/// Probability-weighted payoff for every candidate order quantity, in the
/// table's quantity order.
pub fn expected_payoffs(table: &PayoffTable) -> Vec<ExpectedPayoff> {
    table
        .order_quantities
        .iter()
        .enumerate()
        .map(|(column, &order_quantity)| ExpectedPayoff {
            order_quantity,
            expected_payoff: table
                .rows
                .iter()
                .map(|row| row.probability * row.payoffs[column])
                .sum(),
        })
        .collect()
}

/// Selects the quantity with the maximum expected payoff.
///
/// Ties on exact equality go to the SMALLEST quantity (lowest inventory
/// risk). The comparison is explicit so the result does not depend on the
/// order of the series.
pub fn select_optimal(series: &[ExpectedPayoff]) -> Result<OptimalOrder> {
    let mut best: Option<&ExpectedPayoff> = None;
    for point in series {
        best = match best {
            None => Some(point),
            Some(current) => {
                if point.expected_payoff > current.expected_payoff
                    || (point.expected_payoff == current.expected_payoff
                        && point.order_quantity < current.order_quantity)
                {
                    Some(point)
                } else {
                    Some(current)
                }
            }
        };
    }

    let best = best.ok_or(NewsvendorError::EmptyDomain)?;
    Ok(OptimalOrder {
        quantity: best.order_quantity,
        expected_profit: best.expected_payoff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::payoff::build_payoff_table;
    use crate::model::demand::DemandDistribution;
    use crate::model::prices::PriceSet;

    #[test]
    fn reference_series_regression() {
        let prices = PriceSet::new(60.0, 90.0, 30.0).unwrap();
        let table = build_payoff_table(&prices, &DemandDistribution::reference());
        let series = expected_payoffs(&table);

        let values: Vec<f64> = series.iter().map(|p| p.expected_payoff).collect();
        for (got, want) in values.iter().zip([360.0, 384.0, 396.0, 390.0]) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }

        let optimal = select_optimal(&series).unwrap();
        assert_eq!(optimal.quantity, 14);
        assert!((optimal.expected_profit - 396.0).abs() < 1e-9);
    }

    #[test]
    fn ties_select_the_smallest_quantity() {
        let series = vec![
            ExpectedPayoff {
                order_quantity: 10,
                expected_payoff: 5.0,
            },
            ExpectedPayoff {
                order_quantity: 11,
                expected_payoff: 7.0,
            },
            ExpectedPayoff {
                order_quantity: 12,
                expected_payoff: 7.0,
            },
        ];
        let optimal = select_optimal(&series).unwrap();
        assert_eq!(optimal.quantity, 11);
    }

    #[test]
    fn tie_break_does_not_depend_on_series_order() {
        let series = vec![
            ExpectedPayoff {
                order_quantity: 12,
                expected_payoff: 7.0,
            },
            ExpectedPayoff {
                order_quantity: 11,
                expected_payoff: 7.0,
            },
        ];
        let optimal = select_optimal(&series).unwrap();
        assert_eq!(optimal.quantity, 11);
    }

    #[test]
    fn empty_series_is_an_empty_domain() {
        assert_eq!(
            select_optimal(&[]).unwrap_err(),
            NewsvendorError::EmptyDomain
        );
    }
}
