// src/analysis/mod.rs

pub mod expected;
pub mod payoff;

use crate::error::Result;
use crate::model::demand::DemandDistribution;
use crate::model::prices::{EconomicsWarning, PriceSet};

use self::expected::{expected_payoffs, select_optimal, ExpectedPayoff, OptimalOrder};
use self::payoff::{build_payoff_table, PayoffTable};

/// The complete result of one newsvendor computation.
///
/// Everything the rendering layer needs: the raw payoff matrix, the
/// chartable expected-payoff series, the arg-max, and any degenerate
/// economics detected on the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub warnings: Vec<EconomicsWarning>,
    pub table: PayoffTable,
    pub expected: Vec<ExpectedPayoff>,
    pub optimal: OptimalOrder,
}

/// Runs the full computation: payoff table, expected payoffs, arg-max.
///
/// Pure function of its inputs; calling it twice with the same prices and
/// distribution yields bit-identical results.
pub fn analyze(prices: &PriceSet, distribution: &DemandDistribution) -> Result<Analysis> {
    let warnings = prices.warnings();
    let table = build_payoff_table(prices, distribution);
    let expected = expected_payoffs(&table);
    let optimal = select_optimal(&expected)?;

    Ok(Analysis {
        warnings,
        table,
        expected,
        optimal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demand::DemandRecord;

    #[test]
    fn reference_run_end_to_end() {
        let prices = PriceSet::new(60.0, 90.0, 30.0).unwrap();
        let analysis = analyze(&prices, &DemandDistribution::reference()).unwrap();

        assert!(analysis.warnings.is_empty());
        assert_eq!(analysis.optimal.quantity, 14);
        assert!((analysis.optimal.expected_profit - 396.0).abs() < 1e-9);
        assert_eq!(analysis.expected.len(), 4);
        assert_eq!(analysis.table.rows.len(), 4);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let prices = PriceSet::new(60.0, 90.0, 30.0).unwrap();
        let dist = DemandDistribution::reference();
        let first = analyze(&prices, &dist).unwrap();
        let second = analyze(&prices, &dist).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_economics_still_produce_a_full_result() {
        let prices = PriceSet::new(90.0, 60.0, 30.0).unwrap();
        let analysis = analyze(&prices, &DemandDistribution::reference()).unwrap();

        assert_eq!(analysis.warnings, vec![EconomicsWarning::SellBelowCost]);
        assert_eq!(analysis.expected.len(), 4);
        // Selling below cost loses money at every quantity.
        assert!(analysis.expected.iter().all(|p| p.expected_payoff < 0.0));
    }

    #[test]
    fn flat_payoffs_tie_break_to_the_smallest_quantity() {
        // cost == sell == salvage makes every cell zero, so every quantity
        // ties and the selector must pick the minimum demand level.
        let prices = PriceSet::new(50.0, 50.0, 50.0).unwrap();
        let analysis = analyze(&prices, &DemandDistribution::reference()).unwrap();
        assert_eq!(analysis.optimal.quantity, 12);
        assert_eq!(analysis.optimal.expected_profit, 0.0);
    }

    #[test]
    fn works_with_synthetic_distributions() {
        let dist = DemandDistribution::new(vec![
            DemandRecord {
                demand: 2,
                observed_days: 1,
            },
            DemandRecord {
                demand: 4,
                observed_days: 1,
            },
        ])
        .unwrap();
        let prices = PriceSet::new(1.0, 3.0, 0.0).unwrap();
        let analysis = analyze(&prices, &dist).unwrap();

        // q in 2..=4; payoffs: q=2 -> 4 always; q=3 -> (4-3)=... demand 2:
        // 2*3 - 3*1 = 3, demand 4: 6; E = 4.5; q=4 -> demand 2: 6-4 = 2,
        // demand 4: 8; E = 5.
        assert_eq!(analysis.table.order_quantities, vec![2, 3, 4]);
        assert_eq!(analysis.optimal.quantity, 4);
        assert!((analysis.optimal.expected_profit - 5.0).abs() < 1e-9);
    }
}
