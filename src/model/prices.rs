// src/model/prices.rs

use std::fmt;

use crate::error::{NewsvendorError, Result};

/// The three unit prices driving the single-period payoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSet {
    pub cost_price: f64,
    pub sell_price: f64,
    pub salvage_price: f64,
}

/// Economically degenerate but computable configurations.
///
/// These never abort the computation; they are reported alongside the
/// results so the caller can flag them to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomicsWarning {
    /// Selling below cost: expected profit will be negative at every quantity.
    SellBelowCost,
    /// Salvaging above cost: over-ordering is free money, the model degenerates.
    SalvageAboveCost,
}

impl fmt::Display for EconomicsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EconomicsWarning::SellBelowCost => {
                write!(f, "selling price is below cost price")
            }
            EconomicsWarning::SalvageAboveCost => {
                write!(f, "salvage price is above cost price")
            }
        }
    }
}

impl PriceSet {
    /// Validates and builds a price set.
    ///
    /// Negative or non-finite prices are rejected with `InvalidPriceInput`.
    /// Ordering between the prices is deliberately NOT enforced here; see
    /// [`PriceSet::warnings`].
    pub fn new(cost_price: f64, sell_price: f64, salvage_price: f64) -> Result<Self> {
        for (name, value) in [
            ("cost price", cost_price),
            ("selling price", sell_price),
            ("salvage price", salvage_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NewsvendorError::InvalidPriceInput(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(Self {
            cost_price,
            sell_price,
            salvage_price,
        })
    }

    /// Detects degenerate price orderings. Empty for sane inputs.
    pub fn warnings(&self) -> Vec<EconomicsWarning> {
        let mut warnings = Vec::new();
        if self.sell_price < self.cost_price {
            warnings.push(EconomicsWarning::SellBelowCost);
        }
        if self.salvage_price > self.cost_price {
            warnings.push(EconomicsWarning::SalvageAboveCost);
        }
        warnings
    }
}
