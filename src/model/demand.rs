// src/model/demand.rs

use crate::error::{NewsvendorError, Result};

/// One row of sales history: a demand level and how many days it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandRecord {
    pub demand: u32,
    pub observed_days: u32,
}

/// An empirical demand distribution built from observed frequencies.
///
/// The records are kept in their given order; probabilities are derived on
/// demand from `observed_days / total_days`, so they always sum to 1 (up to
/// floating-point rounding).
#[derive(Debug, Clone, PartialEq)]
pub struct DemandDistribution {
    records: Vec<DemandRecord>,
    total_days: u32,
}

impl DemandDistribution {
    /// Builds a distribution from raw frequency records.
    ///
    /// Fails with `InvalidDistribution` when the total observed days is zero
    /// (which includes the empty-records case): probabilities would require
    /// dividing by zero.
    pub fn new(records: Vec<DemandRecord>) -> Result<Self> {
        let total_days: u32 = records.iter().map(|r| r.observed_days).sum();
        if total_days == 0 {
            return Err(NewsvendorError::InvalidDistribution(
                "total observed days is zero".to_string(),
            ));
        }
        Ok(Self {
            records,
            total_days,
        })
    }

    /// The fixed reference dataset: 120 days of strawberry sales history.
    ///
    /// Demand of 12..=15 boxes observed on 12/24/36/48 days respectively,
    /// giving probabilities 0.1, 0.2, 0.3, 0.4.
    pub fn reference() -> Self {
        Self {
            records: vec![
                DemandRecord {
                    demand: 12,
                    observed_days: 12,
                },
                DemandRecord {
                    demand: 13,
                    observed_days: 24,
                },
                DemandRecord {
                    demand: 14,
                    observed_days: 36,
                },
                DemandRecord {
                    demand: 15,
                    observed_days: 48,
                },
            ],
            total_days: 120,
        }
    }

    pub fn records(&self) -> &[DemandRecord] {
        &self.records
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Empirical probability of one record's demand level.
    pub fn probability(&self, record: &DemandRecord) -> f64 {
        f64::from(record.observed_days) / f64::from(self.total_days)
    }

    /// Candidate order quantities: every integer from the lowest to the
    /// highest observed demand level, inclusive.
    pub fn candidate_quantities(&self) -> Vec<u32> {
        let min = self.records.iter().map(|r| r.demand).min();
        let max = self.records.iter().map(|r| r.demand).max();
        match (min, max) {
            (Some(lo), Some(hi)) => (lo..=hi).collect(),
            _ => Vec::new(),
        }
    }
}
