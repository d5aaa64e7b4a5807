use crate::error::{Error, Result};
use crate::{Belief, F, NodeId};
use serde::{Deserialize, Serialize};

/// Discrete reading of a node's belief
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Positive,     // flagged, belief above the high threshold
    Negative,     // cleared, belief below the low threshold
    Undetermined, // still gray
}

/// Classification cut points. Configuration, not constants: reporting
/// granularity varies by host (0.7/0.3 is a common relaxed variant).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub high: F,
    pub low: F,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { high: 0.8, low: 0.2 }
    }
}

impl Thresholds {
    pub fn new(high: F, low: F) -> Result<Self> {
        if !(0.0..=1.0).contains(&high) || !(0.0..=1.0).contains(&low) {
            return Err(Error::invalid(format!(
                "thresholds ({}, {}) outside [0, 1]",
                high, low
            )));
        }
        if low >= high {
            return Err(Error::invalid(format!(
                "low threshold {} must sit below high threshold {}",
                low, high
            )));
        }
        Ok(Self { high, low })
    }

    pub fn category(&self, value: Belief) -> Category {
        if value > self.high {
            Category::Positive
        } else if value < self.low {
            Category::Negative
        } else {
            Category::Undetermined
        }
    }
}

/// Classification summary over one belief mapping
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub positive: usize,
    pub negative: usize,
    pub undetermined: usize,
    pub categories: Vec<Category>,
}

impl Report {
    pub fn category(&self, v: NodeId) -> Category {
        self.categories[v]
    }

    pub fn total(&self) -> usize {
        self.categories.len()
    }

    /// Node ids currently flagged positive
    pub fn flagged(&self) -> Vec<NodeId> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Category::Positive)
            .map(|(v, _)| v)
            .collect()
    }
}

/// Threshold a belief mapping into categories with summary counts.
/// Pure function; the three counts always partition the node set.
pub fn classify(values: &[Belief], thresholds: Thresholds) -> Report {
    let categories: Vec<Category> = values.iter().map(|&b| thresholds.category(b)).collect();

    let positive = categories.iter().filter(|c| **c == Category::Positive).count();
    let negative = categories.iter().filter(|c| **c == Category::Negative).count();
    let undetermined = categories.len() - positive - negative;

    Report { positive, negative, undetermined, categories }
}

/// Nodes ordered from most to least suspicious
pub fn rank(values: &[Belief]) -> Vec<(NodeId, Belief)> {
    let mut order: Vec<(NodeId, Belief)> = values.iter().copied().enumerate().collect();
    order.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_invariant() {
        let values = vec![0.95, 0.85, 0.5, 0.15, 0.05, 0.5, 0.79];
        let report = classify(&values, Thresholds::default());

        assert_eq!(report.positive, 2);
        assert_eq!(report.negative, 2);
        assert_eq!(report.undetermined, 3);
        assert_eq!(
            report.positive + report.negative + report.undetermined,
            values.len()
        );
    }

    #[test]
    fn test_threshold_boundaries_stay_gray() {
        // Cut points are strict: landing exactly on one is undetermined
        let t = Thresholds::default();
        assert_eq!(t.category(0.8), Category::Undetermined);
        assert_eq!(t.category(0.2), Category::Undetermined);
        assert_eq!(t.category(0.8000001), Category::Positive);
        assert_eq!(t.category(0.1999999), Category::Negative);
    }

    #[test]
    fn test_relaxed_variant() {
        let t = Thresholds::new(0.7, 0.3).unwrap();
        assert_eq!(t.category(0.75), Category::Positive);
        assert_eq!(t.category(0.25), Category::Negative);
        assert_eq!(t.category(0.5), Category::Undetermined);
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        assert!(Thresholds::new(1.2, 0.2).is_err());
        assert!(Thresholds::new(0.8, -0.2).is_err());
        assert!(Thresholds::new(0.3, 0.7).is_err());
        assert!(Thresholds::new(0.5, 0.5).is_err());
    }

    #[test]
    fn test_report_accessors() {
        let values = vec![0.9, 0.5, 0.1];
        let report = classify(&values, Thresholds::default());

        assert_eq!(report.category(0), Category::Positive);
        assert_eq!(report.category(2), Category::Negative);
        assert_eq!(report.total(), 3);
        assert_eq!(report.flagged(), vec![0]);
    }

    #[test]
    fn test_rank_orders_by_belief() {
        let values = vec![0.2, 0.9, 0.5];
        let ranked = rank(&values);
        assert_eq!(ranked[0], (1, 0.9));
        assert_eq!(ranked[1], (2, 0.5));
        assert_eq!(ranked[2], (0, 0.2));
    }
}
