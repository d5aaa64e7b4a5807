use crate::error::{Error, Result};
use crate::{Belief, NodeId};
use serde::{Deserialize, Serialize};

/// Ground-truth nodes whose belief is pinned for every round
///
/// Positive seeds are pinned at 1.0, negative seeds at 0.0. Propagation
/// skips both classes unconditionally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSet {
    positive: Vec<NodeId>,
    negative: Vec<NodeId>,
}

impl SeedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the conventional endpoints: `per_class` lowest-index nodes as
    /// positive ground truth, the same number of highest-index nodes as
    /// negative ground truth.
    pub fn endpoints(n: usize, per_class: usize) -> Result<Self> {
        if per_class < 1 {
            return Err(Error::invalid("at least one seed per class required"));
        }
        if per_class * 2 > n {
            return Err(Error::invalid(format!(
                "{} seeds per class do not fit in {} nodes",
                per_class, n
            )));
        }

        let mut seeds = Self::new();
        for v in 0..per_class {
            seeds.pin_positive(v);
        }
        for v in n - per_class..n {
            seeds.pin_negative(v);
        }
        Ok(seeds)
    }

    pub fn pin_positive(&mut self, v: NodeId) {
        if !self.positive.contains(&v) {
            self.positive.push(v);
        }
    }

    pub fn pin_negative(&mut self, v: NodeId) {
        if !self.negative.contains(&v) {
            self.negative.push(v);
        }
    }

    pub fn positive(&self) -> &[NodeId] {
        &self.positive
    }

    pub fn negative(&self) -> &[NodeId] {
        &self.negative
    }

    pub fn contains(&self, v: NodeId) -> bool {
        self.positive.contains(&v) || self.negative.contains(&v)
    }

    /// Pinned value for a seed node, None for free nodes
    pub fn pinned_value(&self, v: NodeId) -> Option<Belief> {
        if self.positive.contains(&v) {
            Some(1.0)
        } else if self.negative.contains(&v) {
            Some(0.0)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Write pinned values into a belief mapping
    pub fn apply(&self, values: &mut [Belief]) {
        for &v in &self.positive {
            if let Some(slot) = values.get_mut(v) {
                *slot = 1.0;
            }
        }
        for &v in &self.negative {
            if let Some(slot) = values.get_mut(v) {
                *slot = 0.0;
            }
        }
    }

    /// Check the seed set against a graph of `n` nodes: both classes
    /// non-empty, all indices in range, classes disjoint.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.positive.is_empty() || self.negative.is_empty() {
            return Err(Error::invalid(
                "seed set needs at least one positive and one negative node",
            ));
        }
        for &v in self.positive.iter().chain(self.negative.iter()) {
            if v >= n {
                return Err(Error::invalid(format!(
                    "seed node {} out of range for {} nodes",
                    v, n
                )));
            }
        }
        for &v in &self.positive {
            if self.negative.contains(&v) {
                return Err(Error::invalid(format!(
                    "seed node {} pinned both positive and negative",
                    v
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let seeds = SeedSet::endpoints(20, 2).unwrap();
        assert_eq!(seeds.positive(), &[0, 1]);
        assert_eq!(seeds.negative(), &[18, 19]);
        assert_eq!(seeds.len(), 4);
        assert!(seeds.validate(20).is_ok());
    }

    #[test]
    fn test_endpoints_rejects_bad_counts() {
        assert!(SeedSet::endpoints(20, 0).is_err());
        assert!(SeedSet::endpoints(3, 2).is_err());
    }

    #[test]
    fn test_pinned_values() {
        let seeds = SeedSet::endpoints(5, 1).unwrap();
        assert_eq!(seeds.pinned_value(0), Some(1.0));
        assert_eq!(seeds.pinned_value(4), Some(0.0));
        assert_eq!(seeds.pinned_value(2), None);
        assert!(seeds.contains(0));
        assert!(!seeds.contains(2));
    }

    #[test]
    fn test_apply() {
        let seeds = SeedSet::endpoints(5, 1).unwrap();
        let mut values = vec![0.5; 5];
        seeds.apply(&mut values);
        assert_eq!(values, vec![1.0, 0.5, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_validate_rejects_inconsistent_sets() {
        let empty = SeedSet::new();
        assert!(empty.validate(5).is_err());

        let mut out_of_range = SeedSet::new();
        out_of_range.pin_positive(0);
        out_of_range.pin_negative(9);
        assert!(out_of_range.validate(5).is_err());

        let mut overlapping = SeedSet::new();
        overlapping.pin_positive(1);
        overlapping.pin_negative(1);
        assert!(overlapping.validate(5).is_err());
    }
}
