// File: crates/liftplot/src/histogram.rs
// Summary: Rep-count histogram with unit-width bins over a fixed rep domain.

use std::ops::Range;

use liftplot_chart::Bin;

use crate::record::Record;

pub const DEFAULT_MIN_REPS: u32 = 5;
/// Exclusive.
pub const DEFAULT_MAX_REPS: u32 = 16;

/// Set counts per rep count over `[min_reps, max_reps)`. Each integer rep
/// count owns the bin `[reps - 0.5, reps + 0.5)`; reps outside the domain
/// are not counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepHistogram {
    domain: Range<u32>,
    counts: Vec<usize>,
}

impl RepHistogram {
    pub fn new(min_reps: u32, max_reps: u32) -> Self {
        let domain = min_reps..max_reps.max(min_reps);
        let counts = vec![0; domain.len()];
        Self { domain, counts }
    }

    pub fn from_records(records: &[Record], min_reps: u32, max_reps: u32) -> Self {
        let mut hist = Self::new(min_reps, max_reps);
        for r in records {
            hist.add(r.reps);
        }
        hist
    }

    /// Count one set; returns false when `reps` falls outside the domain.
    pub fn add(&mut self, reps: u32) -> bool {
        if !self.domain.contains(&reps) {
            return false;
        }
        self.counts[(reps - self.domain.start) as usize] += 1;
        true
    }

    pub fn domain(&self) -> Range<u32> {
        self.domain.clone()
    }

    pub fn count_for(&self, reps: u32) -> Option<usize> {
        self.domain.contains(&reps).then(|| self.counts[(reps - self.domain.start) as usize])
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn bins(&self) -> Vec<Bin> {
        self.domain
            .clone()
            .zip(&self.counts)
            .map(|(reps, &count)| Bin { left: reps as f64 - 0.5, right: reps as f64 + 0.5, count: count as f64 })
            .collect()
    }
}

impl Default for RepHistogram {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_REPS, DEFAULT_MAX_REPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_are_centered_on_integers() {
        let bins = RepHistogram::default().bins();
        assert_eq!(bins.len(), 11);
        assert_eq!((bins[0].left, bins[0].right), (4.5, 5.5));
        assert_eq!((bins[10].left, bins[10].right), (14.5, 15.5));
    }

    #[test]
    fn domain_edges() {
        let mut h = RepHistogram::default();
        assert!(!h.add(4));
        assert!(h.add(5));
        assert!(h.add(15));
        assert!(!h.add(16));
        assert_eq!(h.count_for(5), Some(1));
        assert_eq!(h.count_for(15), Some(1));
        assert_eq!(h.count_for(16), None);
        assert_eq!(h.total(), 2);
    }

    #[test]
    fn inverted_domain_is_empty() {
        let h = RepHistogram::new(10, 3);
        assert!(h.bins().is_empty());
        assert_eq!(h.total(), 0);
    }
}
