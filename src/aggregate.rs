//! src/aggregate.rs
//
// Both aggregation stages are the same operation: group by key, sum values.
// A worker collects its own emission stream into a `CountTable` (the
// combiner stage), the orchestrator merges the per-worker tables into the
// final totals. Summation is commutative and associative, so neither the
// emission order nor the merge order affects the result.

use std::collections::HashMap;

/// One line of final output: a distinct n-gram key and its total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRecord {
    pub key: String,
    pub count: u64,
}

/// Per-key running sums.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountTable(HashMap<String, u64>);

impl CountTable {
    pub fn new() -> Self {
        CountTable(HashMap::new())
    }

    pub fn add(&mut self, key: String, count: u64) {
        *self.0.entry(key).or_insert(0) += count;
    }

    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts across all keys.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Folds another partial table into this one.
    pub fn merge(&mut self, other: CountTable) {
        for (key, count) in other.0 {
            self.add(key, count);
        }
    }

    /// Final records, in unspecified order.
    pub fn into_records(self) -> impl Iterator<Item = CountRecord> {
        self.0
            .into_iter()
            .map(|(key, count)| CountRecord { key, count })
    }
}

impl FromIterator<(String, u64)> for CountTable {
    /// Local pre-aggregation of an emission stream: same-key counts are
    /// summed before they leave the worker.
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut table = CountTable::new();
        for (key, count) in iter {
            table.add(key, count);
        }
        table
    }
}
