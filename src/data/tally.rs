// src/data/tally.rs — Win tally and first-occurrence unique lists

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::Serialize;

use crate::data::record::Record;

/// Number of wins per winner name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinTally {
    counts: HashMap<String, usize>,
    // Winner names in first-occurrence order, for stable ranking.
    first_seen: Vec<String>,
}

/// One line of the ranked tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub name: String,
    pub wins: usize,
}

impl WinTally {
    pub fn from_records(records: &[Record]) -> Self {
        let mut tally = WinTally::default();
        for r in records {
            match tally.counts.get_mut(&r.winner) {
                Some(n) => *n += 1,
                None => {
                    tally.counts.insert(r.winner.clone(), 1);
                    tally.first_seen.push(r.winner.clone());
                }
            }
        }
        tally
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    /// Wins for `name`, zero when the name never won.
    pub fn wins(&self, name: &str) -> usize {
        self.get(name).unwrap_or(0)
    }

    /// Sum of all counts. Equals the number of records tallied.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most wins first; ties keep first-occurrence order.
    pub fn ranked(&self) -> Vec<TallyEntry> {
        let mut entries: Vec<TallyEntry> = self
            .first_seen
            .iter()
            .map(|name| TallyEntry {
                name: name.clone(),
                wins: self.wins(name),
            })
            .collect();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));
        entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Distinct values in the order they first appear.
pub fn first_occurrence<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v.clone()) {
            out.push(v);
        }
    }
    out
}

pub fn unique_winners(records: &[Record]) -> Vec<String> {
    first_occurrence(records.iter().map(|r| r.winner.clone()))
}

pub fn unique_years(records: &[Record]) -> Vec<i32> {
    first_occurrence(records.iter().map(|r| r.year))
}
