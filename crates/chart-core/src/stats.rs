// File: crates/chart-core/src/stats.rs
// Summary: Grouping and descriptive statistics (R-7 quartiles, box summaries, group means).

use std::hash::Hash;

use indexmap::IndexMap;

use crate::data::Record;
use crate::error::ComputationError;

/// Five-number summary of one group.
/// Contract: `min <= q1 <= median <= q3 <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    /// Interquartile range.
    pub fn iqr(&self) -> f64 { self.q3 - self.q1 }
}

/// One aggregated value per group key.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatePoint<K> {
    pub key: K,
    pub value: f64,
}

/// Partition records by `key`. Groups are ordered by first appearance and
/// every record lands in exactly one group.
pub fn group_by<'a, K, F>(records: &'a [Record], key: F) -> IndexMap<K, Vec<&'a Record>>
where
    K: Hash + Eq,
    F: Fn(&Record) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a Record>> = IndexMap::new();
    for r in records {
        groups.entry(key(r)).or_default().push(r);
    }
    groups
}

/// Two-level partition. Only combinations that occur are present.
pub fn group_by_nested<'a, K1, K2, F1, F2>(
    records: &'a [Record],
    outer: F1,
    inner: F2,
) -> IndexMap<K1, IndexMap<K2, Vec<&'a Record>>>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
    F1: Fn(&Record) -> K1,
    F2: Fn(&Record) -> K2,
{
    let mut groups: IndexMap<K1, IndexMap<K2, Vec<&'a Record>>> = IndexMap::new();
    for r in records {
        groups
            .entry(outer(r))
            .or_default()
            .entry(inner(r))
            .or_default()
            .push(r);
    }
    groups
}

/// Quantile of an ascending-sorted slice using linear interpolation between
/// order statistics at rank `(n - 1) * p` (R-7). `p` is clamped to [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    if lo + 1 >= n {
        return Some(sorted[n - 1]);
    }
    let frac = h - lo as f64;
    Some(sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac)
}

pub fn box_stats(values: &[f64]) -> Result<BoxStats, ComputationError> {
    check_finite(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let q = |p: f64| quantile_sorted(&sorted, p).ok_or(ComputationError::EmptyGroup);
    Ok(BoxStats {
        min: q(0.0)?,
        q1: q(0.25)?,
        median: q(0.5)?,
        q3: q(0.75)?,
        max: q(1.0)?,
    })
}

/// Arithmetic mean. An empty slice is an error rather than NaN.
pub fn mean(values: &[f64]) -> Result<f64, ComputationError> {
    if values.is_empty() {
        return Err(ComputationError::EmptyGroup);
    }
    check_finite(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Box summary per group, in group order.
pub fn rollup_box_stats<K, F>(records: &[Record], key: F) -> Result<IndexMap<K, BoxStats>, ComputationError>
where
    K: Hash + Eq,
    F: Fn(&Record) -> K,
{
    group_by(records, key)
        .into_iter()
        .map(|(k, rows)| Ok((k, box_stats(&likes(&rows))?)))
        .collect()
}

/// Mean likes per group, in group order.
pub fn rollup_mean<K, F>(records: &[Record], key: F) -> Result<Vec<AggregatePoint<K>>, ComputationError>
where
    K: Hash + Eq,
    F: Fn(&Record) -> K,
{
    group_by(records, key)
        .into_iter()
        .map(|(key, rows)| Ok(AggregatePoint { key, value: mean(&likes(&rows))? }))
        .collect()
}

/// Mean likes per (outer, inner) combination, flattened outer-first.
pub fn rollup_mean_nested<K1, K2, F1, F2>(
    records: &[Record],
    outer: F1,
    inner: F2,
) -> Result<Vec<AggregatePoint<(K1, K2)>>, ComputationError>
where
    K1: Hash + Eq + Clone,
    K2: Hash + Eq,
    F1: Fn(&Record) -> K1,
    F2: Fn(&Record) -> K2,
{
    let mut out = Vec::new();
    for (k1, inner_groups) in group_by_nested(records, outer, inner) {
        for (k2, rows) in inner_groups {
            out.push(AggregatePoint { key: (k1.clone(), k2), value: mean(&likes(&rows))? });
        }
    }
    Ok(out)
}

fn likes(rows: &[&Record]) -> Vec<f64> {
    rows.iter().map(|r| r.likes as f64).collect()
}

fn check_finite(values: &[f64]) -> Result<(), ComputationError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&v) => Err(ComputationError::NonFinite(v)),
        None => Ok(()),
    }
}
