//! Stackup calculation - worst-case and RSS tolerance chain aggregation
//!
//! A stackup is an ordered chain of linear features, each with a nominal length
//! and a symmetric (±) tolerance. The functions here are pure: they borrow the
//! caller's entries, keep no state, and never fail. Non-finite input propagates
//! to non-finite output; rejecting it is the intake layer's job.

use serde::{Deserialize, Serialize};

/// Fixed unit for every length and tolerance
pub const UNITS: &str = "mm";

/// A single linear feature in the chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureEntry {
    /// Nominal length (signed)
    pub length: f64,

    /// Symmetric tolerance, non-negative by convention
    pub tolerance: f64,
}

impl FeatureEntry {
    pub fn new(length: f64, tolerance: f64) -> Self {
        Self { length, tolerance }
    }
}

/// Aggregate stack-up statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StackupResult {
    /// Sum of nominal lengths
    pub total_length: f64,

    /// Worst-case bound: sum of tolerances (L1 norm)
    pub worst_case: f64,

    /// Statistical bound: root-sum-square of tolerances (L2 norm)
    pub rss: f64,
}

/// Interval of possible total lengths for a given bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBand {
    pub low: f64,
    pub high: f64,
}

impl RangeBand {
    /// Width of the band (2 × bound)
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Center of the band (the nominal total)
    pub fn center(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// One bar of the tolerance breakdown chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBar {
    /// 1-based position of the feature in the chain
    pub label: usize,

    /// Tolerance of that feature
    pub tolerance: f64,
}

/// Everything a renderer needs for one stackup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackupReport {
    /// Input entries in caller order
    pub features: Vec<FeatureEntry>,

    /// Aggregate statistics
    pub result: StackupResult,

    /// Per-feature tolerance bars
    pub breakdown: Vec<FeatureBar>,

    /// Band implied by the worst-case bound
    pub worst_case_band: RangeBand,

    /// Band implied by the RSS bound
    pub rss_band: RangeBand,
}

/// Aggregate a chain of features into total length, worst-case and RSS bounds.
///
/// Single pass with three running accumulators. An empty chain yields zeros.
pub fn compute(entries: &[FeatureEntry]) -> StackupResult {
    let mut total_length = 0.0;
    let mut worst_case = 0.0;
    let mut sum_squares = 0.0;

    for entry in entries {
        total_length += entry.length;
        worst_case += entry.tolerance;
        sum_squares += entry.tolerance * entry.tolerance;
    }

    StackupResult {
        total_length,
        worst_case,
        rss: sum_squares.sqrt(),
    }
}

/// Per-feature tolerance series labelled by 1-based position
pub fn per_feature_series(entries: &[FeatureEntry]) -> Vec<FeatureBar> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| FeatureBar {
            label: i + 1,
            tolerance: entry.tolerance,
        })
        .collect()
}

/// Band `[total_length - bound, total_length + bound]`
pub fn range_band(total_length: f64, bound: f64) -> RangeBand {
    RangeBand {
        low: total_length - bound,
        high: total_length + bound,
    }
}

/// Compute the result, breakdown and both bands in one call
pub fn report(entries: &[FeatureEntry]) -> StackupReport {
    let result = compute(entries);
    tracing::debug!(
        features = entries.len(),
        total_length = result.total_length,
        worst_case = result.worst_case,
        rss = result.rss,
        "computed stackup"
    );

    StackupReport {
        features: entries.to_vec(),
        breakdown: per_feature_series(entries),
        worst_case_band: range_band(result.total_length, result.worst_case),
        rss_band: range_band(result.total_length, result.rss),
        result,
    }
}
