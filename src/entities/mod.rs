//! Entity type definitions
//!
//! - [`FeatureEntry`] - one linear feature: nominal length and ± tolerance
//! - [`StackupResult`] - total length, worst-case and RSS bounds
//! - [`StackupReport`] - result plus the chart series a renderer needs

pub mod stackup;

pub use stackup::{
    compute, per_feature_series, range_band, report, FeatureBar, FeatureEntry, RangeBand,
    StackupReport, StackupResult,
};
