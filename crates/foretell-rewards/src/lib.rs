//! Reward allocation engine for Foretell surveys.
//!
//! Splits a reward pool across the negative, neutral, and positive response
//! groups in proportion to group size, then within each group in proportion
//! to how close a respondent's score sits to the group median. Also shapes
//! the result into chart points and per-group mini-series.
//!
//! Every function here is pure: the same entries and pool always produce the
//! same output, bit for bit.

pub mod chart;
pub mod engine;
pub mod stats;
pub mod types;

pub use chart::{chart_points, mini_series};
pub use engine::{allocate, group_by_polarity, group_stats, weigh};
pub use stats::{median, round2};
pub use types::{
    Allocation, AllocationOptions, ChartMetric, ChartPoint, GroupStats, MiniPoint,
    ProcessedEntry, SeriesOrder, WeightedEntry, MIN_WEIGHT,
};
