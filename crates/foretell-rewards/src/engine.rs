//! Grouping, statistics, weighting, and pool distribution.

use foretell_core::{PolarityMap, ResponseEntry};

use crate::chart::{chart_points, mini_series};
use crate::stats::{median, round2};
use crate::types::{
    Allocation, AllocationOptions, GroupStats, ProcessedEntry, WeightedEntry, MIN_WEIGHT,
};

/// Bucket entries by polarity, keeping input order within each bucket.
#[must_use]
pub fn group_by_polarity(entries: &[ResponseEntry]) -> PolarityMap<Vec<&ResponseEntry>> {
    let mut groups: PolarityMap<Vec<&ResponseEntry>> = PolarityMap::default();
    for entry in entries {
        groups.get_mut(entry.polarity).push(entry);
    }
    groups
}

/// Median score of a group and the largest distance of any member from it.
///
/// Returns `(None, 0.0)` for an empty group; a single member has `max_dist = 0`.
#[must_use]
pub fn group_stats(group: &[&ResponseEntry]) -> (Option<f64>, f64) {
    let mut scores: Vec<f64> = group.iter().map(|e| e.score).collect();
    let Some(mid) = median(&mut scores) else {
        return (None, 0.0);
    };
    let max_dist = scores
        .iter()
        .map(|s| (s - mid).abs())
        .fold(0.0_f64, f64::max);
    (Some(mid), max_dist)
}

/// Proximity of `score` to `median`, normalised to `[0, 1]`.
fn closeness(score: f64, median: f64, max_dist: f64) -> f64 {
    if max_dist > 0.0 {
        1.0 - (score - median).abs() / max_dist
    } else {
        1.0
    }
}

/// Attach a raw weight (`closeness + min_weight`) to every entry.
#[must_use]
pub fn weigh(
    entries: &[ResponseEntry],
    stats: &PolarityMap<GroupStats>,
    min_weight: f64,
) -> Vec<WeightedEntry> {
    entries
        .iter()
        .map(|entry| {
            let group = stats.get(entry.polarity);
            let close = group
                .median
                .map_or(1.0, |mid| closeness(entry.score, mid, group.max_dist));
            WeightedEntry {
                entry: entry.clone(),
                raw_weight: close + min_weight,
            }
        })
        .collect()
}

/// Distribute `total_pool` across `entries`.
///
/// Each polarity group receives `size / total * pool`; inside a group each
/// entry gets `raw_weight / group_weight_sum` of it. Amounts and percentages
/// are rounded to 2 decimals. An empty `entries` slice yields an empty
/// allocation, and a zero pool yields zero for every amount. A weight floor
/// that is not a positive number is replaced by [`MIN_WEIGHT`].
#[must_use]
pub fn allocate(
    entries: &[ResponseEntry],
    total_pool: f64,
    options: &AllocationOptions,
) -> Allocation {
    let total_pool = if total_pool.is_finite() && total_pool >= 0.0 {
        total_pool
    } else {
        tracing::warn!(total_pool, "reward pool is negative or not finite; treating as 0");
        0.0
    };

    let min_weight = if options.min_weight.is_finite() && options.min_weight > 0.0 {
        options.min_weight
    } else {
        tracing::warn!(
            min_weight = options.min_weight,
            fallback = MIN_WEIGHT,
            "weight floor must be positive; using default"
        );
        MIN_WEIGHT
    };

    if entries.is_empty() {
        return Allocation {
            total_pool,
            ..Allocation::default()
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let total_entries = entries.len() as f64;

    let groups = group_by_polarity(entries);
    let mut stats = groups.map(|polarity, group| {
        let (median, max_dist) = group_stats(group);
        #[allow(clippy::cast_precision_loss)]
        let group_reward = group.len() as f64 / total_entries * total_pool;
        tracing::debug!(
            polarity = %polarity,
            count = group.len(),
            ?median,
            max_dist,
            group_reward,
            "group statistics"
        );
        GroupStats {
            count: group.len(),
            median,
            max_dist,
            group_reward,
            weight_sum: 0.0,
        }
    });

    let weighted = weigh(entries, &stats, min_weight);
    for w in &weighted {
        stats.get_mut(w.entry.polarity).weight_sum += w.raw_weight;
    }

    let processed: Vec<ProcessedEntry> = weighted
        .into_iter()
        .map(|w| {
            let group = stats.get(w.entry.polarity);
            let share_in_group = w.raw_weight / group.weight_sum;
            let reward_amount = round2(share_in_group * group.group_reward);
            let pct_share = if total_pool > 0.0 {
                round2(reward_amount / total_pool * 100.0)
            } else {
                0.0
            };
            ProcessedEntry {
                weighted: w,
                share_in_group,
                reward_amount,
                pct_share,
            }
        })
        .collect();

    let chart = chart_points(&processed, options.chart_metric);
    let mini_series = mini_series(&processed, options.series_order, &options.thresholds);

    tracing::debug!(
        entries = processed.len(),
        total_pool,
        chart_points = chart.len(),
        "allocation computed"
    );

    Allocation {
        total_pool,
        stats,
        processed,
        chart,
        mini_series,
    }
}
