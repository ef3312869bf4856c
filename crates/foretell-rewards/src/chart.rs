//! Chart-ready shapes derived from processed entries.

use foretell_core::{PolarityMap, SentimentThresholds};

use crate::types::{ChartMetric, ChartPoint, MiniPoint, ProcessedEntry, SeriesOrder};

fn metric_value(entry: &ProcessedEntry, metric: ChartMetric) -> f64 {
    match metric {
        ChartMetric::RewardAmount => entry.reward_amount,
        ChartMetric::PctShare => entry.pct_share,
    }
}

/// Combined chart series: one point per distinct score, framed by zeroed
/// boundary points at score 0 and 1.
///
/// Within a point, each group's field carries that group's value at the score
/// (the largest, should several members share it). Empty input yields no points.
#[must_use]
pub fn chart_points(processed: &[ProcessedEntry], metric: ChartMetric) -> Vec<ChartPoint> {
    if processed.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&ProcessedEntry> = processed.iter().collect();
    sorted.sort_by(|a, b| a.score().total_cmp(&b.score()));

    let mut observed: Vec<ChartPoint> = Vec::with_capacity(sorted.len());
    for entry in sorted {
        let score = entry.score();
        if observed
            .last()
            .is_none_or(|last| !last.score.total_cmp(&score).is_eq())
        {
            observed.push(ChartPoint::at(score));
        }
        if let Some(point) = observed.last_mut() {
            let value = metric_value(entry, metric);
            let slot = point.slot_mut(entry.polarity());
            *slot = Some(slot.map_or(value, |existing| existing.max(value)));
        }
    }

    let mut points = Vec::with_capacity(observed.len() + 2);
    points.push(ChartPoint::boundary(0.0));
    points.extend(observed);
    points.push(ChartPoint::boundary(1.0));
    points
}

/// Per-group sparkline series, each sorted ascending by the chosen key.
///
/// The plotted `value` is the sort key itself: the score, or the stored (or
/// backfilled) intensity.
#[must_use]
pub fn mini_series(
    processed: &[ProcessedEntry],
    order: SeriesOrder,
    thresholds: &SentimentThresholds,
) -> PolarityMap<Vec<MiniPoint>> {
    let mut series: PolarityMap<Vec<MiniPoint>> = PolarityMap::default();

    for p in processed {
        let entry = &p.weighted.entry;
        let value = match order {
            SeriesOrder::Score => entry.score,
            SeriesOrder::Intensity => entry.intensity_or_derived(thresholds),
        };
        series.get_mut(entry.polarity).push(MiniPoint {
            uid: entry.uid.clone(),
            polarity: entry.polarity,
            score: entry.score,
            value,
        });
    }

    for points in [
        &mut series.negative,
        &mut series.neutral,
        &mut series.positive,
    ] {
        points.sort_by(|a, b| a.value.total_cmp(&b.value));
    }

    series
}
