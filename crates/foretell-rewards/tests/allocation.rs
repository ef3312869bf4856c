//! End-to-end checks of the reward allocation engine.

use foretell_core::{Polarity, ResponseEntry, SentimentThresholds};
use foretell_rewards::{allocate, Allocation, AllocationOptions, ChartMetric, SeriesOrder};

fn entry(uid: &str, polarity: Polarity, score: f64) -> ResponseEntry {
    ResponseEntry {
        uid: uid.to_string(),
        polarity,
        score,
        intensity: None,
        answer: None,
        created_at: None,
    }
}

/// Entries bucketed with the default cutoffs, as the classifier would have.
fn classified(scores: &[f64]) -> Vec<ResponseEntry> {
    let thresholds = SentimentThresholds::default();
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| entry(&format!("u{i}"), thresholds.polarity_for(score), score))
        .collect()
}

fn sample() -> Vec<ResponseEntry> {
    classified(&[
        0.95, 0.81, 0.5, 0.45, 0.6, 0.7, 0.4, 0.85, 0.55, 0.03, 0.9, 0.62, 0.15, 0.99, 0.31,
        0.18, 0.05,
    ])
}

fn find<'a>(alloc: &'a Allocation, uid: &str) -> &'a foretell_rewards::ProcessedEntry {
    alloc
        .processed
        .iter()
        .find(|p| p.uid() == uid)
        .expect("uid should be present")
}

#[test]
fn three_neutral_entries_scenario() {
    let entries = vec![
        entry("e1", Polarity::Neutral, 0.4),
        entry("e2", Polarity::Neutral, 0.5),
        entry("e3", Polarity::Neutral, 0.6),
    ];
    let alloc = allocate(&entries, 90.0, &AllocationOptions::default());

    assert_eq!(alloc.stats.neutral.median, Some(0.5));
    assert!((alloc.stats.neutral.max_dist - 0.1).abs() < 1e-9);
    assert!((alloc.stats.neutral.group_reward - 90.0).abs() < 1e-9);

    let rewards: Vec<f64> = alloc.processed.iter().map(|p| p.reward_amount).collect();
    assert!((rewards[0] - 3.91).abs() < 1e-9, "rewards {rewards:?}");
    assert!((rewards[1] - 82.17).abs() < 1e-9, "rewards {rewards:?}");
    assert!((rewards[2] - 3.91).abs() < 1e-9, "rewards {rewards:?}");
    assert!((alloc.total_distributed() - 90.0).abs() <= 0.03);
    assert!((alloc.processed[1].pct_share - 91.3).abs() < 1e-9);
}

#[test]
fn rewards_sum_to_pool_within_rounding() {
    let entries = sample();
    for pool in [1.0, 90.0, 100.0, 1234.56] {
        let alloc = allocate(&entries, pool, &AllocationOptions::default());
        #[allow(clippy::cast_precision_loss)]
        let tolerance = 0.01 * entries.len() as f64;
        let total = alloc.total_distributed();
        assert!(
            (total - pool).abs() <= tolerance,
            "pool {pool}: distributed {total}"
        );
    }
}

#[test]
fn group_shares_sum_to_one() {
    let alloc = allocate(&sample(), 100.0, &AllocationOptions::default());
    for polarity in Polarity::ALL {
        let members: Vec<_> = alloc
            .processed
            .iter()
            .filter(|p| p.polarity() == polarity)
            .collect();
        if members.is_empty() {
            continue;
        }
        let sum: f64 = members.iter().map(|p| p.share_in_group).sum();
        assert!((sum - 1.0).abs() < 1e-9, "{polarity}: share sum {sum}");
    }
}

#[test]
fn closer_to_median_never_earns_less() {
    let alloc = allocate(&sample(), 100.0, &AllocationOptions::default());
    for polarity in Polarity::ALL {
        let Some(median) = alloc.stats.get(polarity).median else {
            continue;
        };
        let mut members: Vec<_> = alloc
            .processed
            .iter()
            .filter(|p| p.polarity() == polarity)
            .collect();
        members.sort_by(|a, b| {
            (a.score() - median)
                .abs()
                .total_cmp(&(b.score() - median).abs())
        });
        for pair in members.windows(2) {
            assert!(
                pair[0].reward_amount >= pair[1].reward_amount,
                "{polarity}: {} ({}) earned less than {} ({})",
                pair[0].uid(),
                pair[0].reward_amount,
                pair[1].uid(),
                pair[1].reward_amount
            );
        }
    }
}

#[test]
fn single_member_group_gets_full_closeness() {
    let entries = vec![
        entry("lonely", Polarity::Negative, 0.01),
        entry("p1", Polarity::Positive, 0.9),
        entry("p2", Polarity::Positive, 0.95),
    ];
    let options = AllocationOptions::default();
    let alloc = allocate(&entries, 30.0, &options);
    let lonely = find(&alloc, "lonely");
    assert!((lonely.weighted.raw_weight - (1.0 + options.min_weight)).abs() < 1e-12);
    assert!((lonely.share_in_group - 1.0).abs() < 1e-12);
    assert!((lonely.reward_amount - 10.0).abs() < 1e-9);
}

#[test]
fn zero_pool_yields_zero_everywhere() {
    let alloc = allocate(&sample(), 0.0, &AllocationOptions::default());
    assert!(!alloc.processed.is_empty());
    for p in &alloc.processed {
        assert!(p.reward_amount.abs() < f64::EPSILON, "{}", p.uid());
        assert!(p.pct_share.abs() < f64::EPSILON, "{}", p.uid());
        assert!(p.share_in_group.is_finite());
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let entries = sample();
    let options = AllocationOptions {
        chart_metric: ChartMetric::PctShare,
        series_order: SeriesOrder::Intensity,
        ..AllocationOptions::default()
    };
    let first = allocate(&entries, 250.0, &options);
    let second = allocate(&entries, 250.0, &options);

    for (a, b) in first.processed.iter().zip(&second.processed) {
        assert_eq!(a.reward_amount.to_bits(), b.reward_amount.to_bits());
        assert_eq!(a.share_in_group.to_bits(), b.share_in_group.to_bits());
    }
    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn processed_preserves_input_order() {
    let entries = sample();
    let alloc = allocate(&entries, 100.0, &AllocationOptions::default());
    let input: Vec<&str> = entries.iter().map(|e| e.uid.as_str()).collect();
    let output: Vec<&str> = alloc.processed.iter().map(|p| p.uid()).collect();
    assert_eq!(input, output);
}

#[test]
fn chart_covers_every_distinct_score() {
    let entries = sample();
    let alloc = allocate(&entries, 100.0, &AllocationOptions::default());
    assert_eq!(alloc.chart.len(), entries.len() + 2);
    assert!(alloc.chart[0].score.abs() < f64::EPSILON);
    assert!((alloc.chart[alloc.chart.len() - 1].score - 1.0).abs() < f64::EPSILON);
    for pair in alloc.chart.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
}

#[test]
fn mini_series_cover_each_group() {
    let alloc = allocate(&sample(), 100.0, &AllocationOptions::default());
    for polarity in Polarity::ALL {
        let series = alloc.mini_series.get(polarity);
        assert_eq!(series.len(), alloc.stats.get(polarity).count);
        assert!(series.iter().all(|p| p.polarity == polarity));
        for pair in series.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }
}

#[test]
fn serialized_entries_use_camel_case() {
    let entries = vec![entry("a", Polarity::Positive, 0.9)];
    let alloc = allocate(&entries, 10.0, &AllocationOptions::default());
    let json = serde_json::to_value(&alloc).unwrap();
    let row = &json["processed"][0];
    assert_eq!(row["uid"], "a");
    assert_eq!(row["polarity"], 1);
    assert!(row.get("rewardAmount").is_some());
    assert!(row.get("pctShare").is_some());
    assert!(row.get("rawWeight").is_some());
    assert_eq!(json["chart"][1]["posValue"], 10.0);
    assert!(json["chart"][1].get("negValue").is_none());
}
