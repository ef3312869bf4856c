use foretell_core::{AppConfig, Polarity, PolarityMap, ResponseEntry, SentimentThresholds};
use serde::Serialize;

/// Weight floor so every respondent, however far from the median, earns something.
pub const MIN_WEIGHT: f64 = 0.05;

/// Which value the combined chart plots per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMetric {
    #[default]
    RewardAmount,
    PctShare,
}

/// Sort key (and plotted value) for the per-group mini-series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesOrder {
    #[default]
    Score,
    Intensity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationOptions {
    /// Added to every closeness before normalisation. Must be `> 0`.
    pub min_weight: f64,
    pub chart_metric: ChartMetric,
    pub series_order: SeriesOrder,
    /// Used only to backfill missing intensities for the mini-series.
    pub thresholds: SentimentThresholds,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            min_weight: MIN_WEIGHT,
            chart_metric: ChartMetric::default(),
            series_order: SeriesOrder::default(),
            thresholds: SentimentThresholds::default(),
        }
    }
}

impl AllocationOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            min_weight: config.min_weight,
            thresholds: config.thresholds,
            ..Self::default()
        }
    }
}

/// Per-group statistics. `median` is `None` for an empty group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub count: usize,
    pub median: Option<f64>,
    pub max_dist: f64,
    pub group_reward: f64,
    pub weight_sum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedEntry {
    #[serde(flatten)]
    pub entry: ResponseEntry,
    pub raw_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedEntry {
    #[serde(flatten)]
    pub weighted: WeightedEntry,
    pub share_in_group: f64,
    pub reward_amount: f64,
    pub pct_share: f64,
}

impl ProcessedEntry {
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.weighted.entry.uid
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.weighted.entry.polarity
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.weighted.entry.score
    }
}

/// One x-position on the combined chart. Group fields are absent where that
/// group has no respondent at this score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub score: f64,
    #[serde(rename = "negValue", skip_serializing_if = "Option::is_none")]
    pub negative: Option<f64>,
    #[serde(rename = "neuValue", skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
    #[serde(rename = "posValue", skip_serializing_if = "Option::is_none")]
    pub positive: Option<f64>,
}

impl ChartPoint {
    /// Point with no group values yet.
    #[must_use]
    pub fn at(score: f64) -> Self {
        Self {
            score,
            negative: None,
            neutral: None,
            positive: None,
        }
    }

    /// Boundary point with every group at zero.
    #[must_use]
    pub fn boundary(score: f64) -> Self {
        Self {
            score,
            negative: Some(0.0),
            neutral: Some(0.0),
            positive: Some(0.0),
        }
    }

    pub(crate) fn slot_mut(&mut self, polarity: Polarity) -> &mut Option<f64> {
        match polarity {
            Polarity::Negative => &mut self.negative,
            Polarity::Neutral => &mut self.neutral,
            Polarity::Positive => &mut self.positive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiniPoint {
    pub uid: String,
    pub polarity: Polarity,
    pub score: f64,
    pub value: f64,
}

/// Full result of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub total_pool: f64,
    pub stats: PolarityMap<GroupStats>,
    /// One per input entry, in input order.
    pub processed: Vec<ProcessedEntry>,
    pub chart: Vec<ChartPoint>,
    pub mini_series: PolarityMap<Vec<MiniPoint>>,
}

impl Allocation {
    /// Sum of rounded reward amounts.
    #[must_use]
    pub fn total_distributed(&self) -> f64 {
        self.processed.iter().map(|p| p.reward_amount).sum()
    }

    /// Entries ordered by reward, largest first; ties keep input order.
    #[must_use]
    pub fn by_reward_desc(&self) -> Vec<&ProcessedEntry> {
        let mut rows: Vec<&ProcessedEntry> = self.processed.iter().collect();
        rows.sort_by(|a, b| b.reward_amount.total_cmp(&a.reward_amount));
        rows
    }
}
