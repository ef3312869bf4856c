use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete sentiment bucket. Serialized as the integers `-1`, `0`, `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid polarity {0}; must be -1, 0, or 1")]
pub struct InvalidPolarity(pub i8);

impl Polarity {
    /// All buckets in ascending order.
    pub const ALL: [Polarity; 3] = [Polarity::Negative, Polarity::Neutral, Polarity::Positive];

    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            Polarity::Negative => -1,
            Polarity::Neutral => 0,
            Polarity::Positive => 1,
        }
    }

    /// Human-readable label used in tables and chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Negative => "Negative",
            Polarity::Neutral => "Neutral",
            Polarity::Positive => "Positive",
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = InvalidPolarity;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Polarity::Negative),
            0 => Ok(Polarity::Neutral),
            1 => Ok(Polarity::Positive),
            other => Err(InvalidPolarity(other)),
        }
    }
}

impl From<Polarity> for i8 {
    fn from(p: Polarity) -> Self {
        p.as_i8()
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// One value per polarity bucket.
///
/// Iteration always runs negative, neutral, positive so derived output is
/// independent of hash ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PolarityMap<T> {
    pub negative: T,
    pub neutral: T,
    pub positive: T,
}

impl<T> PolarityMap<T> {
    pub fn from_fn(mut f: impl FnMut(Polarity) -> T) -> Self {
        Self {
            negative: f(Polarity::Negative),
            neutral: f(Polarity::Neutral),
            positive: f(Polarity::Positive),
        }
    }

    #[must_use]
    pub fn get(&self, polarity: Polarity) -> &T {
        match polarity {
            Polarity::Negative => &self.negative,
            Polarity::Neutral => &self.neutral,
            Polarity::Positive => &self.positive,
        }
    }

    pub fn get_mut(&mut self, polarity: Polarity) -> &mut T {
        match polarity {
            Polarity::Negative => &mut self.negative,
            Polarity::Neutral => &mut self.neutral,
            Polarity::Positive => &mut self.positive,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Polarity, &T)> {
        Polarity::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Polarity, &T) -> U) -> PolarityMap<U> {
        PolarityMap::from_fn(|p| f(p, self.get(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&Polarity::Negative).unwrap();
        assert_eq!(json, "-1");
        let json = serde_json::to_string(&Polarity::Positive).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn deserializes_from_integer() {
        let p: Polarity = serde_json::from_str("0").unwrap();
        assert_eq!(p, Polarity::Neutral);
    }

    #[test]
    fn rejects_out_of_range_integer() {
        let result: Result<Polarity, _> = serde_json::from_str("2");
        assert!(result.is_err(), "expected error for polarity 2");
    }

    #[test]
    fn polarity_map_iterates_in_ascending_order() {
        let map = PolarityMap::from_fn(Polarity::as_i8);
        let order: Vec<i8> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(order, vec![-1, 0, 1]);
    }

    #[test]
    fn polarity_map_get_mut_targets_one_bucket() {
        let mut map: PolarityMap<u32> = PolarityMap::default();
        *map.get_mut(Polarity::Neutral) += 3;
        assert_eq!(map.negative, 0);
        assert_eq!(map.neutral, 3);
        assert_eq!(map.positive, 0);
    }
}
