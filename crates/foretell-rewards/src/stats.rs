/// Median of `values`, or `None` when empty.
///
/// Sorts `values` in place using IEEE total ordering. An even count yields
/// the mean of the two middle values.
#[must_use]
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Round to 2 decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_empty_is_none() {
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn median_odd_count_is_middle_value() {
        assert_eq!(median(&mut [0.6, 0.4, 0.5]), Some(0.5));
    }

    #[test]
    fn median_even_count_averages_middle_pair() {
        let m = median(&mut [0.9, 0.1, 0.3, 0.5]).unwrap();
        assert!((m - 0.4).abs() < 1e-12, "median {m}");
    }

    #[test]
    fn median_resists_outliers() {
        let m = median(&mut [0.5, 0.5, 0.55, 0.0]).unwrap();
        assert!((m - 0.5).abs() < 1e-12, "median {m}");
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert!((round2(3.913_043) - 3.91).abs() < 1e-12);
        assert!((round2(82.173_913) - 82.17).abs() < 1e-12);
        assert!((round2(0.0) - 0.0).abs() < f64::EPSILON);
    }
}
