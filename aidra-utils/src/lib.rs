//! Shared numeric helpers for AIDRA crates.

/// Rounding of derived quantities into resource counts.
pub mod rounding {
    /// Round a real to the nearest non-negative integer count.
    ///
    /// Ties round to the nearest even integer (2.5 -> 2, 3.5 -> 4), matching
    /// the rounding used for every integer column of the pipeline. Negative
    /// and non-finite inputs saturate to 0.
    pub fn round_count(value: f64) -> u64 {
        if !value.is_finite() {
            return 0;
        }
        let rounded = value.round_ties_even();
        if rounded <= 0.0 {
            0
        } else {
            rounded as u64
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round_count_half_even() {
            assert_eq!(round_count(0.5), 0);
            assert_eq!(round_count(1.5), 2);
            assert_eq!(round_count(2.5), 2);
            assert_eq!(round_count(3.5), 4);
            assert_eq!(round_count(2.4999), 2);
            assert_eq!(round_count(2.5001), 3);
        }

        #[test]
        fn test_round_count_saturates() {
            assert_eq!(round_count(-3.7), 0);
            assert_eq!(round_count(f64::NAN), 0);
            assert_eq!(round_count(f64::INFINITY), 0);
            assert_eq!(round_count(0.0), 0);
        }
    }
}

/// Column statistics over slices of reals.
pub mod stats {
    /// Minimum and maximum of a slice, or None when empty.
    ///
    /// A NaN anywhere makes both bounds NaN.
    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        Some(values.iter().fold((first, first), |(lo, hi), &v| {
            if lo.is_nan() || v.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (lo.min(v), hi.max(v))
            }
        }))
    }

    /// Minimum and maximum over the finite values of a slice, or None when
    /// it has none.
    pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
        values
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }

    /// Maximum of a slice, or None when empty. NaN if any value is NaN.
    pub fn max(values: &[f64]) -> Option<f64> {
        min_max(values).map(|(_, hi)| hi)
    }

    /// Maximum over the finite values of a slice.
    pub fn finite_max(values: &[f64]) -> Option<f64> {
        finite_min_max(values).map(|(_, hi)| hi)
    }

    /// Sum of counts, saturating at `u64::MAX`.
    pub fn count_total(counts: &[u64]) -> u64 {
        counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Arithmetic mean of a slice, or None when empty.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// Row-wise mean of several equally long columns.
    ///
    /// Panics in debug builds if the columns differ in length.
    pub fn row_means(columns: &[&[f64]]) -> Vec<f64> {
        let Some(first) = columns.first() else {
            return Vec::new();
        };
        let rows = first.len();
        debug_assert!(columns.iter().all(|c| c.len() == rows));
        (0..rows)
            .map(|i| columns.iter().map(|c| c[i]).sum::<f64>() / columns.len() as f64)
            .collect()
    }

}
