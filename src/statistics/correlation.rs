// =============================================================================
// Pearson Correlation
// =============================================================================
//
//   r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²) · (n·Σy² − (Σy)²))
//
// `n` is the length of `x`; `y` is matched to `x` purely by position. No
// timestamp alignment or resampling happens here, so series sampled at
// different instants are compared point-for-point regardless.

use crate::types::PricePoint;

/// Variance terms at or below this fraction of `n·Σv²` are treated as zero.
/// Prices like `0.1` are not exactly representable, so a constant series
/// leaves rounding residue instead of an exact zero.
const RELATIVE_VARIANCE_EPSILON: f64 = 1e-10;

/// `n·Σv² − (Σv)²`, or `None` when it is indistinguishable from zero.
fn scaled_variance(n: f64, sum: f64, sum_sq: f64) -> Option<f64> {
    let scaled = n * sum_sq;
    let var = scaled - sum * sum;
    if var > RELATIVE_VARIANCE_EPSILON * scaled.abs() {
        Some(var)
    } else {
        None
    }
}

/// Pearson correlation coefficient of `x` against `y`.
///
/// `n`, `Σx` and `Σx²` cover `x`; `Σy` and `Σy²` cover all of `y`; `Σxy` only
/// covers positions present in both slices. Returns `0.0` when `x` is empty
/// or either series has (numerically) zero variance. Unequal lengths can push
/// the raw ratio outside `[-1, 1]`, so the result is clamped to that range.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_x2: f64 = x.iter().map(|v| v * v).sum();
    let sum_y2: f64 = y.iter().map(|v| v * v).sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let (var_x, var_y) = match (
        scaled_variance(n, sum_x, sum_x2),
        scaled_variance(n, sum_y, sum_y2),
    ) {
        (Some(vx), Some(vy)) => (vx, vy),
        _ => return 0.0,
    };

    let numerator = n * sum_xy - sum_x * sum_y;
    let r = numerator / (var_x * var_y).sqrt();
    if r.is_finite() {
        r.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Correlation of two price series, dropping timestamps first.
pub fn price_correlation(a: &[PricePoint], b: &[PricePoint]) -> f64 {
    let xs: Vec<f64> = a.iter().map(|p| p.price).collect();
    let ys: Vec<f64> = b.iter().map(|p| p.price).collect();
    pearson_correlation(&xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(pearson_correlation(&[], &[]), 0.0);
    }

    #[test]
    fn perfect_positive() {
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
        assert!((r - 1.0).abs() < 1e-10);
    }

    #[test]
    fn perfect_negative() {
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        assert!((r + 1.0).abs() < 1e-10);
    }

    #[test]
    fn constant_series_is_zero() {
        assert_eq!(pearson_correlation(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]), 0.0);
    }

    #[test]
    fn single_point_is_zero() {
        assert_eq!(pearson_correlation(&[42.0], &[17.0]), 0.0);
    }

    #[test]
    fn known_value() {
        // Hand-computed: n=5, Σx=15, Σy=20, Σxy=66, Σx²=55, Σy²=96
        //   r = (330 - 300) / sqrt(50 * 80) = 30 / 63.2455...
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let r = pearson_correlation(&x, &y);
        assert!((r - 30.0 / 4000.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn constant_series_with_rounding_residue_is_zero() {
        let x = [0.1; 10];
        let y: Vec<f64> = (0..10).map(|v| v as f64).collect();
        assert_eq!(pearson_correlation(&x, &y), 0.0);
        assert_eq!(pearson_correlation(&y, &x), 0.0);
    }

    #[test]
    fn small_real_variance_is_kept() {
        let x = [100.00, 100.01, 100.02, 100.03];
        let y = [50.0, 51.0, 52.0, 53.0];
        assert!((pearson_correlation(&x, &y) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shorter_y_only_pairs_shared_prefix() {
        // n=4, Σx=10, Σx²=30, Σy=3, Σy²=5, Σxy=1+4=5
        //   r = (20 - 30) / sqrt((120 - 100) * (20 - 9)) = -10 / sqrt(220)
        let r = pearson_correlation(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0]);
        assert!((r - (-10.0 / 220.0_f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn longer_y_feeds_all_values_into_y_sums() {
        // n=3, Σx=6, Σx²=14, Σy=1+5+2+1=9, Σy²=31, Σxy=1+10+6=17
        //   r = (51 - 54) / sqrt((42 - 36) * (93 - 81)) = -3 / sqrt(72)
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 5.0, 2.0, 1.0]);
        assert!((r - (-3.0 / 72.0_f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn unequal_lengths_are_clamped() {
        // Raw ratio: (42 - 96) / sqrt(6 * 86) ≈ -2.38
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 10.0]);
        assert_eq!(r, -1.0);
    }

    #[test]
    fn empty_y_is_zero() {
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[]), 0.0);
    }

    #[test]
    fn price_correlation_ignores_timestamps() {
        let a: Vec<PricePoint> = [10.0, 20.0, 30.0]
            .iter()
            .map(|&price| PricePoint {
                price,
                timestamp: "a".into(),
            })
            .collect();
        let b: Vec<PricePoint> = [300.0, 200.0, 100.0]
            .iter()
            .map(|&price| PricePoint {
                price,
                timestamp: "b".into(),
            })
            .collect();
        assert!((price_correlation(&a, &b) + 1.0).abs() < 1e-10);
    }
}
