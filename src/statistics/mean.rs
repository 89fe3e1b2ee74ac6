// =============================================================================
// Arithmetic Mean
// =============================================================================

use crate::types::PricePoint;

/// Mean of the `price` field across all points.
///
/// Returns `0.0` for an empty slice.
pub fn average(points: &[PricePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|p| p.price).sum();
    total / points.len() as f64
}
