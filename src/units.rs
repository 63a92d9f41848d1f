//! Weight unit conversion.
//!
//! The speed rules are tabulated in metric tons rounded to a tenth, so all
//! pound inputs go through [`lbs_to_metric_tons`] before any table lookup.

use crate::constants::LBS_TO_METRIC_TONS;

/// Round to a number of decimal places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Convert aircraft weight from pounds to metric tons, rounded to 0.1 t.
///
/// # Arguments
/// * `pounds` - Weight in pounds
///
/// # Returns
/// * Weight in metric tons
pub fn lbs_to_metric_tons(pounds: f64) -> f64 {
    round_to(pounds * LBS_TO_METRIC_TONS, 1)
}
