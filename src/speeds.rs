//! Takeoff reference speed estimation for the 737-700 and 737-800.
//!
//! The rules follow the published rule-of-thumb estimates:
//!
//! * V2 is the takeoff weight in tons minus 25 (-700) or 20 (-800), read as
//!   the trailing digits of a speed in the 100 knot range.
//! * V1 sits 10 to 17 knots below V2 depending on the weight band.
//! * VR is 2 knots above V1, or 4 knots above 55 t.
//!
//! These are estimates only and must not be used for flight planning.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aircraft::AircraftVariant;
use crate::constants::{
    V1_DELTA_FLOOR_KTS, VR_GAP_HEAVY_KTS, VR_GAP_LIGHT_KTS, VR_HEAVY_THRESHOLD_TONS,
};
use crate::error::{Result, SpeedError};
use crate::units::{lbs_to_metric_tons, round_to};

/// Weight band for the V2 - V1 gap
#[derive(Debug, Clone, Copy)]
struct WeightBand {
    /// Inclusive lower bound of the band (t)
    min_tons: f64,
    /// V2 - V1 within the band (kts)
    v1_delta: i32,
}

/// V1 gap bands ordered by descending lower bound.
/// Weights below the last band use [`V1_DELTA_FLOOR_KTS`].
const V1_WEIGHT_BANDS: &[WeightBand] = &[
    WeightBand { min_tons: 65.0, v1_delta: 10 },
    WeightBand { min_tons: 60.0, v1_delta: 11 },
    WeightBand { min_tons: 55.0, v1_delta: 12 },
    WeightBand { min_tons: 50.0, v1_delta: 13 },
    WeightBand { min_tons: 45.0, v1_delta: 15 },
];

/// How the V2 speed is formed from the `weight - offset` digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum V2Rule {
    /// Prefix a literal `1` to the digits and read the result back.
    /// Matches historical outputs, including the failure on negative digits.
    #[default]
    DigitSplice,
    /// `100 + digits`
    Arithmetic,
}

/// Highest V2 that leaves room for the VR gap in an `i32`
const MAX_V2_KTS: i32 = i32::MAX - VR_GAP_HEAVY_KTS;

/// Lowest V2 that leaves room for the V1 gap in an `i32`
const MIN_V2_KTS: i32 = i32::MIN + V1_DELTA_FLOOR_KTS;

/// Which ceiling the MTOW-exceeded label reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CeilingLabel {
    /// The selected variant's own MTOW
    #[default]
    Corrected,
    /// Always 154,500 lb, as older builds of the form displayed for both variants
    Legacy,
}

/// Calculator options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub v2_rule: V2Rule,
}

/// Takeoff reference speeds in knots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeedTriple {
    pub v1: i32,
    pub vr: i32,
    pub v2: i32,
}

/// Result of evaluating a takeoff weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    Speeds(SpeedTriple),
    OverMaxWeight { ceiling_lb: f64 },
}

impl Evaluation {
    pub fn speeds(&self) -> Option<SpeedTriple> {
        match self {
            Evaluation::Speeds(speeds) => Some(*speeds),
            Evaluation::OverMaxWeight { .. } => None,
        }
    }

    pub fn is_over_max_weight(&self) -> bool {
        matches!(self, Evaluation::OverMaxWeight { .. })
    }
}

/// Splice a leading `1` onto the float representation of `raw` and parse it back.
///
/// `39.0` becomes `"139.0"` and then 139. Negative values (including `-0.0`)
/// produce text like `"1-2.0"` which does not parse.
fn splice_v2_digits(raw: f64) -> Result<i32> {
    let spliced = format!("1{raw:?}");
    let value = spliced
        .parse::<f64>()
        .map_err(|_| SpeedError::MalformedV2Digit { raw })?;
    v2_knots(value.trunc())
}

/// Narrow a whole-knot V2 to `i32`, rejecting values V1 and VR cannot be derived from
fn v2_knots(value: f64) -> Result<i32> {
    if value.is_finite() && value >= MIN_V2_KTS as f64 && value <= MAX_V2_KTS as f64 {
        Ok(value as i32)
    } else {
        Err(SpeedError::V2OutOfRange { value })
    }
}

/// Calculate V2 for a 737-700 or 737-800.
///
/// # Arguments
/// * `tons` - Takeoff weight in metric tons
/// * `variant` - Aircraft variant
/// * `rule` - How the speed is formed from the weight digits
///
/// # Returns
/// * V2 in knots, `MalformedV2Digit` when the digit splice is fed a negative value,
///   or `V2OutOfRange` when the speed does not fit a whole-knot `i32`
pub fn compute_v2(tons: f64, variant: AircraftVariant, rule: V2Rule) -> Result<i32> {
    let raw = round_to(tons - variant.v2_offset(), 0);
    match rule {
        V2Rule::DigitSplice => splice_v2_digits(raw),
        V2Rule::Arithmetic => v2_knots(100.0 + raw),
    }
}

/// V2 - V1 gap for a takeoff weight
fn v1_delta(tons: f64) -> i32 {
    V1_WEIGHT_BANDS
        .iter()
        .find(|band| tons >= band.min_tons)
        .map_or(V1_DELTA_FLOOR_KTS, |band| band.v1_delta)
}

/// Calculate V1 from takeoff weight and V2.
///
/// # Arguments
/// * `tons` - Takeoff weight in metric tons
/// * `v2` - V2 in knots
///
/// # Returns
/// * V1 in knots
pub fn compute_v1(tons: f64, v2: i32) -> i32 {
    v2 - v1_delta(tons)
}

/// Calculate VR from takeoff weight and V1.
///
/// # Arguments
/// * `tons` - Takeoff weight in metric tons
/// * `v1` - V1 in knots
///
/// # Returns
/// * VR in knots
pub fn compute_vr(tons: f64, v1: i32) -> i32 {
    if tons > VR_HEAVY_THRESHOLD_TONS {
        v1 + VR_GAP_HEAVY_KTS
    } else {
        v1 + VR_GAP_LIGHT_KTS
    }
}

/// Stateless takeoff speed calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Evaluate a takeoff weight for a variant.
    ///
    /// Weights strictly above the variant's MTOW short-circuit to
    /// [`Evaluation::OverMaxWeight`] without computing any speeds.
    pub fn evaluate(&self, weight_lb: f64, variant: AircraftVariant) -> Result<Evaluation> {
        if !weight_lb.is_finite() || weight_lb <= 0.0 {
            return Err(SpeedError::InvalidWeight(weight_lb));
        }

        let ceiling_lb = variant.mtow_lb();
        if weight_lb > ceiling_lb {
            warn!(%variant, weight_lb, ceiling_lb, "takeoff weight exceeds MTOW");
            return Ok(Evaluation::OverMaxWeight { ceiling_lb });
        }

        let tons = lbs_to_metric_tons(weight_lb);
        let v2 = compute_v2(tons, variant, self.config.v2_rule).inspect_err(|err| {
            warn!(%variant, weight_lb, tons, "{err}");
        })?;
        let v1 = compute_v1(tons, v2);
        let vr = compute_vr(tons, v1);

        debug!(%variant, weight_lb, tons, v1, vr, v2, "computed takeoff speeds");
        Ok(Evaluation::Speeds(SpeedTriple { v1, vr, v2 }))
    }
}

/// Evaluate a takeoff weight with the default configuration.
pub fn evaluate(weight_lb: f64, variant: AircraftVariant) -> Result<Evaluation> {
    Calculator::default().evaluate(weight_lb, variant)
}
