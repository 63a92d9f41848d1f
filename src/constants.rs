/// Constants used by the takeoff speed rules

/// Conversion factor: pounds to metric tons (1 lb = 0.453592 kg)
pub const LBS_TO_METRIC_TONS: f64 = 0.000453592;

/// V2 offset for the 737-700: V2 is takeoff weight in tons minus 25
pub const V2_OFFSET_737_700: f64 = 25.0;

/// V2 offset for the 737-800: V2 is takeoff weight in tons minus 20
pub const V2_OFFSET_737_800: f64 = 20.0;

/// Maximum takeoff weight of the 737-700 (lb)
pub const MTOW_737_700_LB: f64 = 154_500.0;

/// Maximum takeoff weight of the 737-800 (lb)
pub const MTOW_737_800_LB: f64 = 174_200.0;

/// Weight (tons) above which the V1 to VR gap widens from 2 to 4 knots.
/// The comparison is strict: exactly 55.0 t still uses the small gap.
pub const VR_HEAVY_THRESHOLD_TONS: f64 = 55.0;

/// VR - V1 at or below [`VR_HEAVY_THRESHOLD_TONS`]
pub const VR_GAP_LIGHT_KTS: i32 = 2;

/// VR - V1 above [`VR_HEAVY_THRESHOLD_TONS`]
pub const VR_GAP_HEAVY_KTS: i32 = 4;

/// V2 - V1 below the lightest weight band
pub const V1_DELTA_FLOOR_KTS: i32 = 17;
