use serde::{Deserialize, Serialize};

use crate::constants::{MTOW_737_700_LB, MTOW_737_800_LB, V2_OFFSET_737_700, V2_OFFSET_737_800};
use crate::error::SpeedError;

/// Aircraft variant enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum AircraftVariant {
    Model700,
    Model800,
}

impl AircraftVariant {
    pub const ALL: [AircraftVariant; 2] = [AircraftVariant::Model700, AircraftVariant::Model800];

    /// Parse a variant from user text.
    ///
    /// Accepts the bare series number (`700`), the type designator (`737-700`)
    /// and the full label (`Boeing 737-700`), case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        let designator = lowered.strip_prefix("boeing").unwrap_or(lowered.as_str()).trim();
        let series = designator.strip_prefix("737-").unwrap_or(designator);
        match series {
            "700" => Some(AircraftVariant::Model700),
            "800" => Some(AircraftVariant::Model800),
            _ => None,
        }
    }

    /// Offset (tons) subtracted from takeoff weight to get the V2 digits
    pub fn v2_offset(&self) -> f64 {
        match self {
            AircraftVariant::Model700 => V2_OFFSET_737_700,
            AircraftVariant::Model800 => V2_OFFSET_737_800,
        }
    }

    /// Certified maximum takeoff weight in pounds
    pub fn mtow_lb(&self) -> f64 {
        match self {
            AircraftVariant::Model700 => MTOW_737_700_LB,
            AircraftVariant::Model800 => MTOW_737_800_LB,
        }
    }

    /// Type designator, e.g. `737-700`
    pub fn code(&self) -> &'static str {
        match self {
            AircraftVariant::Model700 => "737-700",
            AircraftVariant::Model800 => "737-800",
        }
    }

    /// Label shown to the user, e.g. `Boeing 737-700`
    pub fn label(&self) -> &'static str {
        match self {
            AircraftVariant::Model700 => "Boeing 737-700",
            AircraftVariant::Model800 => "Boeing 737-800",
        }
    }
}

impl std::fmt::Display for AircraftVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AircraftVariant {
    type Err = SpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AircraftVariant::from_str(s).ok_or_else(|| SpeedError::UnknownVariant(s.to_string()))
    }
}

impl From<AircraftVariant> for &'static str {
    fn from(variant: AircraftVariant) -> Self {
        variant.code()
    }
}

impl TryFrom<String> for AircraftVariant {
    type Error = SpeedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
