//! Display text for a calculation outcome, one label per speed.

use serde::Serialize;

use crate::aircraft::AircraftVariant;
use crate::constants::MTOW_737_700_LB;
use crate::speeds::{CeilingLabel, Evaluation};

/// Format a whole number of pounds with comma thousands separators
pub fn format_pounds(value: f64) -> String {
    if !value.is_finite() || value.round().abs() >= u64::MAX as f64 {
        return format!("{:.0}", value.round());
    }
    let digits = (value.round().abs() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value.round() < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Ceiling reported to the user when MTOW is exceeded
pub fn reported_ceiling_lb(ceiling_lb: f64, ceiling_label: CeilingLabel) -> f64 {
    match ceiling_label {
        CeilingLabel::Corrected => ceiling_lb,
        CeilingLabel::Legacy => MTOW_737_700_LB,
    }
}

/// The V1, VR and V2 labels for one outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeLabels {
    pub v1: String,
    pub vr: String,
    pub v2: String,
}

impl OutcomeLabels {
    pub fn render(evaluation: &Evaluation, variant: AircraftVariant, ceiling_label: CeilingLabel) -> Self {
        match evaluation {
            Evaluation::Speeds(speeds) => Self {
                v1: format!("{} knots", speeds.v1),
                vr: format!("{} knots", speeds.vr),
                v2: format!("{} knots", speeds.v2),
            },
            Evaluation::OverMaxWeight { ceiling_lb } => {
                let shown = reported_ceiling_lb(*ceiling_lb, ceiling_label);
                if shown != *ceiling_lb {
                    tracing::debug!(%variant, ceiling_lb, shown, "reporting legacy MTOW label");
                }
                let text = format!("MTOW = {} lb", format_pounds(shown));
                Self { v1: text.clone(), vr: text.clone(), v2: text }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speeds::SpeedTriple;

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(154_500.0), "154,500");
        assert_eq!(format_pounds(174_200.0), "174,200");
        assert_eq!(format_pounds(999.0), "999");
        assert_eq!(format_pounds(1000.0), "1,000");
        assert_eq!(format_pounds(0.0), "0");
        assert_eq!(format_pounds(1_234_567.4), "1,234,567");
        assert_eq!(format_pounds(-2500.0), "-2,500");
    }

    #[test]
    fn test_format_pounds_beyond_u64() {
        assert_eq!(format_pounds(1.0e30), format!("{:.0}", 1.0e30));
        assert!(!format_pounds(1.0e30).contains("18,446,744"));
        assert_eq!(format_pounds(-1.0e30), format!("{:.0}", -1.0e30));
        assert_eq!(format_pounds(f64::INFINITY), "inf");
    }

    #[test]
    fn test_speed_labels() {
        let eval = Evaluation::Speeds(SpeedTriple { v1: 128, vr: 132, v2: 139 });
        let labels = OutcomeLabels::render(&eval, AircraftVariant::Model700, CeilingLabel::Corrected);
        assert_eq!(labels.v1, "128 knots");
        assert_eq!(labels.vr, "132 knots");
        assert_eq!(labels.v2, "139 knots");
    }

    #[test]
    fn test_mtow_labels_corrected() {
        let eval = Evaluation::OverMaxWeight { ceiling_lb: 174_200.0 };
        let labels = OutcomeLabels::render(&eval, AircraftVariant::Model800, CeilingLabel::Corrected);
        assert_eq!(labels.v1, "MTOW = 174,200 lb");
        assert_eq!(labels.v1, labels.vr);
        assert_eq!(labels.vr, labels.v2);
    }

    #[test]
    fn test_mtow_labels_legacy() {
        let eval = Evaluation::OverMaxWeight { ceiling_lb: 174_200.0 };
        let labels = OutcomeLabels::render(&eval, AircraftVariant::Model800, CeilingLabel::Legacy);
        assert_eq!(labels.v2, "MTOW = 154,500 lb");

        let eval = Evaluation::OverMaxWeight { ceiling_lb: 154_500.0 };
        let labels = OutcomeLabels::render(&eval, AircraftVariant::Model700, CeilingLabel::Legacy);
        assert_eq!(labels.v2, "MTOW = 154,500 lb");
    }
}
