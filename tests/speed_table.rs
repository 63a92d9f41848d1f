use takeoff_vspeeds::{
    evaluate, lbs_to_metric_tons, AircraftVariant, Calculator, CalculatorConfig, CeilingLabel, Evaluation,
    OutcomeLabels, SpeedError, SpeedTriple, V2Rule,
};

// (variant, weight_lb, v1, vr, v2)
const REFERENCE_SPEEDS: &[(AircraftVariant, f64, i32, i32, i32)] = &[
    (AircraftVariant::Model700, 100_000.0, 105, 107, 120),
    (AircraftVariant::Model700, 120_000.0, 116, 118, 129),
    (AircraftVariant::Model700, 140_000.0, 128, 132, 139),
    (AircraftVariant::Model700, 154_500.0, 135, 139, 145),
    (AircraftVariant::Model800, 120_000.0, 121, 123, 134),
    (AircraftVariant::Model800, 140_000.0, 133, 137, 144),
    (AircraftVariant::Model800, 160_000.0, 143, 147, 153),
    (AircraftVariant::Model800, 174_200.0, 149, 153, 159),
];

#[test]
fn test_reference_speeds() {
    for &(variant, weight, v1, vr, v2) in REFERENCE_SPEEDS {
        let result = evaluate(weight, variant).unwrap();
        assert_eq!(
            result,
            Evaluation::Speeds(SpeedTriple { v1, vr, v2 }),
            "{variant} at {weight} lb ({} t)",
            lbs_to_metric_tons(weight)
        );
    }
}

#[test]
fn test_arithmetic_rule_matches_reference() {
    let calc = Calculator::new(CalculatorConfig { v2_rule: V2Rule::Arithmetic });
    for &(variant, weight, v1, vr, v2) in REFERENCE_SPEEDS {
        let speeds = calc.evaluate(weight, variant).unwrap().speeds().unwrap();
        assert_eq!(speeds, SpeedTriple { v1, vr, v2 });
    }
}

#[test]
fn test_over_max_weight_labels() {
    let over = evaluate(154_501.0, AircraftVariant::Model700).unwrap();
    let labels = OutcomeLabels::render(&over, AircraftVariant::Model700, CeilingLabel::Corrected);
    assert_eq!(labels.v1, "MTOW = 154,500 lb");

    let over = evaluate(174_201.0, AircraftVariant::Model800).unwrap();
    let corrected = OutcomeLabels::render(&over, AircraftVariant::Model800, CeilingLabel::Corrected);
    let legacy = OutcomeLabels::render(&over, AircraftVariant::Model800, CeilingLabel::Legacy);
    assert_eq!(corrected.vr, "MTOW = 174,200 lb");
    assert_eq!(legacy.vr, "MTOW = 154,500 lb");
}

#[test]
fn test_800_weight_between_ceilings() {
    // Above the -700 limit but within the -800 limit
    let result = evaluate(160_000.0, AircraftVariant::Model700).unwrap();
    assert!(result.is_over_max_weight());
    let result = evaluate(160_000.0, AircraftVariant::Model800).unwrap();
    assert!(!result.is_over_max_weight());
}

#[test]
fn test_ceiling_checked_before_validation_of_speeds() {
    // Over-limit weights never reach the digit splice
    let calc = Calculator::default();
    assert!(calc.evaluate(1.0e9, AircraftVariant::Model800).unwrap().is_over_max_weight());
    assert_eq!(calc.evaluate(0.0, AircraftVariant::Model800), Err(SpeedError::InvalidWeight(0.0)));
}
