use pfa_instruments::error::InstrumentError;
use pfa_instruments::interpret;
use pfa_instruments::severity::{dass_anxiety, dass_depression, dass_stress, DassSeverity};

#[test]
fn srq20_band_boundaries() {
    let cases = [
        (0, "No significant mental distress"),
        (4, "No significant mental distress"),
        (5, "Mild mental distress"),
        (7, "Mild mental distress"),
        (8, "Moderate mental distress"),
        (10, "Moderate mental distress"),
        (11, "Severe mental distress"),
        (20, "Severe mental distress"),
    ];
    for (total, label) in cases {
        assert_eq!(interpret("SRQ-20", "overall", total).unwrap(), label, "total {total}");
    }
}

#[test]
fn srq29_anxiety_depression_uses_srq20_scale() {
    assert_eq!(
        interpret("SRQ-29", "anxiety_depression", 8).unwrap(),
        "Moderate mental distress"
    );
}

#[test]
fn srq29_psychotic_and_epileptic_are_binary() {
    assert_eq!(interpret("SRQ-29", "psychotic", 0).unwrap(), "No psychotic symptoms indicated");
    assert_eq!(
        interpret("SRQ-29", "psychotic", 3).unwrap(),
        "Psychotic symptoms indicated - requires specialist assessment"
    );
    assert_eq!(interpret("SRQ-29", "epileptic", 0).unwrap(), "No epileptic seizures indicated");
    assert_eq!(
        interpret("SRQ-29", "epileptic", 1).unwrap(),
        "Epileptic seizures indicated - requires medical assessment"
    );
}

#[test]
fn srq29_alcohol_has_three_bands() {
    assert_eq!(interpret("SRQ-29", "alcohol", 0).unwrap(), "No problematic alcohol use indicated");
    assert_eq!(interpret("SRQ-29", "alcohol", 1).unwrap(), "Possible problematic alcohol use");
    assert_eq!(
        interpret("SRQ-29", "alcohol", 2).unwrap(),
        "Problematic alcohol use indicated - requires specialist assessment"
    );
}

#[test]
fn dass_depression_boundaries() {
    let cases = [
        (9, "Normal"),
        (10, "Mild"),
        (13, "Mild"),
        (14, "Moderate"),
        (20, "Moderate"),
        (21, "Severe"),
        (27, "Severe"),
        (28, "Extremely Severe"),
    ];
    for (total, label) in cases {
        assert_eq!(interpret("DASS-42", "depression", total).unwrap(), label, "total {total}");
    }
}

#[test]
fn dass_anxiety_boundaries() {
    assert_eq!(dass_anxiety(7), DassSeverity::Normal);
    assert_eq!(dass_anxiety(8), DassSeverity::Mild);
    assert_eq!(dass_anxiety(9), DassSeverity::Mild);
    assert_eq!(dass_anxiety(10), DassSeverity::Moderate);
    assert_eq!(dass_anxiety(14), DassSeverity::Moderate);
    assert_eq!(dass_anxiety(15), DassSeverity::Severe);
    assert_eq!(dass_anxiety(19), DassSeverity::Severe);
    assert_eq!(dass_anxiety(20), DassSeverity::ExtremelySevere);
}

#[test]
fn dass_stress_boundaries() {
    assert_eq!(dass_stress(14), DassSeverity::Normal);
    assert_eq!(dass_stress(15), DassSeverity::Mild);
    assert_eq!(dass_stress(18), DassSeverity::Mild);
    assert_eq!(dass_stress(19), DassSeverity::Moderate);
    assert_eq!(dass_stress(25), DassSeverity::Moderate);
    assert_eq!(dass_stress(26), DassSeverity::Severe);
    assert_eq!(dass_stress(33), DassSeverity::Severe);
    assert_eq!(dass_stress(34), DassSeverity::ExtremelySevere);
}

#[test]
fn dass_scales_are_not_interchangeable() {
    // 14 is Moderate depression, Moderate anxiety, Normal stress.
    assert_eq!(dass_depression(14), DassSeverity::Moderate);
    assert_eq!(dass_anxiety(14), DassSeverity::Moderate);
    assert_eq!(dass_stress(14), DassSeverity::Normal);
    // 9 is Normal depression but Mild anxiety.
    assert_eq!(dass_depression(9), DassSeverity::Normal);
    assert_eq!(dass_anxiety(9), DassSeverity::Mild);
}

#[test]
fn dass_scale_names_match_case_insensitively() {
    assert_eq!(interpret("DASS-42", "Depression", 28).unwrap(), "Extremely Severe");
    assert_eq!(interpret("DASS-42", "STRESS", 0).unwrap(), "Normal");
}

#[test]
fn subscale_from_another_instrument_is_unknown() {
    for (instrument, subscale) in [("SRQ-20", "psychotic"), ("SRQ-29", "overall"), ("DASS-42", "alcohol")] {
        let err = interpret(instrument, subscale, 0).unwrap_err();
        assert!(
            matches!(err, InstrumentError::UnknownSubscale { ref subscale_id, .. } if subscale_id == subscale),
            "{instrument}/{subscale}"
        );
    }
}

#[test]
fn unknown_instrument_is_reported_before_subscale() {
    assert!(matches!(
        interpret("SRQ-99", "overall", 0),
        Err(InstrumentError::UnknownInstrument(_))
    ));
}
