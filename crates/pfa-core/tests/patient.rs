use std::collections::BTreeMap;

use pfa_core::models::instrument::InstrumentId;
use pfa_core::models::intake::{ListeningNotes, LookObservation};
use pfa_core::models::patient::{AssessmentStep, Patient};
use pfa_core::models::risk::{HarmRisk, RiskAssessment, SuicideRisk};
use pfa_core::models::screening::ScoreResult;

fn at(seconds: i64) -> jiff::Timestamp {
    jiff::Timestamp::from_second(seconds).unwrap()
}

fn result(instrument_id: InstrumentId, total: u32, referral_needed: bool) -> ScoreResult {
    ScoreResult {
        instrument_id,
        subscale_totals: BTreeMap::from([("overall".to_string(), total)]),
        subscale_severity: BTreeMap::new(),
        referral_needed,
        guidance: Vec::new(),
        critical_items: Vec::new(),
        srq29_trigger: None,
    }
}

#[test]
fn new_patient_starts_at_look() {
    let patient = Patient::new("Ada", Some(34), at(1_700_000_000));
    assert_eq!(patient.assessment_step, AssessmentStep::Look);
    assert!(!patient.referral_needed);
    assert!(!patient.is_high_risk());
    assert_eq!(patient.created_at, patient.updated_at);
}

#[test]
fn screening_result_is_merged_and_step_advances() {
    let mut patient = Patient::new("Ada", None, at(1_700_000_000));
    patient.record_screening(result(InstrumentId::Srq20, 9, true), at(1_700_000_100));

    assert_eq!(patient.assessment_step, AssessmentStep::Screening);
    assert!(patient.referral_needed);
    assert_eq!(patient.screening(InstrumentId::Srq20).unwrap().total(), 9);
    assert_eq!(patient.updated_at, at(1_700_000_100));
}

#[test]
fn rescreening_replaces_earlier_result_for_same_instrument() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.record_screening(result(InstrumentId::Srq20, 12, true), at(1));
    patient.record_screening(result(InstrumentId::Srq20, 2, false), at(2));

    assert_eq!(patient.screenings.len(), 1);
    assert!(!patient.referral_needed);
}

#[test]
fn referral_flag_covers_every_instrument_on_file() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.record_screening(result(InstrumentId::Dass42, 25, true), at(1));
    patient.record_screening(result(InstrumentId::Srq20, 1, false), at(2));

    assert!(patient.referral_needed);
}

#[test]
fn step_never_moves_backwards() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.mark_referred(at(1));
    patient.record_listening(RiskAssessment::default(), at(2));
    patient.record_screening(result(InstrumentId::Srq20, 0, false), at(3));

    assert_eq!(patient.assessment_step, AssessmentStep::Referral);
}

#[test]
fn listening_risk_drives_high_risk_flag() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.record_listening(
        RiskAssessment {
            suicide_risk: SuicideRisk::RecentAttempt,
            harm_risk: HarmRisk::NoneIndicated,
        },
        at(1),
    );

    assert!(patient.is_high_risk());
    assert_eq!(patient.assessment_step, AssessmentStep::Listen);
}

#[test]
fn record_serializes_screenings_by_instrument_id() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.record_screening(result(InstrumentId::Srq29, 3, false), at(1));

    let json = serde_json::to_value(&patient).unwrap();
    assert!(json["screenings"].get("SRQ-29").is_some());
    assert_eq!(json["assessment_step"], "screening");
}

#[test]
fn look_observation_drops_signs_without_visible_distress() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.record_look(
        LookObservation {
            appearance: "Disheveled".to_string(),
            eye_contact: "Avoidant".to_string(),
            demeanor: "Withdrawn".to_string(),
            visible_distress: false,
            distress_signs: vec!["Crying".to_string()],
            ..LookObservation::default()
        },
        at(5),
    );

    let look = patient.look.as_ref().unwrap();
    assert!(look.distress_signs.is_empty());
    assert_eq!(look.demeanor, "Withdrawn");
    assert_eq!(patient.assessment_step, AssessmentStep::Look);
    assert_eq!(patient.updated_at, at(5));
}

#[test]
fn listening_notes_advance_to_listen() {
    let mut patient = Patient::new("Ada", None, at(0));
    patient.record_listening_notes(
        ListeningNotes {
            chief_complaint: "Cannot sleep since the flood".to_string(),
            primary_emotion: "Fear".to_string(),
            emotional_intensity: 7,
            support_systems: vec!["Family".to_string()],
            ..ListeningNotes::default()
        },
        at(1),
    );

    assert_eq!(patient.assessment_step, AssessmentStep::Listen);
    assert_eq!(patient.listening.as_ref().unwrap().emotional_intensity, 7);
}

#[test]
fn record_without_intake_fields_still_deserializes() {
    let patient = Patient::new("Ada", None, at(0));
    let mut json = serde_json::to_value(&patient).unwrap();
    let obj = json.as_object_mut().unwrap();
    obj.remove("look");
    obj.remove("listening");

    let back: Patient = serde_json::from_value(json).unwrap();
    assert!(back.look.is_none());
    assert!(back.listening.is_none());
}
