use pfa_core::error::CoreError;
use pfa_core::models::instrument::InstrumentId;

#[test]
fn canonical_ids_parse() {
    assert_eq!("SRQ-20".parse::<InstrumentId>().unwrap(), InstrumentId::Srq20);
    assert_eq!("SRQ-29".parse::<InstrumentId>().unwrap(), InstrumentId::Srq29);
    assert_eq!("DASS-42".parse::<InstrumentId>().unwrap(), InstrumentId::Dass42);
}

#[test]
fn loose_spellings_parse() {
    assert_eq!("srq20".parse::<InstrumentId>().unwrap(), InstrumentId::Srq20);
    assert_eq!(" dass_42 ".parse::<InstrumentId>().unwrap(), InstrumentId::Dass42);
}

#[test]
fn unknown_id_is_rejected() {
    let err = "SRQ-99".parse::<InstrumentId>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownInstrument(ref id) if id == "SRQ-99"));
}

#[test]
fn display_round_trips_through_serde_name() {
    for id in InstrumentId::ALL {
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
