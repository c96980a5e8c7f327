//! Severity banding: raw subscale total in, ordinal label out.
//!
//! Every boundary is inclusive and literal. The three DASS-42 scales have
//! their own cut points and are not interchangeable.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pfa_core::models::instrument::InstrumentId;

use crate::error::InstrumentError;
use crate::instruments::{dass42, srq20, srq29};

/// SRQ distress band. Shared by SRQ-20 and the SRQ-29 anxiety/depression block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Distress {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Distress {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No significant mental distress",
            Self::Mild => "Mild mental distress",
            Self::Moderate => "Moderate mental distress",
            Self::Severe => "Severe mental distress",
        }
    }
}

pub fn srq_distress(total: u32) -> Distress {
    match total {
        0..=4 => Distress::None,
        5..=7 => Distress::Mild,
        8..=10 => Distress::Moderate,
        _ => Distress::Severe,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DassSeverity {
    Normal,
    Mild,
    Moderate,
    Severe,
    ExtremelySevere,
}

impl DassSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::ExtremelySevere => "Extremely Severe",
        }
    }
}

pub fn dass_depression(total: u32) -> DassSeverity {
    match total {
        0..=9 => DassSeverity::Normal,
        10..=13 => DassSeverity::Mild,
        14..=20 => DassSeverity::Moderate,
        21..=27 => DassSeverity::Severe,
        _ => DassSeverity::ExtremelySevere,
    }
}

pub fn dass_anxiety(total: u32) -> DassSeverity {
    match total {
        0..=7 => DassSeverity::Normal,
        8..=9 => DassSeverity::Mild,
        10..=14 => DassSeverity::Moderate,
        15..=19 => DassSeverity::Severe,
        _ => DassSeverity::ExtremelySevere,
    }
}

pub fn dass_stress(total: u32) -> DassSeverity {
    match total {
        0..=14 => DassSeverity::Normal,
        15..=18 => DassSeverity::Mild,
        19..=25 => DassSeverity::Moderate,
        26..=33 => DassSeverity::Severe,
        _ => DassSeverity::ExtremelySevere,
    }
}

/// Band a DASS-42 scale by id. `None` if the id is not a DASS-42 scale.
pub fn dass_severity(subscale_id: &str, total: u32) -> Option<DassSeverity> {
    match subscale_id.to_ascii_lowercase().as_str() {
        dass42::DEPRESSION => Some(dass_depression(total)),
        dass42::ANXIETY => Some(dass_anxiety(total)),
        dass42::STRESS => Some(dass_stress(total)),
        _ => None,
    }
}

pub fn psychotic(total: u32) -> &'static str {
    if total == 0 {
        "No psychotic symptoms indicated"
    } else {
        "Psychotic symptoms indicated - requires specialist assessment"
    }
}

pub fn epileptic(total: u32) -> &'static str {
    if total == 0 {
        "No epileptic seizures indicated"
    } else {
        "Epileptic seizures indicated - requires medical assessment"
    }
}

pub fn alcohol(total: u32) -> &'static str {
    match total {
        0 => "No problematic alcohol use indicated",
        1 => "Possible problematic alcohol use",
        _ => "Problematic alcohol use indicated - requires specialist assessment",
    }
}

/// Severity label for one subscale total. Subscale ids match
/// case-insensitively, so "Depression" and "depression" are the same scale.
pub fn interpret(
    instrument: InstrumentId,
    subscale_id: &str,
    total: u32,
) -> Result<&'static str, InstrumentError> {
    let subscale = subscale_id.to_ascii_lowercase();
    let label = match (instrument, subscale.as_str()) {
        (InstrumentId::Srq20, srq20::OVERALL) => srq_distress(total).label(),
        (InstrumentId::Srq29, srq29::ANXIETY_DEPRESSION) => srq_distress(total).label(),
        (InstrumentId::Srq29, srq29::PSYCHOTIC) => psychotic(total),
        (InstrumentId::Srq29, srq29::EPILEPTIC) => epileptic(total),
        (InstrumentId::Srq29, srq29::ALCOHOL) => alcohol(total),
        (InstrumentId::Dass42, scale) => dass_severity(scale, total)
            .ok_or_else(|| unknown_subscale(instrument, subscale_id))?
            .label(),
        _ => return Err(unknown_subscale(instrument, subscale_id)),
    };
    Ok(label)
}

fn unknown_subscale(instrument: InstrumentId, subscale_id: &str) -> InstrumentError {
    InstrumentError::UnknownSubscale {
        instrument_id: instrument.to_string(),
        subscale_id: subscale_id.to_string(),
    }
}
