//! Free-form observations from the Look and Listen steps. The engine never
//! reads these; they are carried on the patient record for the counselor.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What the counselor observed before any conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LookObservation {
    pub appearance: String,
    pub eye_contact: String,
    pub demeanor: String,
    pub visible_distress: bool,
    /// Empty unless `visible_distress` is set.
    #[serde(default)]
    pub distress_signs: Vec<String>,
    #[serde(default)]
    pub immediate_concerns: String,
    #[serde(default)]
    pub physical_notes: String,
}

impl LookObservation {
    /// Drop recorded signs when no visible distress was reported.
    pub fn normalized(mut self) -> Self {
        if !self.visible_distress {
            self.distress_signs.clear();
        }
        self
    }
}

/// Narrative notes from the listening interview. Risk flags live in
/// [`RiskAssessment`](super::risk::RiskAssessment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListeningNotes {
    pub chief_complaint: String,
    #[serde(default)]
    pub narrative: String,
    pub primary_emotion: String,
    /// 1 (minimal) to 10 (extreme).
    pub emotional_intensity: u8,
    #[serde(default)]
    pub support_systems: Vec<String>,
    #[serde(default)]
    pub coping_strategies: String,
    #[serde(default)]
    pub counselor_notes: String,
}
