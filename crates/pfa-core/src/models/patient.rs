use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentId;
use super::intake::{ListeningNotes, LookObservation};
use super::risk::RiskAssessment;
use super::screening::ScoreResult;

/// Stage of the Look, Listen, Link pipeline a patient has reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStep {
    #[default]
    Look,
    Listen,
    Screening,
    Referral,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: Option<u32>,
    #[serde(default)]
    pub look: Option<LookObservation>,
    #[serde(default)]
    pub listening: Option<ListeningNotes>,
    pub risk: Option<RiskAssessment>,
    /// Latest result per instrument.
    #[serde(default)]
    pub screenings: BTreeMap<InstrumentId, ScoreResult>,
    pub assessment_step: AssessmentStep,
    pub referral_needed: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: Option<u32>, at: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            look: None,
            listening: None,
            risk: None,
            screenings: BTreeMap::new(),
            assessment_step: AssessmentStep::Look,
            referral_needed: false,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn record_look(&mut self, observation: LookObservation, at: jiff::Timestamp) {
        self.look = Some(observation.normalized());
        self.updated_at = at;
    }

    pub fn record_listening_notes(&mut self, notes: ListeningNotes, at: jiff::Timestamp) {
        self.listening = Some(notes);
        self.advance_to(AssessmentStep::Listen);
        self.updated_at = at;
    }

    pub fn record_listening(&mut self, risk: RiskAssessment, at: jiff::Timestamp) {
        self.risk = Some(risk);
        self.advance_to(AssessmentStep::Listen);
        self.updated_at = at;
    }

    /// Merge a screening result into the record. A later result for the same
    /// instrument replaces the earlier one; `referral_needed` reflects every
    /// instrument currently on file.
    pub fn record_screening(&mut self, result: ScoreResult, at: jiff::Timestamp) {
        self.screenings.insert(result.instrument_id, result);
        self.referral_needed = self.screenings.values().any(|r| r.referral_needed);
        self.advance_to(AssessmentStep::Screening);
        self.updated_at = at;
    }

    pub fn mark_referred(&mut self, at: jiff::Timestamp) {
        self.advance_to(AssessmentStep::Referral);
        self.updated_at = at;
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk.is_some_and(|r| r.is_high_risk())
    }

    pub fn screening(&self, instrument_id: InstrumentId) -> Option<&ScoreResult> {
        self.screenings.get(&instrument_id)
    }

    fn advance_to(&mut self, step: AssessmentStep) {
        self.assessment_step = self.assessment_step.max(step);
    }
}
