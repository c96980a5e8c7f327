//! The full pipeline: answers → totals → severity labels → referral decision.
//!
//! Any failure aborts the chain; there is no partial result.

use std::collections::BTreeMap;

use pfa_core::models::instrument::InstrumentId;
use pfa_core::models::screening::ScoreResult;

use crate::error::InstrumentError;
use crate::referral::{self, ReferralPolicy};
use crate::scoring::Answer;
use crate::{severity, Instrument};

/// Score, interpret and route one answer vector.
pub fn screen(
    instrument_id: &str,
    answers: &[Answer],
    policy: &ReferralPolicy,
) -> Result<ScoreResult, InstrumentError> {
    let instrument = crate::lookup(instrument_id)?;
    screen_instrument(instrument.as_ref(), answers, policy)
}

pub fn screen_instrument(
    instrument: &dyn Instrument,
    answers: &[Answer],
    policy: &ReferralPolicy,
) -> Result<ScoreResult, InstrumentError> {
    let id = instrument.id();
    tracing::debug!(instrument = %id, answers = answers.len(), "scoring screening");

    let subscale_totals = instrument.score(answers)?;

    let mut subscale_severity = BTreeMap::new();
    for (subscale_id, total) in &subscale_totals {
        let label = severity::interpret(id, subscale_id, *total)?;
        subscale_severity.insert(subscale_id.clone(), label.to_string());
    }

    let decision = policy.decide(id, &subscale_totals)?;

    // Answers were validated by `score`, so only endorsement matters here.
    let domain = instrument.answer_domain();
    let critical: Vec<_> = instrument
        .items()
        .iter()
        .zip(answers)
        .filter(|(item, answer)| {
            item.critical_flag.is_some() && domain.value_of(**answer).is_some_and(|v| v > 0)
        })
        .map(|(item, _)| item)
        .collect();

    let mut guidance: Vec<String> = critical
        .iter()
        .filter_map(|item| referral::critical_item_guidance(item))
        .collect();
    guidance.extend(decision.guidance);

    if !critical.is_empty() {
        tracing::warn!(instrument = %id, items = critical.len(), "critical item endorsed");
    }
    if decision.referral_needed {
        tracing::info!(instrument = %id, triggers = ?decision.triggers, "referral indicated");
    }

    Ok(ScoreResult {
        instrument_id: id,
        subscale_totals,
        subscale_severity,
        referral_needed: decision.referral_needed,
        guidance,
        critical_items: critical.iter().map(|item| item.number).collect(),
        srq29_trigger: (id == InstrumentId::Srq29).then_some(policy.srq29_trigger),
    })
}
