//! pfa-instruments
//!
//! The screening engine. Question banks for SRQ-20, SRQ-29 and DASS-42,
//! plus the scorer, severity interpreter and referral policy that turn a
//! raw answer vector into a [`ScoreResult`]. Pure and stateless, no I/O.

pub mod engine;
pub mod error;
pub mod instruments;
pub mod referral;
pub mod scoring;
pub mod severity;

use std::collections::BTreeMap;

use pfa_core::models::instrument::InstrumentId;
use pfa_core::models::screening::ScoreResult;

use error::InstrumentError;
use scoring::{Answer, AnswerDomain, Item, Subscale};

pub use engine::screen;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Human-readable name (e.g., "Self-Reporting Questionnaire (SRQ-20)").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Answer format shared by every item.
    fn answer_domain(&self) -> AnswerDomain;

    /// Subscales in display order.
    fn subscales(&self) -> &[Subscale];

    /// Items in administration order. Every item names exactly one of
    /// [`Instrument::subscales`].
    fn items(&self) -> &[Item];

    /// Highest total a subscale can reach.
    fn max_total(&self, subscale_id: &str) -> Option<u32> {
        if !self.subscales().iter().any(|s| s.id == subscale_id) {
            return None;
        }
        let count = self
            .items()
            .iter()
            .filter(|i| i.subscale_id == subscale_id)
            .count() as u32;
        Some(count * self.answer_domain().max_value())
    }

    /// Reduce an answer vector to raw per-subscale totals.
    ///
    /// Every item needs an answer; answers outside the item's domain are
    /// rejected rather than summed.
    fn score(&self, answers: &[Answer]) -> Result<BTreeMap<String, u32>, InstrumentError> {
        let items = self.items();
        if answers.len() != items.len() {
            return Err(InstrumentError::AnswerCountMismatch {
                instrument_id: self.id().to_string(),
                expected: items.len(),
                actual: answers.len(),
            });
        }

        let domain = self.answer_domain();
        let mut totals: BTreeMap<String, u32> = self
            .subscales()
            .iter()
            .map(|s| (s.id.clone(), 0))
            .collect();

        for (item, answer) in items.iter().zip(answers) {
            let value =
                domain
                    .value_of(*answer)
                    .ok_or_else(|| InstrumentError::InvalidAnswerValue {
                        instrument_id: self.id().to_string(),
                        item: item.number,
                        value: answer.to_string(),
                    })?;
            let total = totals.get_mut(&item.subscale_id).ok_or_else(|| {
                InstrumentError::UnknownSubscale {
                    instrument_id: self.id().to_string(),
                    subscale_id: item.subscale_id.clone(),
                }
            })?;
            *total += value;
        }

        Ok(totals)
    }

    /// Format a result as structured text for inclusion in a report.
    fn to_structured_input(&self, result: &ScoreResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for subscale in self.subscales() {
            if let Some(total) = result.subscale_total(&subscale.id) {
                let max = self.max_total(&subscale.id).unwrap_or_default();
                output.push_str(&format!("- {}: {total}/{max}", subscale.name));
                if let Some(label) = result.severity(&subscale.id) {
                    output.push_str(&format!(" ({label})"));
                }
                output.push('\n');
            }
        }
        output.push_str(&format!(
            "\nReferral needed: {}\n",
            if result.referral_needed { "yes" } else { "no" }
        ));
        if !result.guidance.is_empty() {
            output.push_str("\n### Guidance\n");
            for line in &result.guidance {
                output.push_str(&format!("- {line}\n"));
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    InstrumentId::ALL.into_iter().map(instrument).collect()
}

pub fn instrument(id: InstrumentId) -> Box<dyn Instrument> {
    match id {
        InstrumentId::Srq20 => Box::new(instruments::srq20::Srq20),
        InstrumentId::Srq29 => Box::new(instruments::srq29::Srq29),
        InstrumentId::Dass42 => Box::new(instruments::dass42::Dass42),
    }
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    id.parse().ok().map(instrument)
}

fn lookup(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

/// Ordered item bank for an instrument.
pub fn items_for(instrument_id: &str) -> Result<Vec<Item>, InstrumentError> {
    Ok(lookup(instrument_id)?.items().to_vec())
}

/// Raw per-subscale totals for an answer vector.
pub fn score(
    instrument_id: &str,
    answers: &[Answer],
) -> Result<BTreeMap<String, u32>, InstrumentError> {
    lookup(instrument_id)?.score(answers)
}

/// Severity label for one subscale total.
pub fn interpret(
    instrument_id: &str,
    subscale_id: &str,
    total: u32,
) -> Result<&'static str, InstrumentError> {
    severity::interpret(lookup(instrument_id)?.id(), subscale_id, total)
}
