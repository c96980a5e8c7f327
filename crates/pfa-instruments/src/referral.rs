//! Referral decision table. Each instrument has its own rule; nothing here
//! is shared between instruments except the output shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pfa_core::models::instrument::InstrumentId;
use pfa_core::models::referral::{ReferralSuggestion, ReferralType, ReferralUrgency};
use pfa_core::models::risk::RiskAssessment;
use pfa_core::models::screening::{ScoreResult, Srq29Trigger};

use crate::error::InstrumentError;
use crate::instruments::{dass42, srq20, srq29};
use crate::scoring::Item;
use crate::severity::{self, DassSeverity, Distress};

pub const SRQ20_THRESHOLD: u32 = 8;
pub const SRQ29_TOTAL_THRESHOLD: u32 = 10;
pub const SRQ29_ANXIETY_DEPRESSION_THRESHOLD: u32 = 8;
pub const SRQ29_PSYCHOTIC_THRESHOLD: u32 = 1;
pub const SRQ29_EPILEPTIC_THRESHOLD: u32 = 1;
pub const SRQ29_ALCOHOL_THRESHOLD: u32 = 2;

/// Caller-chosen knobs for the decision table. The SRQ-29 headline rule has
/// two variants in circulation and the integrating system must pick one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferralPolicy {
    pub srq29_trigger: Srq29Trigger,
}

/// Outcome of the decision table for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferralDecision {
    pub referral_needed: bool,
    /// Ids of the rules that fired, in evaluation order.
    pub triggers: Vec<String>,
    pub guidance: Vec<String>,
}

impl ReferralPolicy {
    pub fn new(srq29_trigger: Srq29Trigger) -> Self {
        Self { srq29_trigger }
    }

    pub fn decide(
        &self,
        instrument: InstrumentId,
        totals: &BTreeMap<String, u32>,
    ) -> Result<ReferralDecision, InstrumentError> {
        match instrument {
            InstrumentId::Srq20 => srq20_decision(totals),
            InstrumentId::Srq29 => self.srq29_decision(totals),
            InstrumentId::Dass42 => dass42_decision(totals),
        }
    }

    fn srq29_decision(
        &self,
        totals: &BTreeMap<String, u32>,
    ) -> Result<ReferralDecision, InstrumentError> {
        let instrument = InstrumentId::Srq29;
        let anxiety_depression = total_of(instrument, totals, srq29::ANXIETY_DEPRESSION)?;
        let psychotic = total_of(instrument, totals, srq29::PSYCHOTIC)?;
        let epileptic = total_of(instrument, totals, srq29::EPILEPTIC)?;
        let alcohol = total_of(instrument, totals, srq29::ALCOHOL)?;

        let mut decision = ReferralDecision::default();

        match self.srq29_trigger {
            Srq29Trigger::CombinedTotal => {
                let total = anxiety_depression + psychotic + epileptic + alcohol;
                if total >= SRQ29_TOTAL_THRESHOLD {
                    decision.fire(
                        "total_score",
                        format!(
                            "Overall Distress: Total score of {total} warrants referral to a \
                             mental health professional"
                        ),
                    );
                }
            }
            Srq29Trigger::AnxietyDepression => {
                if anxiety_depression >= SRQ29_ANXIETY_DEPRESSION_THRESHOLD {
                    decision.fire(
                        srq29::ANXIETY_DEPRESSION,
                        "Anxiety/Depression: Refer to mental health professional for further \
                         assessment",
                    );
                }
            }
        }

        if psychotic >= SRQ29_PSYCHOTIC_THRESHOLD {
            decision.fire(
                srq29::PSYCHOTIC,
                "Psychotic Symptoms: Refer to psychiatrist for specialized assessment",
            );
        }
        if epileptic >= SRQ29_EPILEPTIC_THRESHOLD {
            decision.fire(
                srq29::EPILEPTIC,
                "Epileptic Seizures: Refer for medical/neurological assessment",
            );
        }
        if alcohol >= SRQ29_ALCOHOL_THRESHOLD {
            decision.fire(
                srq29::ALCOHOL,
                "Alcohol Use: Refer to specialist for problematic alcohol use",
            );
        }

        Ok(decision)
    }
}

impl ReferralDecision {
    fn fire(&mut self, trigger: &str, guidance: impl Into<String>) {
        self.referral_needed = true;
        self.triggers.push(trigger.to_string());
        self.guidance.push(guidance.into());
    }
}

fn srq20_decision(totals: &BTreeMap<String, u32>) -> Result<ReferralDecision, InstrumentError> {
    let total = total_of(InstrumentId::Srq20, totals, srq20::OVERALL)?;
    let referral_needed = total >= SRQ20_THRESHOLD;

    let guidance = match severity::srq_distress(total) {
        Distress::Severe => {
            "Severe mental distress indicated. Referral to a mental health professional is \
             strongly recommended."
        }
        Distress::Moderate => {
            "Moderate mental distress indicated. Consider referral to a mental health \
             professional."
        }
        Distress::Mild => {
            "Mild mental distress indicated. Continue monitoring and provide basic support."
        }
        Distress::None => "No significant mental distress indicated.",
    };

    Ok(ReferralDecision {
        referral_needed,
        triggers: if referral_needed {
            vec!["total_score".to_string()]
        } else {
            Vec::new()
        },
        guidance: vec![guidance.to_string()],
    })
}

fn dass42_decision(totals: &BTreeMap<String, u32>) -> Result<ReferralDecision, InstrumentError> {
    let scales = [
        (dass42::DEPRESSION, "Depression"),
        (dass42::ANXIETY, "Anxiety"),
        (dass42::STRESS, "Stress"),
    ];

    let mut decision = ReferralDecision::default();
    for (id, name) in scales {
        let total = total_of(InstrumentId::Dass42, totals, id)?;
        let band = severity::dass_severity(id, total).ok_or_else(|| {
            InstrumentError::UnknownSubscale {
                instrument_id: InstrumentId::Dass42.to_string(),
                subscale_id: id.to_string(),
            }
        })?;
        if band >= DassSeverity::Moderate {
            decision.fire(
                id,
                format!(
                    "{name}: {} range. Refer to a mental health professional.",
                    band.label()
                ),
            );
        }
    }

    decision.guidance.push(if decision.referral_needed {
        "Based on the DASS-42 results, this patient may benefit from professional mental \
         health services."
            .to_string()
    } else {
        "Based on the DASS-42 results, this patient does not require immediate professional \
         intervention but should continue to be monitored."
            .to_string()
    });

    Ok(decision)
}

/// Guidance for an endorsed critical item, e.g. SRQ item 17.
pub fn critical_item_guidance(item: &Item) -> Option<String> {
    item.critical_flag.as_ref().map(|flag| {
        format!(
            "{flag} endorsed (item {}): immediate assessment is recommended regardless of \
             total score.",
            item.number
        )
    })
}

/// Starting point for the referral form, from the listening-module risk
/// flags and every screening result on file. `None` means no referral.
pub fn suggest_referral(
    risk: Option<&RiskAssessment>,
    results: &[ScoreResult],
) -> Option<ReferralSuggestion> {
    if risk.is_some_and(|r| r.is_high_risk()) {
        return Some(ReferralSuggestion {
            referral_type: ReferralType::CrisisServices,
            urgency: ReferralUrgency::Emergency,
        });
    }
    if results.iter().any(|r| !r.critical_items.is_empty()) {
        return Some(ReferralSuggestion {
            referral_type: ReferralType::MentalHealthProfessional,
            urgency: ReferralUrgency::Urgent,
        });
    }
    if results.iter().any(|r| r.referral_needed) {
        return Some(ReferralSuggestion {
            referral_type: ReferralType::MentalHealthProfessional,
            urgency: ReferralUrgency::Standard,
        });
    }
    None
}

fn total_of(
    instrument: InstrumentId,
    totals: &BTreeMap<String, u32>,
    subscale_id: &str,
) -> Result<u32, InstrumentError> {
    totals
        .get(subscale_id)
        .copied()
        .ok_or_else(|| InstrumentError::UnknownSubscale {
            instrument_id: instrument.to_string(),
            subscale_id: subscale_id.to_string(),
        })
}
