use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::InstrumentId;

/// Which headline rule opens an SRQ-29 referral. Both variants are OR'd
/// with the psychotic, epileptic and alcohol triggers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Srq29Trigger {
    /// Sum of all four subscales is 10 or more.
    #[default]
    CombinedTotal,
    /// Anxiety/depression block alone is 8 or more.
    AnxietyDepression,
}

/// Output of one screening run. Produced by the engine, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: InstrumentId,
    pub subscale_totals: BTreeMap<String, u32>,
    pub subscale_severity: BTreeMap<String, String>,
    pub referral_needed: bool,
    pub guidance: Vec<String>,
    /// 1-based numbers of endorsed items that call for immediate follow-up.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_items: Vec<u32>,
    /// Set only for SRQ-29, recording which headline rule was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srq29_trigger: Option<Srq29Trigger>,
}

impl ScoreResult {
    /// Sum across every subscale.
    pub fn total(&self) -> u32 {
        self.subscale_totals.values().sum()
    }

    pub fn subscale_total(&self, subscale_id: &str) -> Option<u32> {
        self.subscale_totals.get(subscale_id).copied()
    }

    pub fn severity(&self, subscale_id: &str) -> Option<&str> {
        self.subscale_severity.get(subscale_id).map(String::as_str)
    }
}
