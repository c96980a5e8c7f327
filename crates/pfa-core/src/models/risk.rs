//! Risk flags captured by the listening module before any screening runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SuicideRisk {
    #[default]
    #[serde(rename = "None indicated")]
    NoneIndicated,
    #[serde(rename = "Passive thoughts")]
    PassiveThoughts,
    #[serde(rename = "Active ideation without plan")]
    ActiveIdeationWithoutPlan,
    #[serde(rename = "Active ideation with plan")]
    ActiveIdeationWithPlan,
    #[serde(rename = "Recent attempt")]
    RecentAttempt,
}

impl SuicideRisk {
    pub const ALL: [SuicideRisk; 5] = [
        Self::NoneIndicated,
        Self::PassiveThoughts,
        Self::ActiveIdeationWithoutPlan,
        Self::ActiveIdeationWithPlan,
        Self::RecentAttempt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoneIndicated => "None indicated",
            Self::PassiveThoughts => "Passive thoughts",
            Self::ActiveIdeationWithoutPlan => "Active ideation without plan",
            Self::ActiveIdeationWithPlan => "Active ideation with plan",
            Self::RecentAttempt => "Recent attempt",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HarmRisk {
    #[default]
    #[serde(rename = "None indicated")]
    NoneIndicated,
    Low,
    Moderate,
    High,
}

impl HarmRisk {
    pub const ALL: [HarmRisk; 4] = [Self::NoneIndicated, Self::Low, Self::Moderate, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoneIndicated => "None indicated",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

macro_rules! label_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| CoreError::UnknownRiskLevel(s.to_string()))
            }
        }
    };
}

label_conversions!(SuicideRisk);
label_conversions!(HarmRisk);

/// The counselor's risk judgement from the listening interview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub suicide_risk: SuicideRisk,
    pub harm_risk: HarmRisk,
}

impl RiskAssessment {
    /// A concrete suicide plan, a recent attempt, or at least moderate risk to
    /// others.
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self.suicide_risk,
            SuicideRisk::ActiveIdeationWithPlan | SuicideRisk::RecentAttempt
        ) || matches!(self.harm_risk, HarmRisk::Moderate | HarmRisk::High)
    }
}
