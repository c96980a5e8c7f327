use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReferralType {
    #[serde(rename = "Mental Health Professional")]
    MentalHealthProfessional,
    #[serde(rename = "Healthcare Provider")]
    HealthcareProvider,
    #[serde(rename = "Crisis Services")]
    CrisisServices,
    #[serde(rename = "Social Services")]
    SocialServices,
    #[serde(rename = "School Counselor")]
    SchoolCounselor,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReferralUrgency {
    #[serde(rename = "Emergency (Immediate)")]
    Emergency,
    #[serde(rename = "Urgent (24-48 hours)")]
    Urgent,
    #[default]
    #[serde(rename = "Standard (1-2 weeks)")]
    Standard,
    Routine,
}

/// Where and how fast to route a patient. The referral workflow may
/// override it; this is only the starting suggestion shown to the counselor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferralSuggestion {
    pub referral_type: ReferralType,
    pub urgency: ReferralUrgency,
}
