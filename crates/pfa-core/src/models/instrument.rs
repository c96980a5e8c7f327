use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Stable identifier of a supported screening instrument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum InstrumentId {
    #[serde(rename = "SRQ-20")]
    Srq20,
    #[serde(rename = "SRQ-29")]
    Srq29,
    #[serde(rename = "DASS-42")]
    Dass42,
}

impl InstrumentId {
    pub const ALL: [InstrumentId; 3] = [Self::Srq20, Self::Srq29, Self::Dass42];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srq20 => "SRQ-20",
            Self::Srq29 => "SRQ-29",
            Self::Dass42 => "DASS-42",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    /// Accepts the canonical id ("SRQ-20") as well as the loose spellings
    /// forms tend to produce ("srq20", "dass_42").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "SRQ20" => Ok(Self::Srq20),
            "SRQ29" => Ok(Self::Srq29),
            "DASS42" => Ok(Self::Dass42),
            _ => Err(CoreError::UnknownInstrument(s.to_string())),
        }
    }
}
