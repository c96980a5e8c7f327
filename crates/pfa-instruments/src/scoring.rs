use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The answer format every item of an instrument shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerDomain {
    /// Yes/no. A "yes" contributes 1 to its subscale.
    Binary,
    /// 0–3 rating of how much a statement applied over the past week.
    Ordinal,
}

impl AnswerDomain {
    /// Largest value a single item can contribute.
    pub fn max_value(&self) -> u32 {
        match self {
            Self::Binary => 1,
            Self::Ordinal => 3,
        }
    }

    /// Response options in value order, as shown to the respondent.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Binary => &["No", "Yes"],
            Self::Ordinal => &[
                "Did not apply to me at all",
                "Applied to me to some degree",
                "Applied to me to a considerable degree",
                "Applied to me very much",
            ],
        }
    }

    /// The points an answer contributes, or `None` if it is not a valid
    /// answer in this domain.
    pub fn value_of(&self, answer: Answer) -> Option<u32> {
        match (self, answer) {
            (Self::Binary, Answer::Binary(endorsed)) => Some(u32::from(endorsed)),
            (Self::Ordinal, Answer::Ordinal(value)) if (0..=3).contains(&value) => {
                Some(value as u32)
            }
            _ => None,
        }
    }
}

/// One raw answer as collected from a form: `true`/`false` for the SRQ
/// family, an integer for DASS-42.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    Binary(bool),
    Ordinal(i64),
}

impl From<bool> for Answer {
    fn from(endorsed: bool) -> Self {
        Self::Binary(endorsed)
    }
}

impl From<u8> for Answer {
    fn from(value: u8) -> Self {
        Self::Ordinal(i64::from(value))
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(endorsed) => write!(f, "{endorsed}"),
            Self::Ordinal(value) => write!(f, "{value}"),
        }
    }
}

/// A single question within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based position within the instrument.
    pub number: u32,
    pub text: String,
    pub subscale_id: String,
    /// Set on items whose endorsement needs immediate follow-up regardless
    /// of the total (e.g. "Suicidal ideation").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_flag: Option<String>,
}

/// A named partition of an instrument's items, summed independently.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

pub(crate) fn item(number: u32, text: &str, subscale_id: &str) -> Item {
    Item {
        number,
        text: text.to_string(),
        subscale_id: subscale_id.to_string(),
        critical_flag: None,
    }
}

pub(crate) fn subscale(id: &str, name: &str, description: &str) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}
