use pfa_core::models::instrument::InstrumentId;

use crate::scoring::{item, subscale, AnswerDomain, Item, Subscale};
use crate::Instrument;

pub const OVERALL: &str = "overall";

/// Item asking whether the thought of ending one's life has been on the
/// respondent's mind.
pub const SUICIDAL_IDEATION_ITEM: u32 = 17;

const QUESTIONS: [&str; 20] = [
    "Do you often have headaches?",
    "Is your appetite poor?",
    "Do you sleep badly?",
    "Are you easily frightened?",
    "Do your hands shake?",
    "Do you feel nervous, tense or worried?",
    "Is your digestion poor?",
    "Do you have trouble thinking clearly?",
    "Do you feel unhappy?",
    "Do you cry more than usual?",
    "Do you find it difficult to enjoy your daily activities?",
    "Do you find it difficult to make decisions?",
    "Is your daily work suffering?",
    "Are you unable to play a useful part in life?",
    "Have you lost interest in things?",
    "Do you feel that you are a worthless person?",
    "Has the thought of ending your life been on your mind?",
    "Do you feel tired all the time?",
    "Do you have uncomfortable feelings in your stomach?",
    "Are you easily tired?",
];

/// SRQ-20: WHO Self-Reporting Questionnaire.
/// 20 yes/no items about the past 30 days, counted into one total (0–20).
pub struct Srq20;

impl Instrument for Srq20 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Srq20
    }

    fn name(&self) -> &str {
        "Self-Reporting Questionnaire (SRQ-20)"
    }

    fn description(&self) -> &str {
        "Screens for common mental disorders, particularly anxiety and depression, \
         in primary care settings."
    }

    fn answer_domain(&self) -> AnswerDomain {
        AnswerDomain::Binary
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            vec![subscale(
                OVERALL,
                "Overall",
                "Count of 'yes' answers across all 20 items",
            )]
        });
        &SUBSCALES
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> =
            std::sync::LazyLock::new(|| common_items(OVERALL));
        &ITEMS
    }
}

/// The 20 core SRQ items, all assigned to `subscale_id`. SRQ-29 reuses them
/// as its anxiety/depression block.
pub(crate) fn common_items(subscale_id: &str) -> Vec<Item> {
    (1u32..)
        .zip(QUESTIONS)
        .map(|(number, text)| {
            let mut entry = item(number, text, subscale_id);
            if number == SUICIDAL_IDEATION_ITEM {
                entry.critical_flag = Some("Suicidal ideation".to_string());
            }
            entry
        })
        .collect()
}
