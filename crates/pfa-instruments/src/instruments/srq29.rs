use pfa_core::models::instrument::InstrumentId;

use super::srq20;
use crate::scoring::{item, subscale, AnswerDomain, Item, Subscale};
use crate::Instrument;

pub const ANXIETY_DEPRESSION: &str = "anxiety_depression";
pub const PSYCHOTIC: &str = "psychotic";
pub const EPILEPTIC: &str = "epileptic";
pub const ALCOHOL: &str = "alcohol";

// Items 21–29, in order. Items 1–20 are the SRQ-20 block.
const ADDITIONAL: [(&str, &str); 9] = [
    (PSYCHOTIC, "Do you feel that somebody has been trying to harm you in some way?"),
    (PSYCHOTIC, "Are you a much more important person than most people think?"),
    (PSYCHOTIC, "Have you noticed any interference or anything unusual in your thinking?"),
    (
        PSYCHOTIC,
        "Do you ever hear voices without knowing where they come from or which other people cannot hear?",
    ),
    (EPILEPTIC, "Have you ever had convulsions or seizures?"),
    (ALCOHOL, "Do you find it difficult to stop drinking once you start?"),
    (
        ALCOHOL,
        "Has a friend or family member ever told you about things you said or did while drinking that you could not remember?",
    ),
    (ALCOHOL, "Do you ever feel you need to cut down on your drinking?"),
    (ALCOHOL, "Do you ever feel bad or guilty about your drinking?"),
];

/// SRQ-29 (WHO): the SRQ-20 plus screening items for psychotic symptoms,
/// epileptic seizures and problematic alcohol use (CAGE-derived).
/// Subscales: 1–20 anxiety/depression, 21–24 psychotic, 25 epileptic,
/// 26–29 alcohol.
pub struct Srq29;

impl Instrument for Srq29 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Srq29
    }

    fn name(&self) -> &str {
        "Self-Reporting Questionnaire (SRQ-29 WHO)"
    }

    fn description(&self) -> &str {
        "Extended SRQ-20 with additional questions about psychotic symptoms, \
         epileptic seizures, and alcohol use."
    }

    fn answer_domain(&self) -> AnswerDomain {
        AnswerDomain::Binary
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            vec![
                subscale(
                    ANXIETY_DEPRESSION,
                    "Anxiety/Depression",
                    "Questions 1-20, same scale as SRQ-20",
                ),
                subscale(
                    PSYCHOTIC,
                    "Psychotic Symptoms",
                    "Questions 21-24; any 'yes' warrants specialist assessment",
                ),
                subscale(
                    EPILEPTIC,
                    "Epileptic Seizures",
                    "Question 25; a 'yes' warrants medical/neurological assessment",
                ),
                subscale(
                    ALCOHOL,
                    "Alcohol Use",
                    "Questions 26-29; 2 or more suggests problematic alcohol use",
                ),
            ]
        });
        &SUBSCALES
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let mut items = srq20::common_items(ANXIETY_DEPRESSION);
            items.extend(
                (21u32..)
                    .zip(ADDITIONAL)
                    .map(|(number, (subscale_id, text))| item(number, text, subscale_id)),
            );
            items
        });
        &ITEMS
    }
}
