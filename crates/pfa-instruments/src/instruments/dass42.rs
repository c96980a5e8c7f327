use pfa_core::models::instrument::InstrumentId;

use crate::scoring::{item, subscale, AnswerDomain, Item, Subscale};
use crate::Instrument;

pub const DEPRESSION: &str = "depression";
pub const ANXIETY: &str = "anxiety";
pub const STRESS: &str = "stress";

// Grouped by scale: items 1–14 depression, 15–28 anxiety, 29–42 stress.
const QUESTIONS: [(&str, &str); 42] = [
    (DEPRESSION, "I couldn't seem to experience any positive feeling at all"),
    (DEPRESSION, "I just couldn't seem to get going"),
    (DEPRESSION, "I felt that I had nothing to look forward to"),
    (DEPRESSION, "I felt sad and depressed"),
    (DEPRESSION, "I felt that I had lost interest in just about everything"),
    (DEPRESSION, "I felt I wasn't worth much as a person"),
    (DEPRESSION, "I felt that life wasn't worthwhile"),
    (DEPRESSION, "I couldn't seem to get any enjoyment out of the things I did"),
    (DEPRESSION, "I felt down-hearted and blue"),
    (DEPRESSION, "I was unable to become enthusiastic about anything"),
    (DEPRESSION, "I felt I was pretty worthless"),
    (DEPRESSION, "I could see nothing in the future to be hopeful about"),
    (DEPRESSION, "I felt that life was meaningless"),
    (DEPRESSION, "I found it difficult to work up the initiative to do things"),
    (ANXIETY, "I was aware of dryness of my mouth"),
    (ANXIETY, "I experienced breathing difficulty"),
    (ANXIETY, "I had a feeling of shakiness"),
    (
        ANXIETY,
        "I found myself in situations that made me so anxious I was most relieved when they ended",
    ),
    (ANXIETY, "I had a feeling of faintness"),
    (
        ANXIETY,
        "I perspired noticeably in the absence of high temperatures or physical exertion",
    ),
    (ANXIETY, "I felt scared without any good reason"),
    (ANXIETY, "I had difficulty in swallowing"),
    (
        ANXIETY,
        "I was aware of the action of my heart in the absence of physical exertion",
    ),
    (ANXIETY, "I felt I was close to panic"),
    (
        ANXIETY,
        "I feared that I would be 'thrown' by some trivial but unfamiliar task",
    ),
    (ANXIETY, "I felt terrified"),
    (
        ANXIETY,
        "I was worried about situations in which I might panic and make a fool of myself",
    ),
    (ANXIETY, "I experienced trembling (e.g., in the hands)"),
    (STRESS, "I found myself getting upset by quite trivial things"),
    (STRESS, "I tended to over-react to situations"),
    (STRESS, "I found it difficult to relax"),
    (STRESS, "I found myself getting upset rather easily"),
    (STRESS, "I felt that I was using a lot of nervous energy"),
    (
        STRESS,
        "I found myself getting impatient when I was delayed in any way",
    ),
    (STRESS, "I felt that I was rather touchy"),
    (STRESS, "I found it hard to wind down"),
    (STRESS, "I found that I was very irritable"),
    (STRESS, "I found it hard to calm down after something upset me"),
    (
        STRESS,
        "I found it difficult to tolerate interruptions to what I was doing",
    ),
    (STRESS, "I was in a state of nervous tension"),
    (
        STRESS,
        "I was intolerant of anything that kept me from getting on with what I was doing",
    ),
    (STRESS, "I found myself getting agitated"),
];

/// DASS-42: Depression Anxiety Stress Scales.
/// Three 14-item scales, each item rated 0–3. Each scale totals 0–42.
pub struct Dass42;

impl Instrument for Dass42 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Dass42
    }

    fn name(&self) -> &str {
        "Depression Anxiety Stress Scale (DASS-42)"
    }

    fn description(&self) -> &str {
        "Three self-report scales measuring the emotional states of depression, \
         anxiety and stress over the past week."
    }

    fn answer_domain(&self) -> AnswerDomain {
        AnswerDomain::Ordinal
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            vec![
                subscale(
                    DEPRESSION,
                    "Depression",
                    "Dysphoria, hopelessness, devaluation of life, self-deprecation, \
                     lack of interest/involvement, anhedonia and inertia",
                ),
                subscale(
                    ANXIETY,
                    "Anxiety",
                    "Autonomic arousal, skeletal muscle effects, situational anxiety \
                     and subjective experience of anxious affect",
                ),
                subscale(
                    STRESS,
                    "Stress",
                    "Difficulty relaxing, nervous arousal, and being easily upset, \
                     irritable or impatient",
                ),
            ]
        });
        &SUBSCALES
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            (1u32..)
                .zip(QUESTIONS)
                .map(|(number, (subscale_id, text))| item(number, text, subscale_id))
                .collect()
        });
        &ITEMS
    }
}
