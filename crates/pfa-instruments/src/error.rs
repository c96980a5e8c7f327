use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument_id} expects {expected} answers, got {actual}")]
    AnswerCountMismatch {
        instrument_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{instrument_id}: answer {value} for item {item} is outside the item's answer domain")]
    InvalidAnswerValue {
        instrument_id: String,
        /// 1-based item number.
        item: u32,
        value: String,
    },

    #[error("unknown subscale '{subscale_id}' for instrument '{instrument_id}'")]
    UnknownSubscale {
        instrument_id: String,
        subscale_id: String,
    },
}

