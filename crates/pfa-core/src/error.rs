use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),
}
