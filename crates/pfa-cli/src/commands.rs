use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pfa_core::models::screening::ScoreResult;
use pfa_instruments::error::InstrumentError;
use pfa_instruments::referral::ReferralPolicy;
use pfa_instruments::scoring::{Answer, AnswerDomain, Item, Subscale};
use pfa_instruments::{all_instruments, get_instrument};

/// One scoring request as submitted by a form or another service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRequest {
    pub instrument_id: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
    pub item_count: usize,
}

#[derive(Debug, Serialize)]
pub struct InstrumentDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub answer_domain: AnswerDomain,
    pub answer_options: Vec<String>,
    pub subscales: Vec<Subscale>,
    pub items: Vec<Item>,
}

/// Read a request from `input`, or from stdin when no path is given.
pub fn read_request(input: Option<&Path>) -> eyre::Result<ScreeningRequest> {
    let contents = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read request at {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request: ScreeningRequest = serde_json::from_str(&contents)?;
    Ok(request)
}

pub fn score(
    request: &ScreeningRequest,
    policy: &ReferralPolicy,
) -> Result<ScoreResult, InstrumentError> {
    pfa_instruments::screen(&request.instrument_id, &request.answers, policy)
}

pub fn list_instruments() -> Vec<InstrumentSummary> {
    all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            item_count: i.items().len(),
        })
        .collect()
}

pub fn instrument_detail(id: &str) -> Result<InstrumentDetail, InstrumentError> {
    let instrument =
        get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?;

    Ok(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        description: instrument.description().to_string(),
        answer_domain: instrument.answer_domain(),
        answer_options: instrument
            .answer_domain()
            .options()
            .iter()
            .map(|o| o.to_string())
            .collect(),
        subscales: instrument.subscales().to_vec(),
        items: instrument.items().to_vec(),
    })
}
