//! pfa-core
//!
//! Pure domain types for the Look, Listen, Link intake workflow: instrument
//! identifiers, screening results, listening-module risk flags, referral
//! vocabulary and the patient record that screening output is merged into.
//! No I/O. This is the shared vocabulary of the PFA system.

pub mod error;
pub mod models;
