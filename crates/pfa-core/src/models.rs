pub mod instrument;
pub mod intake;
pub mod patient;
pub mod referral;
pub mod risk;
pub mod screening;
