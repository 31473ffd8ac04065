pub mod auth;
pub mod extract;

pub use auth::{GateDecision, authorize, require_bearer};
pub use extract::{LabJson, LabPath, LabQuery};
