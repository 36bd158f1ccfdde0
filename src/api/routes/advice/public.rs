//! Public types for the advice API
use serde::{Deserialize, Serialize};

use crate::ai::AdviceSource;

#[derive(Serialize, Deserialize)]
pub struct AdviceRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct AdviceResponse {
    pub reply: String,
    pub source: AdviceSource,
}
