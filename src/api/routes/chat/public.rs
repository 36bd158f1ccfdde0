//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::ai::AdviceSource;
use crate::chat::Message;

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatSessionResponse {
    pub session_id: String,
    pub in_flight: bool,
    pub transcript: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub reply: String,
    pub source: AdviceSource,
    pub transcript: Vec<Message>,
}
