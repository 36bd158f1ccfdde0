//! A single visitor's chat. At most one turn can be waiting on the
//! advisor at a time, which keeps the transcript in submission order.
use thiserror::Error;

use crate::ai::FitnessAdvisor;
use crate::chat::models::{Message, Role, Transcript};

pub const GREETING: &str =
    "Welcome to Surefit! I'm your AI trainer. Need a workout plan or nutrition tip?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a reply is still pending for this session")]
    InFlight,
}

/// Handle for a turn waiting on a reply. Returned by
/// `ChatSession::begin_turn` and consumed by `complete_turn`.
#[derive(Debug)]
pub struct PendingTurn {
    pub message: String,
    seq: u64,
}

#[derive(Clone, Debug)]
pub struct ChatSession {
    id: String,
    input: String,
    transcript: Transcript,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl ChatSession {
    pub fn new(id: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::Assistant, GREETING));
        Self {
            id: id.to_string(),
            input: String::new(),
            transcript,
            in_flight: None,
            next_seq: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Take the input buffer as the user's next message. Rejected turns
    /// leave the session untouched, including the input buffer.
    pub fn begin_turn(&mut self) -> Result<PendingTurn, TurnError> {
        if self.input.trim().is_empty() {
            return Err(TurnError::EmptyMessage);
        }
        if self.in_flight.is_some() {
            return Err(TurnError::InFlight);
        }

        let message = std::mem::take(&mut self.input);
        self.transcript.push(Message::new(Role::User, &message));

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);

        Ok(PendingTurn { message, seq })
    }

    /// Append the reply for `turn`. Returns `false` and changes nothing
    /// if `turn` isn't the one currently outstanding.
    pub fn complete_turn(&mut self, turn: PendingTurn, reply: &str) -> bool {
        if self.in_flight != Some(turn.seq) {
            tracing::warn!(
                "Ignoring reply for stale turn {} in session {}",
                turn.seq,
                self.id
            );
            return false;
        }
        self.transcript.push(Message::new(Role::Assistant, reply));
        self.in_flight = None;
        true
    }

    /// Run a full turn for `message` against `advisor`. Used where the
    /// session is owned outright, e.g. the terminal chat.
    pub async fn send(
        &mut self,
        advisor: &FitnessAdvisor,
        message: &str,
    ) -> Result<Message, TurnError> {
        self.set_input(message);
        let turn = match self.begin_turn() {
            Ok(turn) => turn,
            Err(e) => {
                self.input.clear();
                return Err(e);
            }
        };
        let advice = advisor.advise(&turn.message).await;
        let reply = Message::new(Role::Assistant, &advice.text);
        self.complete_turn(turn, &reply.text);
        Ok(reply)
    }
}
