pub mod models;
pub mod session;
pub mod store;

pub use models::{Message, Role, Transcript};
pub use session::{ChatSession, GREETING, PendingTurn, TurnError};
pub use store::SessionStore;
