mod controller;
mod score;
mod state;

pub use controller::{LoadTicket, SessionController};
pub use score::{Grade, Score, score};
pub use state::{Phase, SessionState, Submission};
