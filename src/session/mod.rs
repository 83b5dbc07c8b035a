//! Game session: state container and the state machine that drives it

mod machine;
mod state;

pub use machine::{Flip, Key, KeyOutcome, Rejection, Resolution, RevealPlan, Session};
pub use state::SessionState;
