//! Move sources that can drive a game without a human at the keyboard.

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;
