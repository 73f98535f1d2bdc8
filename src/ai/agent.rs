use crate::game::GameState;

/// Something that picks the next column to play.
pub trait Agent {
    /// Select an action (column) given the current game state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
