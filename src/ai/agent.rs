use crate::game::{BoardModel, Position};

/// Interface for the computer player.
pub trait Agent {
    /// Pick a cell for the player to move, `None` if no cell is free.
    fn select_move(&mut self, model: &BoardModel) -> Option<Position>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
