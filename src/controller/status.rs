use std::fmt;

use crate::game::{BoardModel, GameStatus, Player};

/// Receives turn/result messages and the end-of-game signal.
pub trait StatusSink {
    fn on_status_update(&mut self, text: &str);

    /// Fired once per finished game, after the win line has been drawn
    fn on_game_end(&mut self);
}

/// Human-readable status derived from the board model. The human always
/// plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    YourTurn,
    ComputerTurn,
    YouWin,
    ComputerWins,
    Draw,
}

impl StatusMessage {
    pub fn for_model(model: &BoardModel) -> Self {
        match model.status() {
            GameStatus::InProgress {
                current_player: Player::X,
            } => StatusMessage::YourTurn,
            GameStatus::InProgress {
                current_player: Player::O,
            } => StatusMessage::ComputerTurn,
            GameStatus::Won {
                player: Player::X, ..
            } => StatusMessage::YouWin,
            GameStatus::Won {
                player: Player::O, ..
            } => StatusMessage::ComputerWins,
            GameStatus::Draw => StatusMessage::Draw,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(
            self,
            StatusMessage::YouWin | StatusMessage::ComputerWins | StatusMessage::Draw
        )
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusMessage::YourTurn => "Your turn (X)",
            StatusMessage::ComputerTurn => "Computer's turn (O)",
            StatusMessage::YouWin => "You win! 🎉",
            StatusMessage::ComputerWins => "Computer wins!",
            StatusMessage::Draw => "It's a draw!",
        };
        f.write_str(text)
    }
}
