use crate::game::{Board, Player, Position, WinLine};

use super::animation::AnimationState;
use super::phase::Phase;
use super::status::StatusMessage;

/// A piece whose placement animation is running. It is not on the board
/// until the animation finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPiece {
    pub pos: Position,
    pub player: Player,
    pub progress: f32,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub board: &'a Board,
    pub animation: &'a AnimationState,
    pub pending: Option<PendingPiece>,
    pub win_line: Option<WinLine>,
    pub phase: Phase,
    pub status: StatusMessage,
}

impl Scene<'_> {
    /// Piece to draw at `pos` and how much of it to draw
    pub fn piece_at(&self, pos: Position) -> Option<(Player, f32)> {
        if let Some(pending) = self.pending.filter(|p| p.pos == pos) {
            return Some((pending.player, pending.progress));
        }
        self.board
            .get(pos)
            .player()
            .map(|player| (player, self.animation.cell(pos)))
    }

    pub fn win_line_progress(&self) -> f32 {
        self.animation.win_line()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// Draws scenes. Must be idempotent: the same scene gives the same output.
pub trait Renderer {
    type Error;

    fn render(&mut self, scene: &Scene<'_>) -> Result<(), Self::Error>;
}
