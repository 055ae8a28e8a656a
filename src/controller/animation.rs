use std::time::Duration;

use crate::game::{Position, SIZE};

/// Step counts and timings for the move animations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Ticks to draw a piece
    pub placement_steps: u32,
    /// Ticks to draw the winning line
    pub win_line_steps: u32,
    /// Wall-clock time between ticks
    pub tick_interval_ms: u64,
    /// Pause before the computer starts its move
    pub computer_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            placement_steps: 10,
            win_line_steps: 20,
            tick_interval_ms: 15,
            computer_delay_ms: 500,
        }
    }
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Computer delay rounded up to whole ticks
    pub fn computer_delay_ticks(&self) -> u32 {
        if self.tick_interval_ms == 0 {
            return 0;
        }
        let ticks = self.computer_delay_ms.div_ceil(self.tick_interval_ms);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

/// Presentation-only progress values, kept apart from the board model.
///
/// Every value lies in [0, 1] and only grows while an animation runs; it is
/// set back to 0 when a new run starts on that cell or the game resets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationState {
    cells: [[f32; SIZE]; SIZE],
    win_line: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, pos: Position) -> f32 {
        self.cells[pos.row][pos.col]
    }

    pub fn win_line(&self) -> f32 {
        self.win_line
    }

    pub fn start_cell(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0.0;
    }

    pub fn advance_cell(&mut self, pos: Position, progress: f32) {
        let current = &mut self.cells[pos.row][pos.col];
        *current = current.max(progress.clamp(0.0, 1.0));
    }

    pub fn start_win_line(&mut self) {
        self.win_line = 0.0;
    }

    pub fn advance_win_line(&mut self, progress: f32) {
        self.win_line = self.win_line.max(progress.clamp(0.0, 1.0));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
