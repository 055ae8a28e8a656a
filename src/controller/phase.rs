use crate::game::{Player, Position};

/// Turn and animation sequencing. Only one animation runs at a time, and
/// taps are accepted only in `WaitingForPlayerInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    WaitingForPlayerInput,
    /// A piece is being drawn; it reaches the board on the last frame
    AnimatingPlacement {
        pos: Position,
        player: Player,
        frame: u32,
    },
    /// Delay between the human's move and the computer's
    ComputerThinking { remaining_ticks: u32 },
    AnimatingWinLine { frame: u32 },
    GameOver,
}

impl Phase {
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::WaitingForPlayerInput)
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self,
            Phase::AnimatingPlacement { .. } | Phase::AnimatingWinLine { .. }
        )
    }

    /// Whether `tick` still has work to do
    pub fn is_busy(&self) -> bool {
        !matches!(self, Phase::WaitingForPlayerInput | Phase::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_waits_for_input() {
        let phase = Phase::default();
        assert!(phase.accepts_input());
        assert!(!phase.is_busy());
    }

    #[test]
    fn animating_phases_reject_input() {
        let placing = Phase::AnimatingPlacement {
            pos: Position::new(0, 0),
            player: Player::X,
            frame: 3,
        };
        let line = Phase::AnimatingWinLine { frame: 0 };
        let thinking = Phase::ComputerThinking { remaining_ticks: 5 };

        for phase in [placing, line, thinking] {
            assert!(!phase.accepts_input());
            assert!(phase.is_busy());
        }
        assert!(placing.is_animating());
        assert!(line.is_animating());
        assert!(!thinking.is_animating());
    }

    #[test]
    fn game_over_is_idle() {
        assert!(!Phase::GameOver.accepts_input());
        assert!(!Phase::GameOver.is_busy());
        assert!(!Phase::GameOver.is_animating());
    }
}
