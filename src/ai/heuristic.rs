use tracing::debug;

use crate::game::{BoardModel, Player, Position};

use super::agent::Agent;
use super::random::{MoveSelector, UniformSelector};

/// Computer opponent: take a winning cell if one exists, otherwise block
/// the opponent's winning cell, otherwise play a random free cell.
///
/// Both scans run in row-major order, so the first winning (or blocking)
/// cell wins ties.
pub struct WinBlockAgent<S = UniformSelector> {
    selector: S,
}

impl WinBlockAgent<UniformSelector> {
    pub fn new() -> Self {
        WinBlockAgent {
            selector: UniformSelector::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        WinBlockAgent {
            selector: UniformSelector::seeded(seed),
        }
    }
}

impl Default for WinBlockAgent<UniformSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSelector> WinBlockAgent<S> {
    pub fn with_selector(selector: S) -> Self {
        WinBlockAgent { selector }
    }

    fn completing_cell(model: &BoardModel, player: Player) -> Option<Position> {
        model
            .legal_moves()
            .find(|pos| model.would_win(pos.row, pos.col, player))
    }
}

impl<S: MoveSelector> Agent for WinBlockAgent<S> {
    fn select_move(&mut self, model: &BoardModel) -> Option<Position> {
        let me = model.current_player()?;

        if let Some(pos) = Self::completing_cell(model, me) {
            debug!(%pos, "taking the win");
            return Some(pos);
        }
        if let Some(pos) = Self::completing_cell(model, me.other()) {
            debug!(%pos, "blocking");
            return Some(pos);
        }

        let moves: Vec<Position> = model.legal_moves().collect();
        let pos = self.selector.choose(&moves);
        debug!(pos = ?pos, candidates = moves.len(), "random move");
        pos
    }

    fn name(&self) -> &str {
        "Win/Block"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the last candidate so tests can tell a random pick apart
    /// from a row-major scan.
    struct LastSelector;

    impl MoveSelector for LastSelector {
        fn choose(&mut self, moves: &[Position]) -> Option<Position> {
            moves.last().copied()
        }
    }

    fn play(moves: &[(usize, usize)]) -> BoardModel {
        let mut model = BoardModel::new();
        for &(row, col) in moves {
            let player = model.current_player().unwrap();
            model.apply_move(row, col, player).unwrap();
        }
        model
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        // X X _
        // O O _
        // X _ _   O to move: (1, 2) wins, (0, 2) would only block
        let model = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 0)]);
        let mut agent = WinBlockAgent::with_selector(LastSelector);
        assert_eq!(agent.select_move(&model), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        // X X _
        // _ O _
        // _ _ _   O to move, cannot win, must block (0, 2)
        let model = play(&[(0, 0), (1, 1), (0, 1)]);
        let mut agent = WinBlockAgent::with_selector(LastSelector);
        assert_eq!(agent.select_move(&model), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_first_block_in_row_major_order() {
        // X _ X
        // _ O _
        // X _ _   two threats: (0, 1) comes before (1, 0)
        let mut model = BoardModel::new();
        model.apply_move(0, 0, Player::X).unwrap();
        model.apply_move(1, 1, Player::O).unwrap();
        model.apply_move(0, 2, Player::X).unwrap();
        model.apply_move(2, 2, Player::O).unwrap();
        model.apply_move(2, 0, Player::X).unwrap();
        // O now threatens nothing (1,1)+(2,2) needs (0,0) which is taken
        let mut agent = WinBlockAgent::with_selector(LastSelector);
        assert_eq!(agent.select_move(&model), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_falls_back_to_selector() {
        let model = play(&[(0, 0)]);
        let mut agent = WinBlockAgent::with_selector(LastSelector);
        assert_eq!(agent.select_move(&model), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let model = play(&[(0, 0)]);
        let mut agent = WinBlockAgent::seeded(3);
        for _ in 0..50 {
            let pos = agent.select_move(&model).unwrap();
            assert_ne!(pos, Position::new(0, 0));
            assert!(model.board().is_empty_at(pos));
        }
    }

    #[test]
    fn test_no_move_when_game_over() {
        let model = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let mut agent = WinBlockAgent::with_selector(LastSelector);
        assert_eq!(agent.select_move(&model), None);
    }

    #[test]
    fn test_probing_leaves_model_unchanged() {
        let model = play(&[(0, 0), (1, 1), (0, 1)]);
        let before = model.clone();
        let mut agent = WinBlockAgent::seeded(1);
        agent.select_move(&model);
        assert_eq!(model, before);
    }

    #[test]
    fn test_agent_name() {
        let agent = WinBlockAgent::new();
        assert_eq!(agent.name(), "Win/Block");
    }
}
