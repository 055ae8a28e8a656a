use tracing::debug;

use super::{Board, Cell, Player, Position, WinLine, SIZE};

/// Where the game stands. Recomputed from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { current_player: Player },
    Won { player: Player, line: WinLine },
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already taken")]
    Occupied(Position),

    #[error("game is over")]
    GameOver,

    #[error("it is {expected:?}'s turn, not {found:?}'s")]
    OutOfTurn { expected: Player, found: Player },
}

const MAX_MOVES: u8 = (SIZE * SIZE) as u8;

/// Authoritative game state: the grid, whose turn it is and the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    board: Board,
    status: GameStatus,
    move_count: u8,
}

impl BoardModel {
    /// Create initial game state, X to move
    pub fn new() -> Self {
        BoardModel {
            board: Board::new(),
            status: GameStatus::InProgress {
                current_player: Player::X,
            },
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress { current_player } => Some(current_player),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    pub fn win_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress { .. })
    }

    /// Cell at (row, col), `None` outside the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::try_new(row, col).map(|pos| self.board.get(pos))
    }

    /// Place `player` at (row, col).
    ///
    /// Only the row, column and diagonals through the new cell are checked
    /// for a win. On error nothing is modified.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let GameStatus::InProgress { current_player } = self.status else {
            return Err(MoveError::GameOver);
        };
        if !self.board.is_empty_at(pos) {
            return Err(MoveError::Occupied(pos));
        }
        if player != current_player {
            return Err(MoveError::OutOfTurn {
                expected: current_player,
                found: player,
            });
        }

        self.board.set(pos, player.to_cell());
        self.move_count += 1;

        self.status = match self.board.completed_line(pos, player.to_cell(), false) {
            Some(axis) => GameStatus::Won {
                player,
                line: axis.win_line(),
            },
            None if self.move_count == MAX_MOVES => GameStatus::Draw,
            None => GameStatus::InProgress {
                current_player: player.other(),
            },
        };
        debug!(%pos, ?player, moves = self.move_count, status = ?self.status, "move applied");
        Ok(())
    }

    /// Empty cells in row-major order; recomputed on every call
    pub fn legal_moves(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| self.board.is_empty_at(pos))
    }

    /// Would placing `player` at (row, col) complete a line? Pure probe,
    /// false for occupied or out-of-range cells.
    pub fn would_win(&self, row: usize, col: usize, player: Player) -> bool {
        match Position::try_new(row, col) {
            Some(pos) if self.board.is_empty_at(pos) => self
                .board
                .completed_line(pos, player.to_cell(), true)
                .is_some(),
            _ => false,
        }
    }

    /// Back to the initial state: empty grid, X to move, no win line
    pub fn reset(&mut self) {
        *self = BoardModel::new();
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
