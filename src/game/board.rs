use std::fmt;

use super::player::Player;

/// Side length of the grid.
pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// Grid coordinate, row 0 is the top and column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Checked constructor, `None` if either index is outside 0..3
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Position { row, col })
    }

    /// Position of the n-th cell in row-major order (0..9)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Position::new(index / SIZE, index % SIZE))
    }

    /// Row-major index (0..9)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All nine positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE * SIZE).map(|i| Position::new(i / SIZE, i % SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight three-in-a-row lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Axis {
    /// The lines passing through `pos`, in the order they are checked:
    /// row, column, then whichever diagonals apply.
    pub fn through(pos: Position) -> impl Iterator<Item = Axis> {
        let main = (pos.row == pos.col).then_some(Axis::MainDiagonal);
        let anti = (pos.row + pos.col == SIZE - 1).then_some(Axis::AntiDiagonal);
        [Some(Axis::Row(pos.row)), Some(Axis::Column(pos.col)), main, anti]
            .into_iter()
            .flatten()
    }

    /// Cells of the line, from its start to its end
    pub fn cells(self) -> [Position; SIZE] {
        match self {
            Axis::Row(r) => [Position::new(r, 0), Position::new(r, 1), Position::new(r, 2)],
            Axis::Column(c) => [Position::new(0, c), Position::new(1, c), Position::new(2, c)],
            Axis::MainDiagonal => [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
            Axis::AntiDiagonal => [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
        }
    }

    pub fn win_line(self) -> WinLine {
        let cells = self.cells();
        WinLine {
            start: cells[0],
            end: cells[SIZE - 1],
            axis: self,
        }
    }
}

/// Geometry of a completed line, used to draw the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    pub start: Position,
    pub end: Position,
    pub axis: Axis,
}

impl WinLine {
    /// The three cells from `start` to `end`
    pub fn cells(&self) -> [Position; SIZE] {
        self.axis.cells()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check whether `cell` fills every square of `axis`, treating `assume`
    /// as already holding `cell`.
    pub(super) fn line_filled(&self, axis: Axis, cell: Cell, assume: Option<Position>) -> bool {
        axis.cells()
            .iter()
            .all(|&p| Some(p) == assume || self.get(p) == cell)
    }

    /// First line through `pos` completed by `cell` (row before column
    /// before diagonals). With `hypothetical` set, `pos` counts as holding
    /// `cell` whatever it holds now.
    pub(super) fn completed_line(
        &self,
        pos: Position,
        cell: Cell,
        hypothetical: bool,
    ) -> Option<Axis> {
        if cell == Cell::Empty {
            return None;
        }
        let assume = hypothetical.then_some(pos);
        Axis::through(pos).find(|&axis| self.line_filled(axis, cell, assume))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: String = row
                .iter()
                .map(|cell| cell.player().map_or('.', Player::symbol))
                .collect();
            if r + 1 < SIZE {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
