use crate::game::{Player, SIZE};

/// Inner size of one board cell in terminal columns and rows.
pub const CELL_WIDTH: usize = 7;
pub const CELL_HEIGHT: usize = 3;

/// Outer size of the drawn grid, borders included.
pub const GRID_WIDTH: u16 = (SIZE * (CELL_WIDTH + 1) + 1) as u16;
pub const GRID_HEIGHT: u16 = (SIZE * (CELL_HEIGHT + 1) + 1) as u16;

pub type Glyph = [[char; CELL_WIDTH]; CELL_HEIGHT];

/// X is drawn as two strokes, top-left to bottom-right first.
const X_STROKES: [(usize, usize, char); 6] = [
    (0, 1, '\\'),
    (1, 3, '\\'),
    (2, 5, '\\'),
    (0, 5, '/'),
    (1, 3, 'X'),
    (2, 1, '/'),
];

/// O sweeps clockwise from the top.
const O_SWEEP: [(usize, usize, char); 12] = [
    (0, 3, '─'),
    (0, 4, '─'),
    (0, 5, '╮'),
    (1, 5, '│'),
    (2, 5, '╯'),
    (2, 4, '─'),
    (2, 3, '─'),
    (2, 2, '─'),
    (2, 1, '╰'),
    (1, 1, '│'),
    (0, 1, '╭'),
    (0, 2, '─'),
];

/// How many of `total` segments are visible at `progress`.
pub fn segments_drawn(progress: f32, total: usize) -> usize {
    let drawn = (progress.clamp(0.0, 1.0) * total as f32).ceil() as usize;
    drawn.min(total)
}

/// Characters for one cell, with the piece drawn up to its progress.
pub fn glyph(piece: Option<(Player, f32)>) -> Glyph {
    let mut out = [[' '; CELL_WIDTH]; CELL_HEIGHT];
    let Some((player, progress)) = piece else {
        return out;
    };
    let segments: &[(usize, usize, char)] = match player {
        Player::X => &X_STROKES,
        Player::O => &O_SWEEP,
    };
    for &(row, col, ch) in &segments[..segments_drawn(progress, segments.len())] {
        out[row][col] = ch;
    }
    out
}

/// Number of winning cells to highlight, start to end.
pub fn lit_cells(progress: f32) -> usize {
    segments_drawn(progress, SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(g: &Glyph) -> usize {
        g.iter().flatten().filter(|&&c| c != ' ').count()
    }

    #[test]
    fn test_empty_and_unstarted_cells_are_blank() {
        assert_eq!(drawn(&glyph(None)), 0);
        assert_eq!(drawn(&glyph(Some((Player::X, 0.0)))), 0);
        assert_eq!(drawn(&glyph(Some((Player::O, 0.0)))), 0);
    }

    #[test]
    fn test_x_draws_first_stroke_then_second() {
        let half = glyph(Some((Player::X, 0.5)));
        assert_eq!(half[0][1], '\\');
        assert_eq!(half[1][3], '\\');
        assert_eq!(half[2][5], '\\');
        assert_eq!(half[0][5], ' ');

        let full = glyph(Some((Player::X, 1.0)));
        assert_eq!(full[1][3], 'X');
        assert_eq!(full[0][5], '/');
        assert_eq!(full[2][1], '/');
    }

    #[test]
    fn test_o_sweep_grows_monotonically() {
        let mut last = 0;
        for step in 0..=10 {
            let count = drawn(&glyph(Some((Player::O, step as f32 / 10.0))));
            assert!(count >= last);
            last = count;
        }
        assert_eq!(last, O_SWEEP.len());
    }

    #[test]
    fn test_lit_cells() {
        assert_eq!(lit_cells(0.0), 0);
        assert_eq!(lit_cells(0.2), 1);
        assert_eq!(lit_cells(0.5), 2);
        assert_eq!(lit_cells(1.0), 3);
        assert_eq!(lit_cells(7.0), 3);
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(GRID_WIDTH, 25);
        assert_eq!(GRID_HEIGHT, 13);
    }
}
