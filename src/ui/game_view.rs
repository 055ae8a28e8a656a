use crate::controller::{BoardGeometry, Renderer, Scene, StatusMessage};
use crate::game::{Player, Position, SIZE};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use super::board_widget::{self, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};

/// Draws controller scenes to a ratatui terminal and remembers where the
/// grid landed so mouse clicks can be mapped back to cells.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    cursor: Position,
    grid: Rect,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer {
            terminal,
            cursor: Position::new(1, 1),
            grid: Rect::default(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Keyboard cursor, drawn while the human can move
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Cell geometry of the last frame, in terminal cells. Clicks past the
    /// drawn grid miss, even when a small terminal cut it short.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(
            f32::from(self.grid.x) + 1.0,
            f32::from(self.grid.y) + 1.0,
            (CELL_WIDTH + 1) as f32,
            (CELL_HEIGHT + 1) as f32,
        )
        .clipped_to(
            f32::from(self.grid.right()),
            f32::from(self.grid.bottom()),
        )
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = B::Error;

    fn render(&mut self, scene: &Scene<'_>) -> Result<(), Self::Error> {
        let cursor = self.cursor;
        let mut grid = self.grid;
        self.terminal.draw(|frame| {
            grid = render(frame, scene, cursor);
        })?;
        self.grid = grid;
        Ok(())
    }
}

/// Render one frame and return the area the grid occupies.
pub fn render(frame: &mut Frame, scene: &Scene<'_>, cursor: Position) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Min(GRID_HEIGHT), // Board
            Constraint::Length(3),        // Controls
        ])
        .split(frame.area());

    render_header(frame, scene.status, chunks[0]);
    let grid = grid_rect(chunks[1]);
    render_board(frame, scene, cursor, grid);
    render_controls(frame, scene.is_game_over(), chunks[2]);
    grid
}

/// The grid centered in `area`, shrunk if the terminal is too small.
pub fn grid_rect(area: Rect) -> Rect {
    let width = GRID_WIDTH.min(area.width);
    let height = GRID_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::LightRed,
        Player::O => Color::LightBlue,
    }
}

fn render_header(frame: &mut Frame, status: StatusMessage, area: Rect) {
    let color = if status.is_final() {
        Color::Yellow
    } else if status == StatusMessage::YourTurn {
        player_color(Player::X)
    } else {
        player_color(Player::O)
    };

    let header = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn grid_border(left: char, mid: char, right: char) -> Line<'static> {
    let segment = "─".repeat(CELL_WIDTH);
    let mut text = String::new();
    text.push(left);
    for col in 0..SIZE {
        text.push_str(&segment);
        text.push(if col + 1 < SIZE { mid } else { right });
    }
    Line::from(text)
}

fn render_board(frame: &mut Frame, scene: &Scene<'_>, cursor: Position, area: Rect) {
    let lit: Vec<Position> = scene
        .win_line
        .map(|line| {
            let cells = line.cells();
            cells[..board_widget::lit_cells(scene.win_line_progress())].to_vec()
        })
        .unwrap_or_default();
    let show_cursor = scene.phase.accepts_input();

    let mut lines = vec![grid_border('┌', '┬', '┐')];
    for row in 0..SIZE {
        let glyphs: Vec<_> = (0..SIZE)
            .map(|col| board_widget::glyph(scene.piece_at(Position::new(row, col))))
            .collect();

        for inner in 0..CELL_HEIGHT {
            let mut spans = vec![Span::raw("│")];
            for (col, glyph) in glyphs.iter().enumerate() {
                let pos = Position::new(row, col);
                let mut style = Style::default();
                if let Some((player, _)) = scene.piece_at(pos) {
                    style = style.fg(player_color(player)).add_modifier(Modifier::BOLD);
                }
                if lit.contains(&pos) {
                    style = style.bg(Color::Green);
                } else if show_cursor && pos == cursor {
                    style = style.bg(Color::DarkGray);
                }

                let mut text: String = glyph[inner].iter().collect();
                if scene.piece_at(pos).is_none() && inner == CELL_HEIGHT / 2 {
                    // Number for the 1-9 keys
                    let label = char::from(b'1' + pos.index() as u8);
                    text = format!("{:^width$}", label, width = CELL_WIDTH);
                    style = style.fg(Color::DarkGray);
                }
                spans.push(Span::styled(text, style));
                spans.push(Span::raw("│"));
            }
            lines.push(Line::from(spans));
        }

        lines.push(if row + 1 < SIZE {
            grid_border('├', '┼', '┤')
        } else {
            grid_border('└', '┴', '┘')
        });
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, game_over: bool, area: Rect) {
    let line = if game_over {
        Line::from(vec![
            Span::styled(
                "R: Replay",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  Q: Quit"),
        ])
    } else {
        Line::from("Click / 1-9 / Arrows+Enter: Place  |  R: Restart  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
