use crate::ai::WinBlockAgent;
use crate::config::AppConfig;
use crate::controller::{BoardGeometry, GameController, StatusSink};
use crate::game::{Position, SIZE};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::Backend;
use std::io;
use std::time::Instant;
use tracing::debug;

use super::game_view::TerminalRenderer;
use super::status_sink::TracingStatusSink;

pub struct App<S: StatusSink> {
    controller: GameController<S>,
    cursor: Position,
    should_quit: bool,
}

impl App<TracingStatusSink> {
    pub fn new(config: &AppConfig) -> Self {
        let agent = match config.ai.seed {
            Some(seed) => WinBlockAgent::seeded(seed),
            None => WinBlockAgent::new(),
        };
        let controller = GameController::new(
            config.animation.clone(),
            Box::new(agent),
            TracingStatusSink::new(),
        );
        Self::with_controller(controller)
    }
}

impl<S: StatusSink> App<S> {
    pub fn with_controller(controller: GameController<S>) -> Self {
        App {
            controller,
            cursor: Position::new(1, 1), // Start in middle
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop. Input is polled until the next tick is due,
    /// so ticks keep a fixed interval while keys and clicks stay responsive.
    pub fn run<B: Backend>(&mut self, renderer: &mut TerminalRenderer<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let interval = self.controller.config().tick_interval();
        let mut next_tick = Instant::now() + interval;

        loop {
            renderer.set_cursor(self.cursor);
            self.controller
                .render(renderer)
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                let event = event::read()?;
                self.handle_event(event, &renderer.geometry());
            }

            if Instant::now() >= next_tick {
                self.controller.tick();
                next_tick = Instant::now() + interval;
            }
        }
        Ok(())
    }

    /// Handle one terminal event against the grid drawn in the last frame
    pub fn handle_event(&mut self, event: Event, geometry: &BoardGeometry) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, geometry),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor.col = (self.cursor.col + 1).min(SIZE - 1);
            }
            KeyCode::Up => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            KeyCode::Down => {
                self.cursor.row = (self.cursor.row + 1).min(SIZE - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.handle_tap(self.cursor.row, self.cursor.col);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    if self.controller.handle_tap(pos.row, pos.col) {
                        self.cursor = pos;
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, geometry: &BoardGeometry) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (f32::from(mouse.column), f32::from(mouse.row));
        debug!(x, y, "click");
        if self.controller.handle_pointer(x, y, geometry) {
            if let Some(pos) = geometry.cell_at(x, y) {
                self.cursor = pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{AnimationConfig, Phase};
    use crossterm::event::KeyModifiers;

    fn app() -> App<TracingStatusSink> {
        let mut config = AppConfig::default();
        config.ai.seed = Some(3);
        App::new(&config)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(0.0, 0.0, 8.0, 4.0)
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut app = app();
        for _ in 0..5 {
            app.handle_event(key(KeyCode::Left), &geometry());
            app.handle_event(key(KeyCode::Up), &geometry());
        }
        assert_eq!(app.cursor(), Position::new(0, 0));
        for _ in 0..5 {
            app.handle_event(key(KeyCode::Right), &geometry());
        }
        app.handle_event(key(KeyCode::Down), &geometry());
        assert_eq!(app.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_enter_taps_cursor_cell() {
        let mut app = app();
        app.handle_event(key(KeyCode::Enter), &geometry());
        assert!(matches!(
            app.controller().phase(),
            Phase::AnimatingPlacement { pos, .. } if pos == Position::new(1, 1)
        ));
    }

    #[test]
    fn test_digit_taps_numbered_cell() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('3')), &geometry());
        assert_eq!(app.cursor(), Position::new(0, 2));
        assert!(app.controller().is_animating());
    }

    #[test]
    fn test_click_maps_to_cell() {
        let mut app = app();
        app.handle_event(click(1, 9), &geometry());
        assert_eq!(app.cursor(), Position::new(2, 0));
        assert!(app.controller().is_animating());

        // Clicks while animating are dropped
        let phase = app.controller().phase();
        app.handle_event(click(17, 1), &geometry());
        assert_eq!(app.controller().phase(), phase);
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut app = app();
        app.handle_event(click(40, 1), &geometry());
        assert_eq!(app.controller().phase(), Phase::WaitingForPlayerInput);
        assert_eq!(app.cursor(), Position::new(1, 1));
    }

    #[test]
    fn test_reset_and_quit_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('5')), &geometry());
        app.handle_event(key(KeyCode::Char('r')), &geometry());
        assert_eq!(app.controller().phase(), Phase::WaitingForPlayerInput);
        assert_eq!(app.controller().model().move_count(), 0);
        assert!(!app.should_quit());

        app.handle_event(key(KeyCode::Char('q')), &geometry());
        assert!(app.should_quit());
    }

    #[test]
    fn test_new_uses_configured_animation() {
        let mut config = AppConfig::default();
        config.animation = AnimationConfig {
            placement_steps: 2,
            ..AnimationConfig::default()
        };
        let app = App::new(&config);
        assert_eq!(app.controller().config().placement_steps, 2);
        assert_eq!(app.controller().sink().last_status(), "Your turn (X)");
    }
}
