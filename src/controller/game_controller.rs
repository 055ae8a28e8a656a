use tracing::{debug, info, instrument, warn};

use crate::ai::Agent;
use crate::game::{BoardModel, GameStatus, Player, Position};

use super::animation::{AnimationConfig, AnimationState};
use super::input::BoardGeometry;
use super::phase::Phase;
use super::render::{PendingPiece, Renderer, Scene};
use super::status::{StatusMessage, StatusSink};

/// Drives a game between the human (X) and the computer (O).
///
/// Time only moves when [`GameController::tick`] is called; the front-end
/// calls it at `tick_interval_ms`, tests call it directly. A move reaches the
/// board model on the last tick of its placement animation, and a win line
/// animation starts only after that.
pub struct GameController<S: StatusSink> {
    model: BoardModel,
    animation: AnimationState,
    phase: Phase,
    config: AnimationConfig,
    agent: Box<dyn Agent>,
    sink: S,
    last_status: Option<StatusMessage>,
    game_end_reported: bool,
}

impl<S: StatusSink> GameController<S> {
    pub fn new(config: AnimationConfig, agent: Box<dyn Agent>, sink: S) -> Self {
        let mut controller = GameController {
            model: BoardModel::new(),
            animation: AnimationState::new(),
            phase: Phase::WaitingForPlayerInput,
            config,
            agent,
            sink,
            last_status: None,
            game_end_reported: false,
        };
        controller.publish_status();
        controller
    }

    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn status(&self) -> StatusMessage {
        StatusMessage::for_model(&self.model)
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Human tap on (row, col). Returns whether a move was started; taps
    /// while busy, out of range or on a taken cell are dropped.
    #[instrument(level = "debug", skip(self), fields(phase = ?self.phase))]
    pub fn handle_tap(&mut self, row: usize, col: usize) -> bool {
        if !self.phase.accepts_input() {
            debug!("tap ignored while busy");
            return false;
        }
        let Some(pos) = Position::try_new(row, col) else {
            debug!("tap outside the board");
            return false;
        };
        if self.model.current_player() != Some(Player::X) || !self.model.board().is_empty_at(pos) {
            debug!(%pos, "tap on unavailable cell");
            return false;
        }

        self.start_placement(pos, Player::X);
        true
    }

    /// Tap in surface coordinates, mapped through `geometry`
    pub fn handle_pointer(&mut self, x: f32, y: f32, geometry: &BoardGeometry) -> bool {
        match geometry.cell_at(x, y) {
            Some(pos) => self.handle_tap(pos.row, pos.col),
            None => false,
        }
    }

    /// Start a fresh game. Valid in any phase; whatever animation was in
    /// flight is dropped with the old phase.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset(&mut self) {
        info!("new game");
        self.model.reset();
        self.animation.reset();
        self.phase = Phase::WaitingForPlayerInput;
        self.game_end_reported = false;
        self.last_status = None;
        self.publish_status();
    }

    /// Advance one step. Returns false when there was nothing to advance.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::WaitingForPlayerInput | Phase::GameOver => false,
            Phase::AnimatingPlacement { pos, player, frame } => {
                let frame = frame + 1;
                let steps = self.config.placement_steps.max(1);
                self.animation
                    .advance_cell(pos, frame as f32 / steps as f32);
                if frame >= steps {
                    self.commit(pos, player);
                } else {
                    self.phase = Phase::AnimatingPlacement { pos, player, frame };
                }
                true
            }
            Phase::ComputerThinking { remaining_ticks } => {
                let remaining_ticks = remaining_ticks.saturating_sub(1);
                if remaining_ticks == 0 {
                    self.start_computer_move();
                } else {
                    self.phase = Phase::ComputerThinking { remaining_ticks };
                }
                true
            }
            Phase::AnimatingWinLine { frame } => {
                let frame = frame + 1;
                let steps = self.config.win_line_steps.max(1);
                self.animation
                    .advance_win_line(frame as f32 / steps as f32);
                if frame >= steps {
                    self.phase = Phase::GameOver;
                    self.report_game_end();
                } else {
                    self.phase = Phase::AnimatingWinLine { frame };
                }
                true
            }
        }
    }

    pub fn scene(&self) -> Scene<'_> {
        let pending = match self.phase {
            Phase::AnimatingPlacement { pos, player, .. } => Some(PendingPiece {
                pos,
                player,
                progress: self.animation.cell(pos),
            }),
            _ => None,
        };
        Scene {
            board: self.model.board(),
            animation: &self.animation,
            pending,
            win_line: self.model.win_line(),
            phase: self.phase,
            status: self.status(),
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(&self.scene())
    }

    fn start_placement(&mut self, pos: Position, player: Player) {
        debug!(%pos, ?player, "placement animation started");
        self.animation.start_cell(pos);
        self.phase = Phase::AnimatingPlacement {
            pos,
            player,
            frame: 0,
        };
    }

    fn commit(&mut self, pos: Position, player: Player) {
        if let Err(err) = self.model.apply_move(pos.row, pos.col, player) {
            // Input gating makes this unreachable
            debug_assert!(false, "animated move rejected: {err}");
            warn!(%err, %pos, ?player, "animated move rejected");
            self.phase = self.idle_phase();
            return;
        }
        self.publish_status();

        match self.model.status() {
            GameStatus::Won { player, line } => {
                info!(?player, ?line, "game won");
                self.animation.start_win_line();
                self.phase = Phase::AnimatingWinLine { frame: 0 };
            }
            GameStatus::Draw => {
                info!("game drawn");
                self.phase = Phase::GameOver;
                self.report_game_end();
            }
            GameStatus::InProgress {
                current_player: Player::O,
            } => self.begin_computer_turn(),
            GameStatus::InProgress {
                current_player: Player::X,
            } => self.phase = Phase::WaitingForPlayerInput,
        }
    }

    fn begin_computer_turn(&mut self) {
        let ticks = self.config.computer_delay_ticks();
        if ticks == 0 {
            self.start_computer_move();
        } else {
            self.phase = Phase::ComputerThinking {
                remaining_ticks: ticks,
            };
        }
    }

    fn start_computer_move(&mut self) {
        let choice = self.agent.select_move(&self.model);
        match choice.and_then(|pos| Position::try_new(pos.row, pos.col)) {
            Some(pos) if self.model.board().is_empty_at(pos) => {
                info!(agent = self.agent.name(), %pos, "computer move");
                self.start_placement(pos, Player::O);
            }
            _ => {
                // Off-board or taken picks from the agent are dropped
                warn!(agent = self.agent.name(), ?choice, "computer had no legal move");
                self.phase = self.idle_phase();
            }
        }
    }

    fn idle_phase(&self) -> Phase {
        if self.model.is_game_over() {
            Phase::GameOver
        } else {
            Phase::WaitingForPlayerInput
        }
    }

    fn publish_status(&mut self) {
        let status = self.status();
        if self.last_status != Some(status) {
            self.last_status = Some(status);
            self.sink.on_status_update(&status.to_string());
        }
    }

    fn report_game_end(&mut self) {
        if !self.game_end_reported {
            self.game_end_reported = true;
            info!(status = %self.status(), "game over");
            self.sink.on_game_end();
        }
    }
}
