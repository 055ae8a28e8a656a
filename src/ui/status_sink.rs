use tracing::info;

use crate::controller::StatusSink;

/// Status sink for the terminal front-end. The header is drawn from the
/// scene, so status updates only go to the log.
#[derive(Debug, Default)]
pub struct TracingStatusSink {
    last_status: String,
    games_finished: u32,
}

impl TracingStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_status(&self) -> &str {
        &self.last_status
    }

    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }
}

impl StatusSink for TracingStatusSink {
    fn on_status_update(&mut self, text: &str) {
        info!(status = text, "status");
        self.last_status = text.to_string();
    }

    fn on_game_end(&mut self) {
        self.games_finished += 1;
        info!(games = self.games_finished, result = %self.last_status, "game finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_status_and_games() {
        let mut sink = TracingStatusSink::new();
        sink.on_status_update("Your turn (X)");
        sink.on_status_update("It's a draw!");
        sink.on_game_end();
        assert_eq!(sink.last_status(), "It's a draw!");
        assert_eq!(sink.games_finished(), 1);
    }
}
