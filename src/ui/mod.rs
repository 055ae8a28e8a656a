//! Terminal front-end: the event loop with the tick clock, a ratatui
//! renderer with animated pieces, and a logging status sink.

mod app;
pub mod board_widget;
mod game_view;
mod status_sink;

pub use app::App;
pub use game_view::{grid_rect, TerminalRenderer};
pub use status_sink::TracingStatusSink;
