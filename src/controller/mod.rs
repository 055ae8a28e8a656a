//! Turn sequencing, animation timing and the collaborator traits the
//! front-end implements.

mod animation;
mod game_controller;
mod input;
mod phase;
mod render;
mod status;

pub use animation::{AnimationConfig, AnimationState};
pub use game_controller::GameController;
pub use input::BoardGeometry;
pub use phase::Phase;
pub use render::{PendingPiece, Renderer, Scene};
pub use status::{StatusMessage, StatusSink};
