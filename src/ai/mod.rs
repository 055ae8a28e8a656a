mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::WinBlockAgent;
pub use random::{MoveSelector, UniformSelector};
