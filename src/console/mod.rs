//! Console boundary: line-based input and the blocking game loop.

mod input;
mod orchestrator;

pub use input::{ConsoleInput, MoveSource};
pub use orchestrator::GameLoop;
