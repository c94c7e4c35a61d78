//! Click handlers and their dispatch registry.

mod conflict;
mod error_display;
mod handler;
mod relief;
mod revert;
mod tutorial_loop;

#[cfg(test)]
mod tests;

pub use conflict::ConflictHandler;
pub use error_display::ErrorDisplayHandler;
pub use handler::{ClickHandler, HandlerRegistry};
pub use relief::ReliefHandler;
pub use tutorial_loop::{LoopState, TutorialLoopHandler};
