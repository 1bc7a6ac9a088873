//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the game view projects an engine
//! snapshot into a styled character framebuffer, and the renderer flushes
//! that framebuffer to a raw-mode terminal. The view is pure and can be
//! unit-tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
