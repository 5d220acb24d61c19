//! A workspace indicator for a window manager status bar.
//!
//! [`GroupBox`] draws one box per workspace, highlights where each workspace
//! is shown, and switches workspace when a box is clicked. It renders through
//! any [`DrawContext`], reads state from any [`WorkspaceRegistry`] and asks its
//! [`StatusBar`] to repaint whenever a [`Hooks`] event fires.

mod bar;
pub use bar::*;

mod colours;
pub use colours::*;

mod config;
pub use config::*;

pub mod draw;
pub use draw::{fit_text, DrawContext, FittedText, TextExtent};

mod error;
pub use error::*;

mod hooks;
pub use hooks::*;

pub mod setup;

mod workspace;
pub use workspace::*;
