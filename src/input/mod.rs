//! Input handling module for keyboard and command processing.
//!
//! All key input is translated to a [`Command`] by the [`CommandRegistry`]
//! and then executed by the app.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for tracking current UI state
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
