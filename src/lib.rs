//! chatdeck - a terminal client for a hosted conversation workflow
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod credentials;
pub mod input;
pub mod session;
pub mod settings;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
