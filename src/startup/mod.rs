//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - data directory, log filter and tick rate
//! - [`logging`] - file-backed `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use chatdeck::startup::{init_logging, StartupConfig};
//!
//! let config = StartupConfig::from_env();
//! if let Some(dir) = config.resolve_data_dir() {
//!     init_logging(&dir, &config.log_filter)?;
//! }
//! ```

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::init_logging;
