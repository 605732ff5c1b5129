//! Logging and observability
//!
//! Structured logging via the `tracing` dispatcher: a console layer is
//! always installed, and an optional JSON file layer with rotation can be
//! enabled through configuration. The dispatcher doubles as the injected
//! observability seam; tests assert on emitted events by installing their
//! own subscriber with `tracing::subscriber::with_default`.
//!
//! # Example
//!
//! ```no_run
//! use logship::config::LoggingConfig;
//! use logship::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
