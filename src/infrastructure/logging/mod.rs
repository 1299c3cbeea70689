//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON terminal output on stderr
//! - Optional daily-rotated JSON log files
//! - Secret scrubbing for operator-facing error text

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LogFormat, LoggerImpl};
pub use secret_scrubbing::SecretScrubber;
