//! Utility modules for gendockerfile

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
