// tinyfetch library - public API

// Re-export error types
pub mod error;
pub use error::{FetchError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;
pub use platform::{NativeProvider, ResourceProvider};

// Initialize logging on stderr; RUST_LOG overrides the default level
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}
