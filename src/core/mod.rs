// Core logic: configuration and host information queries

pub mod config;
pub mod system_info;

// Re-export commonly used items
pub use config::Config;
pub use system_info::{collect_sections, collect_system_info, Section, Snapshot};
