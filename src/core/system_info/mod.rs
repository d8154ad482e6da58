pub mod collector;
pub mod extractor;
pub mod os;
pub mod shell;
pub mod types;

pub use collector::{collect_sections, collect_system_info, Section};
pub use types::*;
