// UI and formatting module

pub mod banner;
pub mod formatters;
pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use banner::{decorate, random_genie_string, DECORATION, HELP_BANNER};
pub use formatters::{format_gib, format_os_name, format_resource, format_uptime};
pub use system_formatters::{write_line, write_report};
