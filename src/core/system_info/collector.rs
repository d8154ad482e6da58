use crate::core::config::Config;
use crate::core::system_info::types::*;
use crate::error::Result;
use crate::platform::ResourceProvider;
use log::debug;

/// One line of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    User,
    Os,
    Distro,
    Kernel,
    Shell,
    Uptime,
    WindowManager,
    Cpu,
    Ram,
    Swap,
}

impl Section {
    /// Every section, in the order the full report prints them
    pub const FULL_REPORT: [Section; 10] = [
        Section::User,
        Section::Os,
        Section::Distro,
        Section::Kernel,
        Section::Shell,
        Section::Uptime,
        Section::WindowManager,
        Section::Cpu,
        Section::Ram,
        Section::Swap,
    ];

    fn needs_identity(self) -> bool {
        matches!(
            self,
            Section::User | Section::Os | Section::Distro | Section::Kernel
        )
    }
}

/// Collect every section of the report
pub fn collect_system_info<P>(provider: &P, config: &Config) -> Snapshot
where
    P: ResourceProvider + ?Sized,
{
    collect_sections(provider, config, &Section::FULL_REPORT)
}

/// Query the provider once for each requested section.
///
/// Unavailable sources leave their slot empty; nothing here fails.
pub fn collect_sections<P>(provider: &P, config: &Config, sections: &[Section]) -> Snapshot
where
    P: ResourceProvider + ?Sized,
{
    let wants = |section: Section| sections.contains(&section);
    let mut snapshot = Snapshot::default();

    if sections.iter().any(|s| s.needs_identity()) {
        snapshot.identity = available("host identity", provider.identity());
    }
    if wants(Section::User) {
        snapshot.user = config.user.clone();
    }
    if wants(Section::Shell) {
        snapshot.shell = available("shell", provider.shell());
    }
    if wants(Section::Uptime) {
        snapshot.uptime = available("uptime", provider.uptime());
    }
    if wants(Section::WindowManager) {
        snapshot.desktop = config.desktop.clone();
    }
    if wants(Section::Cpu) {
        snapshot.cpu = available("CPU", provider.cpu());
    }
    if wants(Section::Ram) {
        snapshot.ram = available("RAM", provider.ram());
    }
    if wants(Section::Swap) {
        snapshot.swap = available("swap", provider.swap());
    }

    snapshot
}

fn available<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{} unavailable: {}", what, e);
            None
        }
    }
}
