// Platform-specific resource queries

use crate::core::system_info::os;
use crate::core::system_info::types::{CpuInfo, HostIdentity, ResourceSample, ShellInfo, Uptime};
use crate::error::Result;
use log::debug;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "freebsd")]
pub mod freebsd;

#[cfg(target_os = "linux")]
pub use linux::ProcProvider as NativeProvider;

#[cfg(target_os = "freebsd")]
pub use freebsd::SysctlProvider as NativeProvider;

#[cfg(not(any(target_os = "linux", target_os = "freebsd")))]
compile_error!("tinyfetch supports Linux and FreeBSD targets only");

/// The logical host queries, answered by exactly one platform strategy.
///
/// Every query reports an unavailable source as `Err`; callers decide
/// whether to skip the line or print a generic label.
pub trait ResourceProvider {
    fn hostname(&self) -> Result<String>;

    fn ram(&self) -> Result<ResourceSample>;

    fn swap(&self) -> Result<ResourceSample>;

    fn cpu(&self) -> Result<CpuInfo>;

    fn shell(&self) -> Result<ShellInfo>;

    fn uptime(&self) -> Result<Uptime>;

    /// Location of the OS-release descriptor
    fn os_release_path(&self) -> PathBuf;

    /// Kernel identity plus hostname and distribution, queried once per run
    fn identity(&self) -> Result<HostIdentity> {
        let uname = os::uname()?;
        let hostname = self.hostname().unwrap_or_else(|e| {
            debug!("Hostname lookup failed, using uname nodename: {}", e);
            uname.nodename.clone()
        });

        Ok(HostIdentity {
            hostname,
            os_family: uname.sysname,
            kernel_release: uname.release,
            machine: uname.machine,
            distro: os::read_distro(&self.os_release_path()),
        })
    }
}

/// Logical processor count with the portable fallbacks applied
pub fn fallback_core_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
