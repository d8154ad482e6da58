// Linux strategy: pseudo-files under /proc and /etc

use crate::core::config::Config;
use crate::core::system_info::extractor::{self, FieldPattern};
use crate::core::system_info::os;
use crate::core::system_info::shell::{clean_shell_name, first_cmdline_arg, shell_from_path};
use crate::core::system_info::types::{CpuInfo, ResourceKind, ResourceSample, ShellInfo, Uptime};
use crate::error::{FetchError, Result};
use crate::platform::{fallback_core_count, ResourceProvider};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const MEMINFO: &str = "/proc/meminfo";
const CPUINFO: &str = "/proc/cpuinfo";
const UPTIME: &str = "/proc/uptime";
const OS_RELEASE: &str = "/etc/os-release";
const HOSTNAME: &str = "/etc/hostname";

const MEM_TOTAL: FieldPattern<'static> = FieldPattern::integer("MemTotal:");
const MEM_AVAILABLE: FieldPattern<'static> = FieldPattern::integer("MemAvailable:");
const MEM_FREE: FieldPattern<'static> = FieldPattern::integer("MemFree:");
const SWAP_TOTAL: FieldPattern<'static> = FieldPattern::integer("SwapTotal:");
const SWAP_FREE: FieldPattern<'static> = FieldPattern::integer("SwapFree:");
const CPU_MODEL: FieldPattern<'static> = FieldPattern::text("model name :");
// PowerPC and some ARM kernels only expose a bare "cpu" key
const CPU_MODEL_FALLBACK: FieldPattern<'static> = FieldPattern::text("cpu :");

/// Bound on the bytes read from a process command-line record
const CMDLINE_MAX: u64 = 1024;

/// Resource provider backed by `/proc` and `/etc`
#[derive(Debug, Clone)]
pub struct ProcProvider {
    config: Config,
    parent_pid: u32,
}

impl ProcProvider {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            parent_pid: std::os::unix::process::parent_id(),
        }
    }

    /// Inspect a different process as "the shell" instead of our parent
    pub fn with_parent_pid(mut self, pid: u32) -> Self {
        self.parent_pid = pid;
        self
    }

    fn path(&self, absolute: &str) -> PathBuf {
        self.config.resolve(absolute)
    }

    fn read_kib(&self, path: &Path, pattern: &FieldPattern<'_>) -> Result<u64> {
        let value = extractor::extract_field(path, pattern)?
            .as_int()
            .ok_or_else(|| FetchError::parse(format!("{} is not numeric", pattern.label())))?;

        u64::try_from(value).map_err(|_| {
            FetchError::parse(format!("{} is negative: {}", pattern.label(), value))
        })
    }

    fn cmdline_shell(&self) -> Result<String> {
        let path = self.path(&format!("/proc/{}/cmdline", self.parent_pid));
        let file = File::open(&path).map_err(|e| FetchError::source_unavailable(&path, e))?;

        let mut record = Vec::new();
        file.take(CMDLINE_MAX)
            .read_to_end(&mut record)
            .map_err(|e| FetchError::source_unavailable(&path, e))?;

        let name = clean_shell_name(&first_cmdline_arg(&record));
        if name.is_empty() {
            return Err(FetchError::unavailable(format!(
                "{} has an empty command line",
                path.display()
            )));
        }
        Ok(name)
    }
}

impl ResourceProvider for ProcProvider {
    fn hostname(&self) -> Result<String> {
        os::read_hostname_file(&self.path(HOSTNAME))
    }

    fn ram(&self) -> Result<ResourceSample> {
        let meminfo = self.path(MEMINFO);
        let total = self.read_kib(&meminfo, &MEM_TOTAL)?;
        let free = self.read_kib(&meminfo, &MEM_AVAILABLE).or_else(|e| {
            debug!("MemAvailable unavailable, falling back to MemFree: {}", e);
            self.read_kib(&meminfo, &MEM_FREE)
        })?;

        Ok(ResourceSample::from_kib(ResourceKind::Ram, total, free))
    }

    fn swap(&self) -> Result<ResourceSample> {
        let meminfo = self.path(MEMINFO);
        let total = self.read_kib(&meminfo, &SWAP_TOTAL)?;
        let free = self.read_kib(&meminfo, &SWAP_FREE)?;

        Ok(ResourceSample::from_kib(ResourceKind::Swap, total, free))
    }

    fn cpu(&self) -> Result<CpuInfo> {
        let cpuinfo = self.path(CPUINFO);
        let model = extractor::extract_field(&cpuinfo, &CPU_MODEL)
            .or_else(|_| extractor::extract_field(&cpuinfo, &CPU_MODEL_FALLBACK))
            .map_err(|e| debug!("CPU model unavailable: {}", e))
            .ok()
            .and_then(|value| value.into_text());

        let architecture = os::uname()
            .map(|u| u.machine)
            .unwrap_or_else(|_| std::env::consts::ARCH.to_string());

        Ok(CpuInfo {
            model,
            cores: online_cpus(),
            architecture,
        })
    }

    fn shell(&self) -> Result<ShellInfo> {
        let name = match self.cmdline_shell() {
            Ok(name) => name,
            Err(e) => {
                debug!("Parent command line unavailable, using $SHELL: {}", e);
                self.config
                    .shell
                    .as_deref()
                    .map(shell_from_path)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| FetchError::unavailable("no shell command line and $SHELL unset"))?
            }
        };

        Ok(ShellInfo { name })
    }

    fn uptime(&self) -> Result<Uptime> {
        sysinfo_uptime().or_else(|e| {
            debug!("sysinfo(2) failed, reading {}: {}", UPTIME, e);
            let path = self.path(UPTIME);
            let text = std::fs::read_to_string(&path)
                .map_err(|e| FetchError::source_unavailable(&path, e))?;
            parse_proc_uptime(&text)
                .map(Uptime)
                .ok_or_else(|| FetchError::parse(format!("malformed {}", path.display())))
        })
    }

    fn os_release_path(&self) -> PathBuf {
        self.path(OS_RELEASE)
    }
}

fn sysinfo_uptime() -> Result<Uptime> {
    // SAFETY: sysinfo only writes into the zeroed struct we hand it.
    let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
    if unsafe { libc::sysinfo(&mut info) } != 0 {
        return Err(FetchError::sys_call(format!(
            "sysinfo: {}",
            std::io::Error::last_os_error()
        )));
    }

    u64::try_from(info.uptime)
        .map(Uptime)
        .map_err(|_| FetchError::sys_call("sysinfo reported a negative uptime"))
}

fn online_cpus() -> usize {
    let count = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    if count > 0 {
        count as usize
    } else {
        debug!("sysconf(_SC_NPROCESSORS_ONLN) failed");
        fallback_core_count()
    }
}

/// Whole seconds from the first field of `/proc/uptime` ("12345.67 54321.00")
pub fn parse_proc_uptime(text: &str) -> Option<u64> {
    let seconds: f64 = text.split_whitespace().next()?.parse().ok()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds as u64)
    } else {
        None
    }
}
