use serde::{Deserialize, Serialize};

/// Label used when the OS-release descriptor supplies neither name nor version
pub const FALLBACK_DISTRO_NAME: &str = "UNIX-Like OS";

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Everything queried during one invocation. `None` means the source was unavailable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: Option<String>,
    pub identity: Option<HostIdentity>,
    pub shell: Option<ShellInfo>,
    pub uptime: Option<Uptime>,
    pub desktop: Option<String>,
    pub cpu: Option<CpuInfo>,
    pub ram: Option<ResourceSample>,
    pub swap: Option<ResourceSample>,
}

/// Host identity, built once per run from `uname(2)` and the OS-release descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    pub hostname: String,
    /// Kernel family as reported by `uname -s` ("Linux", "FreeBSD")
    pub os_family: String,
    pub kernel_release: String,
    pub machine: String,
    /// Absent on systems without release metadata
    pub distro: Option<Distro>,
}

impl HostIdentity {
    /// Distribution to display, substituting the generic label when absent
    pub fn distro_or_fallback(&self) -> Distro {
        self.distro.clone().unwrap_or_else(Distro::fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distro {
    pub name: String,
    pub version: String,
}

impl Distro {
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_DISTRO_NAME.to_string(),
            version: String::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.name == FALLBACK_DISTRO_NAME && self.version.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Ram,
    Swap,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Ram => write!(f, "RAM"),
            ResourceKind::Swap => write!(f, "Swap"),
        }
    }
}

/// Total and free byte counts for RAM or swap.
///
/// Only complete samples exist: a query that cannot supply both values
/// fails instead of returning a partial sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSample {
    pub kind: ResourceKind,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl ResourceSample {
    pub fn new(kind: ResourceKind, total_bytes: u64, free_bytes: u64) -> Self {
        Self {
            kind,
            total_bytes,
            free_bytes,
        }
    }

    /// Build a sample from kibibyte counts as found in `/proc/meminfo`
    pub fn from_kib(kind: ResourceKind, total_kib: u64, free_kib: u64) -> Self {
        Self::new(
            kind,
            total_kib.saturating_mul(1024),
            free_kib.saturating_mul(1024),
        )
    }

    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_GIB
    }

    pub fn used_gib(&self) -> f64 {
        self.used_bytes() as f64 / BYTES_PER_GIB
    }

    pub fn free_gib(&self) -> f64 {
        self.free_bytes as f64 / BYTES_PER_GIB
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellInfo {
    pub name: String,
}

/// Seconds elapsed since boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uptime(pub u64);

impl Uptime {
    pub fn seconds(&self) -> u64 {
        self.0
    }

    /// Split into (hours, minutes, seconds). Hours are not folded into days.
    pub fn hms(&self) -> (u64, u64, u64) {
        (self.0 / 3600, (self.0 % 3600) / 60, self.0 % 60)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub model: Option<String>,
    /// Logical cores, always at least one
    pub cores: usize,
    pub architecture: String,
}
