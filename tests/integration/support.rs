use std::path::PathBuf;
use tinyfetch::core::system_info::types::*;
use tinyfetch::{FetchError, ResourceProvider, Result};

/// Provider answering every query from fixed values
pub struct StaticProvider {
    pub identity: Option<HostIdentity>,
    pub ram: Option<ResourceSample>,
    pub swap: Option<ResourceSample>,
    pub cpu: Option<CpuInfo>,
    pub shell: Option<ShellInfo>,
    pub uptime: Option<Uptime>,
}

impl StaticProvider {
    pub fn ubuntu() -> Self {
        Self {
            identity: Some(HostIdentity {
                hostname: "box".to_string(),
                os_family: "Linux".to_string(),
                kernel_release: "6.8.0-45-generic".to_string(),
                machine: "x86_64".to_string(),
                distro: Some(Distro {
                    name: "Ubuntu".to_string(),
                    version: "22.04".to_string(),
                }),
            }),
            ram: Some(ResourceSample::from_kib(ResourceKind::Ram, 16_384_000, 8_192_000)),
            swap: Some(ResourceSample::from_kib(ResourceKind::Swap, 2_097_152, 1_048_576)),
            cpu: Some(CpuInfo {
                model: Some("Intel(R) Core(TM) i7-8700 CPU @ 3.20GHz".to_string()),
                cores: 12,
                architecture: "x86_64".to_string(),
            }),
            shell: Some(ShellInfo {
                name: "zsh".to_string(),
            }),
            uptime: Some(Uptime(3725)),
        }
    }

    pub fn empty() -> Self {
        Self {
            identity: None,
            ram: None,
            swap: None,
            cpu: None,
            shell: None,
            uptime: None,
        }
    }
}

fn answer<T: Clone>(value: &Option<T>, what: &str) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| FetchError::unavailable(format!("{} not set", what)))
}

impl ResourceProvider for StaticProvider {
    fn hostname(&self) -> Result<String> {
        answer(&self.identity, "identity").map(|i| i.hostname)
    }

    fn ram(&self) -> Result<ResourceSample> {
        answer(&self.ram, "ram")
    }

    fn swap(&self) -> Result<ResourceSample> {
        answer(&self.swap, "swap")
    }

    fn cpu(&self) -> Result<CpuInfo> {
        answer(&self.cpu, "cpu")
    }

    fn shell(&self) -> Result<ShellInfo> {
        answer(&self.shell, "shell")
    }

    fn uptime(&self) -> Result<Uptime> {
        answer(&self.uptime, "uptime")
    }

    fn os_release_path(&self) -> PathBuf {
        PathBuf::from("/nonexistent/os-release")
    }

    fn identity(&self) -> Result<HostIdentity> {
        answer(&self.identity, "identity")
    }
}

/// Render with `f` into a string, one entry per line
pub fn render<F>(f: F) -> Vec<String>
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
