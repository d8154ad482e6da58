// FreeBSD strategy: sysctlbyname(3) and kvm_getswapinfo(3)

use crate::core::config::Config;
use crate::core::system_info::os;
use crate::core::system_info::shell::shell_from_path;
use crate::core::system_info::types::{CpuInfo, ResourceKind, ResourceSample, ShellInfo, Uptime};
use crate::error::{FetchError, Result};
use crate::platform::{fallback_core_count, ResourceProvider};
use log::debug;
use std::ffi::CString;
use std::mem::{self, MaybeUninit};
use std::path::PathBuf;
use std::ptr;

const MAX_SWAP_DEVICES: usize = 32;
const KVM_ERRBUF_LEN: usize = 2048;

/// Resource provider backed by named sysctl queries
#[derive(Debug, Clone)]
pub struct SysctlProvider {
    config: Config,
}

impl SysctlProvider {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ResourceProvider for SysctlProvider {
    fn hostname(&self) -> Result<String> {
        os::uname().map(|u| u.nodename)
    }

    fn ram(&self) -> Result<ResourceSample> {
        let total = sysctl_value::<libc::c_ulong>("hw.physmem")? as u64;
        let free_pages = sysctl_value::<libc::c_uint>("vm.stats.vm.v_free_count")? as u64;

        Ok(ResourceSample::new(
            ResourceKind::Ram,
            total,
            free_pages.saturating_mul(page_size()?),
        ))
    }

    fn swap(&self) -> Result<ResourceSample> {
        let (total_pages, used_pages) = swap_pages()?;
        let page_size = page_size()?;
        let total = total_pages.saturating_mul(page_size);
        let used = used_pages.saturating_mul(page_size);

        Ok(ResourceSample::new(
            ResourceKind::Swap,
            total,
            total.saturating_sub(used),
        ))
    }

    fn cpu(&self) -> Result<CpuInfo> {
        let model = sysctl_string("hw.model")
            .map_err(|e| debug!("hw.model unavailable: {}", e))
            .ok()
            .filter(|model| !model.is_empty());

        let cores = match sysctl_value::<libc::c_int>("hw.ncpu") {
            Ok(n) if n > 0 => n as usize,
            _ => fallback_core_count(),
        };

        let architecture = os::uname()
            .map(|u| u.machine)
            .unwrap_or_else(|_| std::env::consts::ARCH.to_string());

        Ok(CpuInfo {
            model,
            cores,
            architecture,
        })
    }

    fn shell(&self) -> Result<ShellInfo> {
        self.config
            .shell
            .as_deref()
            .map(shell_from_path)
            .filter(|name| !name.is_empty())
            .map(|name| ShellInfo { name })
            .ok_or_else(|| FetchError::unavailable("$SHELL is not set"))
    }

    fn uptime(&self) -> Result<Uptime> {
        let boot = sysctl_value::<libc::timeval>("kern.boottime")?;
        let now = chrono::Utc::now().timestamp();

        u64::try_from(now - boot.tv_sec as i64)
            .map(Uptime)
            .map_err(|_| FetchError::sys_call("kern.boottime is in the future"))
    }

    fn os_release_path(&self) -> PathBuf {
        self.config.resolve("/etc/os-release")
    }
}

fn page_size() -> Result<u64> {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 {
        Ok(size as u64)
    } else {
        Err(FetchError::sys_call("sysconf(_SC_PAGESIZE) failed"))
    }
}

fn ctl_name(name: &str) -> Result<CString> {
    CString::new(name).map_err(|_| FetchError::parse(format!("invalid sysctl name: {}", name)))
}

fn sysctl_error(name: &str) -> FetchError {
    FetchError::sys_call(format!(
        "sysctlbyname({}): {}",
        name,
        std::io::Error::last_os_error()
    ))
}

/// Read a fixed-size sysctl value
fn sysctl_value<T: Copy>(name: &str) -> Result<T> {
    let c_name = ctl_name(name)?;
    let mut value = MaybeUninit::<T>::zeroed();
    let mut size = mem::size_of::<T>();

    let rc = unsafe {
        libc::sysctlbyname(
            c_name.as_ptr(),
            value.as_mut_ptr() as *mut libc::c_void,
            &mut size,
            ptr::null(),
            0,
        )
    };
    if rc != 0 {
        return Err(sysctl_error(name));
    }
    if size != mem::size_of::<T>() {
        return Err(FetchError::sys_call(format!(
            "sysctl {} returned {} bytes, expected {}",
            name,
            size,
            mem::size_of::<T>()
        )));
    }

    // SAFETY: the kernel filled exactly size_of::<T>() bytes.
    Ok(unsafe { value.assume_init() })
}

/// Read a string sysctl value
fn sysctl_string(name: &str) -> Result<String> {
    let c_name = ctl_name(name)?;
    let mut size: libc::size_t = 0;

    let rc = unsafe {
        libc::sysctlbyname(
            c_name.as_ptr(),
            ptr::null_mut(),
            &mut size,
            ptr::null(),
            0,
        )
    };
    if rc != 0 {
        return Err(sysctl_error(name));
    }

    let mut buf = vec![0u8; size];
    let rc = unsafe {
        libc::sysctlbyname(
            c_name.as_ptr(),
            buf.as_mut_ptr() as *mut libc::c_void,
            &mut size,
            ptr::null(),
            0,
        )
    };
    if rc != 0 {
        return Err(sysctl_error(name));
    }

    buf.truncate(size);
    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

/// kvm descriptor closed on drop
struct Kvm(*mut libc::kvm_t);

impl Kvm {
    fn open() -> Result<Self> {
        let mut errbuf = [0 as libc::c_char; KVM_ERRBUF_LEN];
        // "/dev/null" as core file selects the sysctl backend, no /dev/mem access needed
        let kd = unsafe {
            libc::kvm_openfiles(
                ptr::null(),
                b"/dev/null\0".as_ptr() as *const libc::c_char,
                ptr::null(),
                libc::O_RDONLY,
                errbuf.as_mut_ptr(),
            )
        };

        if kd.is_null() {
            let bytes: Vec<u8> = errbuf
                .iter()
                .take_while(|&&c| c != 0)
                .map(|&c| c as u8)
                .collect();
            return Err(FetchError::sys_call(format!(
                "kvm_openfiles: {}",
                String::from_utf8_lossy(&bytes)
            )));
        }
        Ok(Kvm(kd))
    }
}

impl Drop for Kvm {
    fn drop(&mut self) {
        unsafe {
            libc::kvm_close(self.0);
        }
    }
}

/// (total, used) swap pages summed over every swap device
fn swap_pages() -> Result<(u64, u64)> {
    let kvm = Kvm::open()?;
    // SAFETY: kvm_swap is plain old data.
    let mut devices: [libc::kvm_swap; MAX_SWAP_DEVICES] = unsafe { mem::zeroed() };

    let count = unsafe {
        libc::kvm_getswapinfo(
            kvm.0,
            devices.as_mut_ptr(),
            MAX_SWAP_DEVICES as libc::c_int,
            0,
        )
    };
    if count < 0 {
        return Err(FetchError::sys_call("kvm_getswapinfo failed"));
    }

    let count = (count as usize).min(MAX_SWAP_DEVICES);
    Ok(devices[..count].iter().fold((0, 0), |(total, used), dev| {
        (total + dev.ksw_total as u64, used + dev.ksw_used as u64)
    }))
}
