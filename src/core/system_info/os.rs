use crate::core::system_info::extractor::{self, FieldPattern};
use crate::core::system_info::types::Distro;
use crate::error::{FetchError, Result};
use log::debug;
use std::fs;
use std::path::Path;

const OS_RELEASE_NAME: FieldPattern<'static> = FieldPattern::quoted("NAME=");
const OS_RELEASE_VERSION: FieldPattern<'static> = FieldPattern::quoted("VERSION_ID=");

/// Raw `uname(2)` fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uname {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub machine: String,
}

pub fn uname() -> Result<Uname> {
    // SAFETY: utsname is plain old data and uname only writes into it.
    let mut raw: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut raw) } != 0 {
        return Err(FetchError::sys_call(format!(
            "uname: {}",
            std::io::Error::last_os_error()
        )));
    }

    Ok(Uname {
        sysname: c_chars_to_string(&raw.sysname),
        nodename: c_chars_to_string(&raw.nodename),
        release: c_chars_to_string(&raw.release),
        machine: c_chars_to_string(&raw.machine),
    })
}

fn c_chars_to_string(chars: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = chars
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Read distribution name and version from an OS-release descriptor.
///
/// Returns `None` only when neither `NAME` nor `VERSION_ID` can be read.
pub fn read_distro(os_release: &Path) -> Option<Distro> {
    let name = extractor::extract_field(os_release, &OS_RELEASE_NAME)
        .map_err(|e| debug!("Distro name unavailable: {}", e))
        .ok()
        .and_then(|v| v.into_text());
    let version = extractor::extract_field(os_release, &OS_RELEASE_VERSION)
        .map_err(|e| debug!("Distro version unavailable: {}", e))
        .ok()
        .and_then(|v| v.into_text());

    if name.is_none() && version.is_none() {
        return None;
    }

    Some(Distro {
        name: name.unwrap_or_default(),
        version: version.unwrap_or_default(),
    })
}

pub fn distro_or_fallback(os_release: &Path) -> Distro {
    read_distro(os_release).unwrap_or_else(Distro::fallback)
}

/// First non-empty line of a hostname file such as `/etc/hostname`
pub fn read_hostname_file(path: &Path) -> Result<String> {
    let contents =
        fs::read_to_string(path).map_err(|e| FetchError::source_unavailable(path, e))?;

    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FetchError::unavailable(format!("{} is empty", path.display())))
}
