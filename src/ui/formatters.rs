use crate::core::system_info::types::{CpuInfo, Distro, ResourceSample, Uptime};
use unicode_width::UnicodeWidthStr;

/// Round half away from zero to two decimals.
///
/// `format!("{:.2}")` alone rounds ties to even, which prints 15.625 as
/// "15.62"; the report wants "15.63".
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a GiB quantity with two decimals
pub fn format_gib(value: f64) -> String {
    format!("{:.2}", round_hundredths(value))
}

/// "U.UU GiB used / T.TT GiB total (F.FF GiB free)"
pub fn format_resource(sample: &ResourceSample) -> String {
    format!(
        "{} GiB used / {} GiB total ({} GiB free)",
        format_gib(sample.used_gib()),
        format_gib(sample.total_gib()),
        format_gib(sample.free_gib())
    )
}

/// "H hours, M minutes, S seconds"
pub fn format_uptime(uptime: Uptime) -> String {
    let (hours, minutes, seconds) = uptime.hms();
    format!("{} hours, {} minutes, {} seconds", hours, minutes, seconds)
}

/// Prefix "GNU/" when the kernel family is exactly "Linux"
pub fn format_os_name(os_family: &str) -> String {
    if os_family == "Linux" {
        format!("GNU/{}", os_family)
    } else {
        os_family.to_string()
    }
}

/// "<name> <version> <machine>", skipping empty parts
pub fn format_distro(distro: &Distro, machine: &str) -> String {
    [distro.name.as_str(), distro.version.as_str(), machine]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// "<model> (<cores>)" or "Unknown <arch> CPU (<cores>)"
pub fn format_cpu(cpu: &CpuInfo) -> String {
    match cpu.model.as_deref() {
        Some(model) => format!("{} ({})", model, cpu.cores),
        None => format!("Unknown {} CPU ({})", cpu.architecture, cpu.cores),
    }
}

/// "user@host" and a dashed underline of the same display width
pub fn format_user_header(user: &str, host: &str) -> (String, String) {
    let header = format!("{}@{}", user, host);
    let underline = "-".repeat(UnicodeWidthStr::width(header.as_str()));
    (header, underline)
}
