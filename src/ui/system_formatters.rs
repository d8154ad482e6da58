use crate::core::system_info::types::*;
use crate::core::system_info::Section;
use crate::ui::formatters::{
    format_cpu, format_distro, format_os_name, format_resource, format_uptime,
    format_user_header,
};
use std::io::{self, Write};

const UNKNOWN: &str = "unknown";

/// Label printed in front of a section's value
pub fn label(section: Section) -> &'static str {
    match section {
        Section::User => "",
        Section::Os => "OS:       ",
        Section::Distro => "Distro:   ",
        Section::Kernel => "Kernel:   ",
        Section::Shell => "Shell:    ",
        Section::Uptime => "Uptime:   ",
        Section::WindowManager => "WM/DE:    ",
        Section::Cpu => "CPU:      ",
        Section::Ram => "RAM:      ",
        Section::Swap => "Swap:     ",
    }
}

/// Render the lines of one section. Unavailable sections render nothing.
pub fn render_section(snapshot: &Snapshot, section: Section) -> Vec<String> {
    let identity = snapshot.identity.as_ref();

    let value = match section {
        Section::User => {
            let user = snapshot.user.as_deref().unwrap_or(UNKNOWN);
            let host = identity.map_or(UNKNOWN, |i| i.hostname.as_str());
            let (header, underline) = format_user_header(user, host);
            return vec![header, underline];
        }
        Section::Os => identity.map(|i| format_os_name(&i.os_family)),
        Section::Distro => Some(match identity {
            Some(i) => format_distro(&i.distro_or_fallback(), &i.machine),
            None => format_distro(&Distro::fallback(), ""),
        }),
        Section::Kernel => identity.map(|i| i.kernel_release.clone()),
        Section::Shell => snapshot.shell.as_ref().map(|s| s.name.clone()),
        Section::Uptime => snapshot.uptime.map(format_uptime),
        Section::WindowManager => snapshot.desktop.clone(),
        Section::Cpu => snapshot.cpu.as_ref().map(format_cpu),
        Section::Ram => snapshot.ram.as_ref().map(format_resource),
        Section::Swap => snapshot.swap.as_ref().map(format_resource),
    };

    value
        .map(|value| vec![format!("{}{}", label(section), value)])
        .unwrap_or_default()
}

/// Write one line and flush, so output stays ordered when another
/// process shares the stream.
pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

/// Write the requested sections in order.
///
/// `genie` is an extra decorated line printed right after the user header,
/// or first when the header is not part of the report.
pub fn write_report<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    sections: &[Section],
    genie: Option<&str>,
) -> io::Result<()> {
    let mut genie = genie;
    if !sections.contains(&Section::User) {
        if let Some(line) = genie.take() {
            write_line(out, line)?;
        }
    }

    for &section in sections {
        for line in render_section(snapshot, section) {
            write_line(out, &line)?;
        }
        if section == Section::User {
            if let Some(line) = genie.take() {
                write_line(out, line)?;
            }
        }
    }

    Ok(())
}
