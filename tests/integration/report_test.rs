use super::support::{render, StaticProvider};
use tinyfetch::commands::fetch;
use tinyfetch::core::system_info::{collect_system_info, Section};
use tinyfetch::ui::banner::{DECORATION, GENIE_STRINGS};
use tinyfetch::Config;

fn config() -> Config {
    Config {
        user: Some("alice".to_string()),
        desktop: Some("GNOME".to_string()),
        ..Config::default()
    }
}

#[test]
fn test_full_report_order() {
    let provider = StaticProvider::ubuntu();
    let lines = render(|out| fetch::full(&provider, &config(), out));

    assert_eq!(
        lines,
        vec![
            "alice@box",
            "---------",
            "OS:       GNU/Linux",
            "Distro:   Ubuntu 22.04 x86_64",
            "Kernel:   6.8.0-45-generic",
            "Shell:    zsh",
            "Uptime:   1 hours, 2 minutes, 5 seconds",
            "WM/DE:    GNOME",
            "CPU:      Intel(R) Core(TM) i7-8700 CPU @ 3.20GHz (12)",
            "RAM:      7.81 GiB used / 15.63 GiB total (7.81 GiB free)",
            "Swap:     1.00 GiB used / 2.00 GiB total (1.00 GiB free)",
        ]
    );
}

#[test]
fn test_unavailable_sources_are_skipped() {
    let provider = StaticProvider::empty();
    let config = Config {
        desktop: Some("sway".to_string()),
        ..Config::default()
    };
    let lines = render(|out| fetch::full(&provider, &config, out));

    assert_eq!(
        lines,
        vec![
            "unknown@unknown",
            "---------------",
            "Distro:   UNIX-Like OS",
            "WM/DE:    sway",
        ]
    );
}

#[test]
fn test_missing_os_release_prints_generic_distro() {
    let mut provider = StaticProvider::ubuntu();
    if let Some(identity) = provider.identity.as_mut() {
        identity.distro = None;
    }

    let lines = render(|out| fetch::report(&provider, &config(), out, &[Section::Distro], None));
    assert_eq!(lines, vec!["Distro:   UNIX-Like OS x86_64"]);
}

#[test]
fn test_single_sections() {
    let provider = StaticProvider::ubuntu();
    let single = |section: Section| {
        render(|out| fetch::report(&provider, &config(), out, &[section], None))
    };

    assert_eq!(single(Section::Os), vec!["OS:       GNU/Linux"]);
    assert_eq!(single(Section::Kernel), vec!["Kernel:   6.8.0-45-generic"]);
    assert_eq!(
        single(Section::Uptime),
        vec!["Uptime:   1 hours, 2 minutes, 5 seconds"]
    );
    assert_eq!(single(Section::User), vec!["alice@box", "---------"]);
}

#[test]
fn test_freebsd_os_name_has_no_prefix() {
    let mut provider = StaticProvider::ubuntu();
    if let Some(identity) = provider.identity.as_mut() {
        identity.os_family = "FreeBSD".to_string();
    }

    let lines = render(|out| fetch::report(&provider, &config(), out, &[Section::Os], None));
    assert_eq!(lines, vec!["OS:       FreeBSD"]);
}

#[test]
fn test_unknown_cpu_model() {
    let mut provider = StaticProvider::ubuntu();
    if let Some(cpu) = provider.cpu.as_mut() {
        cpu.model = None;
        cpu.architecture = "aarch64".to_string();
        cpu.cores = 4;
    }

    let lines = render(|out| fetch::report(&provider, &config(), out, &[Section::Cpu], None));
    assert_eq!(lines, vec!["CPU:      Unknown aarch64 CPU (4)"]);
}

#[test]
fn test_message_precedes_report() {
    let provider = StaticProvider::ubuntu();
    let lines = render(|out| fetch::message(&provider, &config(), out, "hello world"));

    assert_eq!(lines[0], format!("{} hello world", DECORATION));
    assert_eq!(lines[1], "alice@box");
    assert_eq!(lines.len(), 12);
}

#[test]
fn test_random_message_follows_header() {
    let provider = StaticProvider::ubuntu();
    let lines = render(|out| fetch::random(&provider, &config(), out));

    assert_eq!(lines[0], "alice@box");
    assert_eq!(lines[1], "---------");
    let genie = lines[2]
        .strip_prefix(&format!("{} ", DECORATION))
        .unwrap();
    assert!(GENIE_STRINGS.contains(&genie));
    assert_eq!(lines[3], "OS:       GNU/Linux");
}

#[test]
fn test_swap_with_core_count() {
    let provider = StaticProvider::ubuntu();
    let lines = render(|out| fetch::swap(&provider, &config(), out));

    assert_eq!(
        lines,
        vec![
            "Swap:     1.00 GiB used / 2.00 GiB total (1.00 GiB free)",
            "(12)",
        ]
    );
}

#[test]
fn test_genie_only() {
    let lines = render(|out| fetch::genie(out));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(DECORATION));
}

#[test]
fn test_json_snapshot() {
    let provider = StaticProvider::ubuntu();
    let mut out = Vec::new();
    fetch::json(&provider, &config(), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["user"], "alice");
    assert_eq!(value["identity"]["distro"]["name"], "Ubuntu");
    assert_eq!(value["uptime"], 3725);
    assert_eq!(value["ram"]["total_bytes"], 16_384_000u64 * 1024);
}

#[test]
fn test_snapshot_from_empty_provider() {
    let snapshot = collect_system_info(&StaticProvider::empty(), &Config::default());
    assert!(snapshot.identity.is_none());
    assert!(snapshot.ram.is_none());
    assert!(snapshot.swap.is_none());
    assert!(snapshot.user.is_none());
}
