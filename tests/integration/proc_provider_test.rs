use super::support::render;
use std::fs;
use tempfile::TempDir;
use tinyfetch::commands::fetch;
use tinyfetch::core::system_info::Section;
use tinyfetch::platform::linux::ProcProvider;
use tinyfetch::{Config, ResourceProvider};

const PARENT_PID: u32 = 4242;

fn fixture_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        (
            "proc/meminfo",
            "MemTotal:       16384000 kB\nMemFree:         1024000 kB\nMemAvailable:    8192000 kB\nSwapTotal:       2097152 kB\nSwapFree:        2097152 kB\n",
        ),
        (
            "proc/cpuinfo",
            "processor\t: 0\nmodel name\t: AMD Ryzen 7 5800X 8-Core Processor\n",
        ),
        ("proc/4242/cmdline", "-/usr/local/bin/fish\0--login\0"),
        (
            "etc/os-release",
            "PRETTY_NAME=\"Ubuntu 22.04.4 LTS\"\nNAME=\"Ubuntu\"\nVERSION_ID=\"22.04\"\n",
        ),
        ("etc/hostname", "fixture-host\n"),
    ];
    for (path, contents) in files {
        let target = dir.path().join(path);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(target, contents).unwrap();
    }
    dir
}

fn provider(root: &TempDir) -> (ProcProvider, Config) {
    let config = Config {
        user: Some("alice".to_string()),
        ..Config::default()
    }
    .with_root(root.path());
    let provider = ProcProvider::new(config.clone()).with_parent_pid(PARENT_PID);
    (provider, config)
}

#[test]
fn test_report_from_fixture_root() {
    let root = fixture_root();
    let (provider, config) = provider(&root);

    let lines = render(|out| {
        fetch::report(
            &provider,
            &config,
            out,
            &[Section::User, Section::Shell, Section::Ram, Section::Swap],
            None,
        )
    });

    assert_eq!(
        lines,
        vec![
            "alice@fixture-host",
            "------------------",
            "Shell:    fish",
            "RAM:      7.81 GiB used / 15.63 GiB total (7.81 GiB free)",
            "Swap:     0.00 GiB used / 2.00 GiB total (2.00 GiB free)",
        ]
    );
}

#[test]
fn test_distro_line_from_fixture() {
    let root = fixture_root();
    let (provider, config) = provider(&root);
    let machine = provider.identity().unwrap().machine;

    let lines = render(|out| fetch::report(&provider, &config, out, &[Section::Distro], None));
    assert_eq!(lines, vec![format!("Distro:   Ubuntu 22.04 {}", machine)]);
}

#[test]
fn test_cpu_line_from_fixture() {
    let root = fixture_root();
    let (provider, config) = provider(&root);
    let cores = provider.cpu().unwrap().cores;

    let lines = render(|out| fetch::report(&provider, &config, out, &[Section::Cpu], None));
    assert_eq!(
        lines,
        vec![format!("CPU:      AMD Ryzen 7 5800X 8-Core Processor ({})", cores)]
    );
}

#[test]
fn test_empty_root_degrades() {
    let root = TempDir::new().unwrap();
    let (provider, config) = provider(&root);

    let lines = render(|out| {
        fetch::report(
            &provider,
            &config,
            out,
            &[Section::Distro, Section::Shell, Section::Ram, Section::Swap],
            None,
        )
    });

    let machine = provider.identity().unwrap().machine;
    assert_eq!(lines, vec![format!("Distro:   UNIX-Like OS {}", machine)]);
}
