// Shell name cleanup shared by both platform strategies

/// Installation prefixes removed from a shell path
pub const INSTALL_PREFIXES: [&str; 2] = ["/bin/", "/usr/local/bin/"];

/// Clean a raw process command-line or `$SHELL` value into a shell name.
///
/// Drops one leading `-` (login shells started by tmux or Konsole), cuts
/// at the first newline and strips a known installation prefix.
pub fn clean_shell_name(raw: &str) -> String {
    let name = raw.strip_prefix('-').unwrap_or(raw);
    let name = name.split('\n').next().unwrap_or_default();
    strip_install_prefix(name).to_string()
}

/// Strip `/bin/` or `/usr/local/bin/` until neither prefix applies.
///
/// Comparison is case-sensitive. Repeating until fixpoint keeps the rule
/// idempotent.
pub fn strip_install_prefix(name: &str) -> &str {
    let mut name = name;
    while let Some(rest) = INSTALL_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
    {
        name = rest;
    }
    name
}

/// Last path segment of a `$SHELL` style value, cut at the first newline
pub fn shell_from_path(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.split('\n').next().unwrap_or_default().to_string()
}

/// argv[0] of a NUL-separated `/proc/<pid>/cmdline` record
pub fn first_cmdline_arg(record: &[u8]) -> String {
    let arg = record.split(|&b| b == 0).next().unwrap_or_default();
    String::from_utf8_lossy(arg).into_owned()
}
