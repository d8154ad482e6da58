// Decoration strings, help text and the random message table

/// Cosmetic prefix for message lines and the help banner
pub const DECORATION: &str = "\u{2729}\u{2729}\u{2729}";

pub const HELP_BANNER: &str = "tinyfetch: tiny system information fetcher

usage: tinyfetch [option]

  (no option)          print the full report
  -v, --version        print the program version
  -h, --help           print this help
  -m, --message <msg>  print <msg>, then the full report
  -r, --random         print a random message, then the full report
      --color          pipe the full report through lolcat
  -o                   print the OS name
  -d                   print the distribution
  -k                   print the kernel release
  -s                   print the shell
  -u                   print the uptime
  -w                   print the window manager
  -c                   print the CPU
      --ram            print RAM usage
      --swap           print swap usage and core count
      --genie          print a random message
      --user           print user@host
      --json           print the report as JSON
";

pub const GENIE_STRINGS: &[&str] = &[
    "Hello there!",
    "Have a nice day!",
    "Your uptime is showing.",
    "Did you remember to update today?",
    "Small binary, big facts.",
    "Fetching facts since boot.",
    "There is no place like 127.0.0.1",
    "sudo make me a sandwich",
    "Keep calm and read the man page.",
    "Powered by pseudo-files.",
    "It works on my machine.",
    "Time for a coffee break?",
];

/// Pick a message from [`GENIE_STRINGS`] using `seed`
pub fn genie_string(seed: u64) -> &'static str {
    GENIE_STRINGS[(seed % GENIE_STRINGS.len() as u64) as usize]
}

/// Pick a message seeded from the wall clock
pub fn random_genie_string() -> &'static str {
    let now = chrono::Local::now();
    let seed = (now.timestamp() as u64) ^ u64::from(now.timestamp_subsec_nanos());
    genie_string(seed)
}

/// "<decoration> <message>"
pub fn decorate(message: &str) -> String {
    format!("{} {}", DECORATION, message)
}
