use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_COLORIZER: &str = "lolcat";

/// Runtime configuration, read once from the process environment.
///
/// Nothing is persisted; the value is built at startup and passed to
/// whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `$USER`
    pub user: Option<String>,
    /// `$SHELL`
    pub shell: Option<String>,
    /// `$XDG_CURRENT_DESKTOP`
    pub desktop: Option<String>,
    /// Filesystem root for pseudo-files and descriptors (`/` outside tests)
    pub root: PathBuf,
    /// External program the `--color` mode pipes output through
    pub colorizer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            shell: None,
            desktop: None,
            root: PathBuf::from("/"),
            colorizer: DEFAULT_COLORIZER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            user: var("USER"),
            shell: var("SHELL"),
            desktop: var("XDG_CURRENT_DESKTOP"),
            ..Self::default()
        }
    }

    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    /// Map an absolute system path such as `/proc/meminfo` under [`Config::root`]
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        self.root.join(path.strip_prefix("/").unwrap_or(path))
    }
}
