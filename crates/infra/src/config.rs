//! Storage configuration.

use std::path::PathBuf;

/// Environment variable naming the list directory.
pub const LISTS_DIR_ENV: &str = "COLLECTIFY_LISTS_DIR";

const APP_DIR: &str = "collectify";
const LISTS_SUBDIR: &str = "lists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub lists_dir: PathBuf,
}

impl StorageConfig {
    /// Resolve the list directory: explicit value, then `COLLECTIFY_LISTS_DIR`,
    /// then the platform data directory, then `./lists`.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let env = std::env::var_os(LISTS_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(explicit, env, dirs::data_dir())
    }

    fn resolve_with(
        explicit: Option<PathBuf>,
        env: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let lists_dir = explicit
            .or(env)
            .or_else(|| data_dir.map(|d| d.join(APP_DIR).join(LISTS_SUBDIR)))
            .unwrap_or_else(|| PathBuf::from(LISTS_SUBDIR));
        Self { lists_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let cfg = StorageConfig::resolve_with(
            Some(PathBuf::from("/tmp/a")),
            Some(PathBuf::from("/tmp/b")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(cfg.lists_dir, PathBuf::from("/tmp/a"));
    }

    #[test]
    fn environment_beats_data_dir() {
        let cfg = StorageConfig::resolve_with(
            None,
            Some(PathBuf::from("/tmp/b")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(cfg.lists_dir, PathBuf::from("/tmp/b"));
    }

    #[test]
    fn falls_back_to_data_dir_then_cwd() {
        let cfg = StorageConfig::resolve_with(None, None, Some(PathBuf::from("/data")));
        assert_eq!(cfg.lists_dir, PathBuf::from("/data/collectify/lists"));

        let cfg = StorageConfig::resolve_with(None, None, None);
        assert_eq!(cfg.lists_dir, PathBuf::from("lists"));
    }
}
