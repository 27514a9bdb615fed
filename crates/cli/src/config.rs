//! CLI configuration from the environment.
use std::env;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Data directory used when `--data` is not given.
    pub data_dir: PathBuf,

    /// Disables colored cells.
    pub plain: bool,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_DATA_DIR` - Data directory (default: `data`)
    /// - `NO_COLOR` - Any value disables colored output
    pub fn from_env() -> Self {
        let data_dir = read_env::<PathBuf>("TACTICS_DATA_DIR")
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR));
        let plain = env::var_os("NO_COLOR").is_some();
        Self { data_dir, plain }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
