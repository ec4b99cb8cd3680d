use std::sync::LazyLock;

use derive_from_env::FromEnv;

/// Process defaults, overridable through `DUOLOG_*` environment variables.
#[derive(FromEnv)]
#[from_env(prefix = "DUOLOG")]
#[allow(non_snake_case)]
pub struct DuologConfig {
    /// Log file path used by `enable_file_output()`.
    #[from_env(default = "log.txt")]
    pub FILE_PATH: String,
    /// strftime-style template applied to every rendered line.
    #[from_env(default = "%T  %d-%m-%Y")]
    pub TIMESTAMP_FORMAT: String,
}

pub static DUOLOG_CONFIG: LazyLock<DuologConfig> =
    LazyLock::new(|| DuologConfig::from_env().unwrap());
