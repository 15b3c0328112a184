use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Runtime configuration. Every retry/poll bound from the submission flow
/// lives here so deployments can tune them without a rebuild.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub log_level: String,
    pub create_max_retries: u32,
    pub create_retry_delay_ms: u64,
    pub poll_max_attempts: u32,
    pub poll_delay_ms: u64,
    pub phone_min_digits: usize,
    pub phone_max_digits: usize,
    pub toast_duration_ms: u64,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Constructs (or copies) the configuration file and loads it.
///
/// The repo ships a default `settings.toml` next to `Cargo.toml`; on first run
/// it is copied to `~/.orderdesk/settings.toml` and that copy is the one read
/// from then on.
pub fn init_settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let home_dir = dirs::home_dir().expect("Could not determine home directory");
        let package_name = env!("CARGO_PKG_NAME");
        let hidden_dir = home_dir.join(format!(".{package_name}"));
        let hidden_file = hidden_dir.join("settings.toml");

        let default_file: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR")).join("settings.toml");

        if !hidden_dir.exists() {
            fs::create_dir(&hidden_dir).expect("Could not create the configuration directory");
        }

        if !hidden_file.exists() {
            fs::copy(&default_file, &hidden_file)
                .expect("Could not copy the default settings.toml");
        }

        let cfg = config::Config::builder()
            .add_source(config::File::from(hidden_file))
            .build()
            .expect("Malformed settings.toml");

        cfg.try_deserialize::<Settings>()
            .expect("Error deserializing settings.toml")
    })
}
