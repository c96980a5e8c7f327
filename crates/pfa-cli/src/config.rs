use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pfa_core::models::screening::Srq29Trigger;
use pfa_instruments::referral::ReferralPolicy;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV: &str = "PFA_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// SRQ-29 headline referral rule. Added before versioning.
    #[serde(default)]
    pub srq29_trigger: Srq29Trigger,
    /// Added in v1.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            srq29_trigger: Srq29Trigger::default(),
            log_format: LogFormat::default(),
        }
    }
}

/// A config plus what happened while loading it. Loading runs before the
/// tracing subscriber exists, so the caller logs this afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: ScreenConfig,
    /// `false` when no file existed and defaults were used.
    pub from_file: bool,
    /// On-disk version, when it was older than [`CURRENT_VERSION`].
    pub migrated_from: Option<u32>,
}

impl LoadedConfig {
    pub fn log(&self, path: &Path) {
        if !self.from_file {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }
        if let Some(from) = self.migrated_from {
            tracing::info!(
                path = %path.display(),
                from,
                to = CURRENT_VERSION,
                "migrated config"
            );
        }
    }
}

impl ScreenConfig {
    pub fn referral_policy(&self) -> ReferralPolicy {
        ReferralPolicy::new(self.srq29_trigger)
    }
}

/// Resolve the config path: explicit flag, then `$PFA_CONFIG`, then the
/// platform config directory.
pub fn config_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("pfa-screen").join("config.json"))
}

/// Load the config at `path`, or defaults if no file exists there.
pub fn load_config(path: &Path) -> eyre::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: ScreenConfig::default(),
            from_file: false,
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<LoadedConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .ok_or_else(|| eyre::eyre!("config_version must be a non-negative integer"))
            .and_then(|v| {
                u32::try_from(v).map_err(|_| {
                    eyre::eyre!(
                        "config_version {v} is newer than this build supports ({CURRENT_VERSION}). \
                         Please update pfa-screen."
                    )
                })
            })?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: ScreenConfig = serde_json::from_value(migrated)?;
    Ok(LoadedConfig {
        config,
        from_file: true,
        migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
    })
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update pfa-screen."
        ));
    }

    // v0 → v1: add log_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("log_format")
            .or_insert(serde_json::Value::String("pretty".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScreenConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
