use crate::models::settings::DashboardSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file inside the platform config directory, if one can be
    /// resolved for the current user.
    pub fn default_location() -> Option<Self> {
        ProjectDirs::from("com", "KenBoyle", "ProgressDashboard")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, writing defaults when no file exists yet.
    pub fn load_or_create(&self) -> Result<DashboardSettings> {
        if !self.path.exists() {
            let settings = DashboardSettings::default();
            self.save(&settings)?;
            log::info!("Created default settings at {}", self.path.display());
            return Ok(settings);
        }
        self.load()
    }

    /// Read and validate the settings file
    pub fn load(&self) -> Result<DashboardSettings> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: DashboardSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    pub fn save(&self, settings: &DashboardSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Load settings from the default location, falling back to defaults on any
/// problem. The dashboard never refuses to start over a bad settings file.
pub fn load_settings_or_default() -> DashboardSettings {
    let Some(service) = SettingsService::default_location() else {
        log::warn!("No config directory available, using default settings");
        return DashboardSettings::default();
    };

    match service.load_or_create() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", service.path().display());
            settings
        }
        Err(err) => {
            log::warn!("Using default settings: {:#}", err);
            DashboardSettings::default()
        }
    }
}
