//! Durable settings store
//!
//! Settings live in memory behind a `RwLock` and are mirrored to
//! `settings.json` under the data directory. Persistence is fire-and-forget;
//! a write failure is logged and the in-memory state stays authoritative for
//! the session.

use super::types::{Theme, UserSettings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

const SETTINGS_FILE: &str = "settings.json";

/// Store for the durable theme flag
pub struct SettingsStore {
    path: PathBuf,
    settings: Arc<RwLock<UserSettings>>,
}

impl SettingsStore {
    /// Create a settings store rooted at the given data directory,
    /// loading any previously persisted settings.
    pub async fn new(data_dir: PathBuf) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;
        let path = data_dir.join(SETTINGS_FILE);
        let settings = Self::load_from_disk(&path);

        Ok(Self {
            path,
            settings: Arc::new(RwLock::new(settings)),
        })
    }

    /// Default data directory (~/.memomemo/)
    pub fn default_dir() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".memomemo")
    }

    /// Current theme
    pub async fn theme(&self) -> Theme {
        self.settings.read().await.theme
    }

    /// Set the theme, returning the new value
    pub async fn set_theme(&self, theme: Theme) -> Theme {
        let snapshot = {
            let mut settings = self.settings.write().await;
            settings.theme = theme;
            *settings
        };
        self.persist(snapshot);
        theme
    }

    /// Flip the theme, returning the new value
    pub async fn toggle_theme(&self) -> Theme {
        let snapshot = {
            let mut settings = self.settings.write().await;
            settings.theme = settings.theme.toggled();
            *settings
        };
        self.persist(snapshot);
        snapshot.theme
    }

    /// Load persisted settings, falling back to defaults
    fn load_from_disk(path: &Path) -> UserSettings {
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings {}: {}", path.display(), e);
                    UserSettings::default()
                }
            },
            Err(_) => UserSettings::default(),
        }
    }

    /// Persist settings to disk (fire-and-forget)
    fn persist(&self, settings: UserSettings) {
        let path = self.path.clone();
        tokio::spawn(async move {
            match serde_json::to_string_pretty(&settings) {
                Ok(json) => {
                    if let Err(e) = tokio::fs::write(&path, json).await {
                        tracing::warn!("Failed to persist settings: {}", e);
                    }
                }
                Err(e) => tracing::warn!("Failed to serialize settings: {}", e),
            }
        });
    }
}
