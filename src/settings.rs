use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{codec::WifiDecodeOptions, log_warn, models::{QrCodeStyle, SecurityKind}};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Style applied to saves that don't bring their own.
    pub default_style: QrCodeStyle,
    /// Security assumed for Wi-Fi payloads without a `T:` segment.
    pub wifi_default_security: SecurityKind,
    /// Maximum history length; 0 keeps everything.
    pub history_limit: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_style: QrCodeStyle::default(),
            wifi_default_security: SecurityKind::Wpa,
            history_limit: 0,
        }
    }
}

impl UserSettings {
    pub fn wifi_decode_options(&self) -> WifiDecodeOptions {
        WifiDecodeOptions {
            default_security: self.wifi_default_security,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    /// Loads settings from `path`. A missing or unreadable file yields defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("Ignoring malformed settings file {}: {err}", path.display());
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn get(&self) -> UserSettings {
        self.read().clone()
    }

    pub fn default_style(&self) -> QrCodeStyle {
        self.read().default_style.clone()
    }

    pub fn wifi_decode_options(&self) -> WifiDecodeOptions {
        self.read().wifi_decode_options()
    }

    pub fn history_limit(&self) -> usize {
        self.read().history_limit
    }

    /// Applies `change` and writes the result to disk.
    pub fn update<F>(&self, change: F) -> Result<UserSettings>
    where
        F: FnOnce(&mut UserSettings),
    {
        let mut guard = self.write();
        let mut updated = guard.clone();
        change(&mut updated);
        self.persist(&updated)?;
        *guard = updated.clone();
        Ok(updated)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
