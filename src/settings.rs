//! Game settings and preferences
//!
//! Persisted in LocalStorage. Only preferences live here - match state is
//! never saved.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// AI opponent difficulty
    pub difficulty: Difficulty,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "pong_duel_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            master_volume: 0.5,
            sfx_volume: 0.25,
            muted: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.difficulty, Difficulty::Hard);
        assert_eq!(back.master_volume, 0.5);
        assert!(back.muted);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert!(!settings.muted);
    }
}
