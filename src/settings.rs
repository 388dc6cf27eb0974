//! Host preferences
//!
//! Persisted in LocalStorage on the web. Gameplay balance lives in
//! [`crate::tuning`], not here.

use serde::{Deserialize, Serialize};

/// Player-facing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `KeyboardEvent.key` value that jumps (and resets after a crash)
    pub jump_key: String,
    /// Key that toggles demo mode
    pub autopilot_key: String,
    /// Start with the autopilot flying
    pub start_in_demo: bool,
    /// Prefix for sprite URLs
    pub asset_root: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jump_key: " ".to_string(),
            autopilot_key: "i".to_string(),
            start_in_demo: false,
            asset_root: "assets/".to_string(),
        }
    }
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    ToggleAutopilot,
}

impl Settings {
    /// Map a `KeyboardEvent.key` value to an action (letters match either case)
    pub fn action_for_key(&self, key: &str) -> Option<KeyAction> {
        if key == self.jump_key {
            Some(KeyAction::Jump)
        } else if key.eq_ignore_ascii_case(&self.autopilot_key) {
            Some(KeyAction::ToggleAutopilot)
        } else {
            None
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_gate_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
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
