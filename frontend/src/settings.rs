//! Client-side display options, persisted to localStorage as a flat record.
//! Loaded once when the game view mounts and rewritten on every toggle.

use serde::{Deserialize, Serialize};
use web_sys::window;

const STORAGE_KEY: &str = "settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub dark_mode: bool,
    pub fullscreen: bool,
    pub color_blind: bool,
    pub spymaster_may_guess: bool,
}

/// Every option is named here; there is no generic string-keyed toggle, so a
/// typo in a setting name cannot slip through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    DarkMode,
    Fullscreen,
    ColorBlind,
    SpymasterMayGuess,
}

impl Setting {
    pub const ALL: [Setting; 4] = [
        Setting::DarkMode,
        Setting::Fullscreen,
        Setting::ColorBlind,
        Setting::SpymasterMayGuess,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Setting::DarkMode => "Dark mode",
            Setting::Fullscreen => "Full screen",
            Setting::ColorBlind => "Color blind mode",
            Setting::SpymasterMayGuess => "Spymaster may guess",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Setting::DarkMode => "Darker colors, easier on the eyes at night.",
            Setting::Fullscreen => "Hide everything except the board itself.",
            Setting::ColorBlind => "Use patterns in addition to team colors.",
            Setting::SpymasterMayGuess => "Allow the spymaster to reveal cells too.",
        }
    }
}

impl GameSettings {
    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::DarkMode => self.dark_mode,
            Setting::Fullscreen => self.fullscreen,
            Setting::ColorBlind => self.color_blind,
            Setting::SpymasterMayGuess => self.spymaster_may_guess,
        }
    }

    pub fn toggled(&self, setting: Setting) -> GameSettings {
        let mut next = *self;
        match setting {
            Setting::DarkMode => next.dark_mode = !next.dark_mode,
            Setting::Fullscreen => next.fullscreen = !next.fullscreen,
            Setting::ColorBlind => next.color_blind = !next.color_blind,
            Setting::SpymasterMayGuess => next.spymaster_may_guess = !next.spymaster_may_guess,
        }
        next
    }

    pub fn load() -> GameSettings {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(raw) = serde_json::to_string(self) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
}
