//! Theme preference persistence over the host [`PrefsStore`].

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use serde_json::Value;

use crate::theme::{sanitize, ThemeMode, ThemePreference};

/// Storage key for the persisted theme preference.
pub const THEME_PREFS_KEY: &str = "portfolio-os-theme";

/// Decodes a persisted theme payload.
///
/// Missing or non-object payloads yield defaults. Object payloads are read field by field, so one
/// bad field falls back to its default without discarding the others.
pub fn decode_theme(raw: Option<Value>) -> ThemePreference {
    let fields = match raw {
        None => return ThemePreference::default(),
        Some(Value::Object(fields)) => fields,
        Some(_) => {
            logging::warn!("persisted theme is not an object; using defaults");
            return ThemePreference::default();
        }
    };

    let mut theme = ThemePreference::default();
    if let Some(mode) = fields
        .get("mode")
        .and_then(|value| serde_json::from_value::<ThemeMode>(value.clone()).ok())
    {
        theme.mode = mode;
        theme.wallpaper_id = mode.default_wallpaper_id().to_string();
    }
    if let Some(accent) = fields.get("accentColor").and_then(Value::as_str) {
        theme.accent_color = accent.to_string();
    }
    if let Some(wallpaper_id) = fields.get("wallpaperId").and_then(Value::as_str) {
        theme.wallpaper_id = wallpaper_id.to_string();
    }
    theme.wallpaper_tint = fields
        .get("wallpaperTint")
        .and_then(Value::as_str)
        .map(str::to_string);

    sanitize(theme)
}

/// Loads the persisted theme. Storage failures and malformed JSON are logged and read as defaults.
pub async fn load_theme(store: &dyn PrefsStore) -> ThemePreference {
    match load_pref_with::<_, Value>(store, THEME_PREFS_KEY).await {
        Ok(raw) => decode_theme(raw),
        Err(err) => {
            logging::warn!("theme load failed; using defaults: {err}");
            ThemePreference::default()
        }
    }
}

/// Persists the theme preference under [`THEME_PREFS_KEY`].
pub async fn persist_theme(store: &dyn PrefsStore, theme: &ThemePreference) -> Result<(), String> {
    save_pref_with(store, THEME_PREFS_KEY, theme).await
}

/// Removes the persisted theme so the next load yields defaults.
pub async fn clear_theme(store: &dyn PrefsStore) -> Result<(), String> {
    store.delete_pref(THEME_PREFS_KEY).await
}
