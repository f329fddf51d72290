//! Theme preference store: mode, accent color, wallpaper selection and tint.
//!
//! The store is independent of the window registry. Mutations go through [`reduce_theme`], which
//! returns [`RuntimeEffect::PersistTheme`] for every user-facing change and
//! [`RuntimeEffect::ClearPersistedTheme`] for a reset.

use serde::{Deserialize, Serialize};

use crate::reducer::RuntimeEffect;

pub const DEFAULT_ACCENT: &str = "#007AFF";
pub const LIGHT_WALLPAPER_ID: &str = "light-mountains";
pub const DARK_WALLPAPER_ID: &str = "dark-mountain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Wallpaper selected automatically when switching into this mode.
    pub const fn default_wallpaper_id(self) -> &'static str {
        match self {
            Self::Light => LIGHT_WALLPAPER_ID,
            Self::Dark => DARK_WALLPAPER_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub mode: ThemeMode,
    pub accent_color: String,
    pub wallpaper_id: String,
    pub wallpaper_tint: Option<String>,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent_color: DEFAULT_ACCENT.to_string(),
            wallpaper_id: LIGHT_WALLPAPER_ID.to_string(),
            wallpaper_tint: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    ToggleMode,
    SetMode(ThemeMode),
    SetAccent(String),
    SetWallpaper(String),
    SetWallpaperTint(Option<String>),
    /// Restore defaults.
    Reset,
    /// Replace the preference with a decoded persisted value. Does not persist.
    Hydrate(ThemePreference),
}

/// Named accent swatches offered by Display Options.
pub const ACCENT_PRESETS: [(&str, &str); 7] = [
    ("Blue", "#007AFF"),
    ("Purple", "#AF52DE"),
    ("Pink", "#FF2D55"),
    ("Orange", "#FF9500"),
    ("Green", "#34C759"),
    ("Teal", "#5AC8FA"),
    ("Red", "#FF3B30"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperAffinity {
    Light,
    Dark,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperSource {
    Image(&'static str),
    Gradient {
        angle: u16,
        colors: &'static [&'static str],
    },
    Animated {
        colors: &'static [&'static str],
        speed_secs: u16,
    },
}

impl WallpaperSource {
    pub const fn kind_token(self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Gradient { .. } => "gradient",
            Self::Animated { .. } => "animated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallpaper {
    pub id: &'static str,
    pub name: &'static str,
    pub affinity: WallpaperAffinity,
    pub source: WallpaperSource,
}

pub const WALLPAPERS: [Wallpaper; 7] = [
    Wallpaper {
        id: LIGHT_WALLPAPER_ID,
        name: "Mountain Vista",
        affinity: WallpaperAffinity::Light,
        source: WallpaperSource::Image("/wallpapers/light-mountainVista.png"),
    },
    Wallpaper {
        id: DARK_WALLPAPER_ID,
        name: "Mountain Night",
        affinity: WallpaperAffinity::Dark,
        source: WallpaperSource::Image("/wallpapers/dark-mountainNight.png"),
    },
    Wallpaper {
        id: "gradient-mesh-light",
        name: "Gradient Flow",
        affinity: WallpaperAffinity::Light,
        source: WallpaperSource::Animated {
            colors: &["#667eea", "#764ba2", "#f093fb"],
            speed_secs: 15,
        },
    },
    Wallpaper {
        id: "sunset-light",
        name: "Sunset Vibes",
        affinity: WallpaperAffinity::Light,
        source: WallpaperSource::Animated {
            colors: &["#ffecd2", "#fcb69f", "#ff9a9e"],
            speed_secs: 18,
        },
    },
    Wallpaper {
        id: "gradient-mesh-dark",
        name: "Dark Matter",
        affinity: WallpaperAffinity::Dark,
        source: WallpaperSource::Animated {
            colors: &["#0f2027", "#203a43", "#2c5364"],
            speed_secs: 20,
        },
    },
    Wallpaper {
        id: "midnight-city",
        name: "Midnight City",
        affinity: WallpaperAffinity::Dark,
        source: WallpaperSource::Gradient {
            angle: 160,
            colors: &["#232526", "#414345", "#1e3c72"],
        },
    },
    Wallpaper {
        id: "aurora",
        name: "Aurora",
        affinity: WallpaperAffinity::Both,
        source: WallpaperSource::Gradient {
            angle: 135,
            colors: &["#43cea2", "#185a9d"],
        },
    },
];

pub fn wallpaper(id: &str) -> Option<&'static Wallpaper> {
    WALLPAPERS.iter().find(|wallpaper| wallpaper.id == id)
}

/// Wallpapers suited to `mode`, including mode-neutral ones.
pub fn wallpapers_for_mode(mode: ThemeMode) -> impl Iterator<Item = &'static Wallpaper> {
    WALLPAPERS.iter().filter(move |wallpaper| {
        matches!(
            (wallpaper.affinity, mode),
            (WallpaperAffinity::Both, _)
                | (WallpaperAffinity::Light, ThemeMode::Light)
                | (WallpaperAffinity::Dark, ThemeMode::Dark)
        )
    })
}

/// Accepts `#RRGGBB` only.
pub fn is_valid_accent(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Applies a theme action and reports the effects to run.
///
/// Invalid accents, tints and unknown wallpaper ids are ignored.
pub fn reduce_theme(theme: &mut ThemePreference, action: ThemeAction) -> Vec<RuntimeEffect> {
    match action {
        ThemeAction::ToggleMode => set_mode(theme, theme.mode.toggled()),
        ThemeAction::SetMode(mode) => set_mode(theme, mode),
        ThemeAction::SetAccent(color) => {
            if !is_valid_accent(&color) {
                return Vec::new();
            }
            theme.accent_color = color;
        }
        ThemeAction::SetWallpaper(id) => {
            if wallpaper(&id).is_none() {
                return Vec::new();
            }
            theme.wallpaper_id = id;
        }
        ThemeAction::SetWallpaperTint(tint) => {
            if tint.as_deref().is_some_and(|color| !is_valid_accent(color)) {
                return Vec::new();
            }
            theme.wallpaper_tint = tint;
        }
        ThemeAction::Reset => {
            *theme = ThemePreference::default();
            return vec![RuntimeEffect::ClearPersistedTheme];
        }
        ThemeAction::Hydrate(hydrated) => {
            *theme = hydrated;
            return Vec::new();
        }
    }
    vec![RuntimeEffect::PersistTheme]
}

fn set_mode(theme: &mut ThemePreference, mode: ThemeMode) {
    theme.mode = mode;
    theme.wallpaper_id = mode.default_wallpaper_id().to_string();
}

/// Repairs individual fields that fail validation, keeping the rest.
pub fn sanitize(mut theme: ThemePreference) -> ThemePreference {
    let defaults = ThemePreference::default();
    if !is_valid_accent(&theme.accent_color) {
        theme.accent_color = defaults.accent_color;
    }
    if wallpaper(&theme.wallpaper_id).is_none() {
        theme.wallpaper_id = theme.mode.default_wallpaper_id().to_string();
    }
    if theme
        .wallpaper_tint
        .as_deref()
        .is_some_and(|tint| !is_valid_accent(tint))
    {
        theme.wallpaper_tint = None;
    }
    theme
}

/// Inline style for the shell root: accent CSS variable.
pub fn root_style(theme: &ThemePreference) -> String {
    format!("--accent:{};", theme.accent_color)
}

/// Inline style and variant token for the wallpaper layer.
pub fn backdrop_style(theme: &ThemePreference) -> (&'static str, String) {
    let selected = wallpaper(&theme.wallpaper_id)
        .or_else(|| wallpaper(theme.mode.default_wallpaper_id()))
        .unwrap_or(&WALLPAPERS[0]);
    let style = match selected.source {
        WallpaperSource::Image(url) => format!(
            "background-image:url('{url}');background-size:cover;background-position:center;"
        ),
        WallpaperSource::Gradient { angle, colors } => {
            format!("background:linear-gradient({angle}deg, {});", colors.join(", "))
        }
        WallpaperSource::Animated { colors, speed_secs } => format!(
            "background:linear-gradient(135deg, {});background-size:400% 400%;\
             animation:wallpaper-drift {speed_secs}s ease infinite;",
            colors.join(", ")
        ),
    };
    (selected.source.kind_token(), style)
}
