use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Height of the taskbar band reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 64;
pub const INITIAL_Z_INDEX: u32 = 1000;
pub const INITIAL_WINDOW_COUNTER: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppType {
    AboutMe,
    Projects,
    SkillsDashboard,
    NetworkMonitor,
    Contact,
    Terminal,
    Games,
    DisplayOptions,
}

impl AppType {
    pub const ALL: [AppType; 8] = [
        Self::AboutMe,
        Self::Projects,
        Self::SkillsDashboard,
        Self::NetworkMonitor,
        Self::Contact,
        Self::Terminal,
        Self::Games,
        Self::DisplayOptions,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AboutMe => "about-me",
            Self::Projects => "projects",
            Self::SkillsDashboard => "skills-dashboard",
            Self::NetworkMonitor => "network-monitor",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::Games => "games",
            Self::DisplayOptions => "display-options",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown application type `{0}`")]
pub struct UnknownAppType(pub String);

impl FromStr for AppType {
    type Err = UnknownAppType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app_type| app_type.as_str() == raw)
            .ok_or_else(|| UnknownAppType(raw.to_string()))
    }
}

/// Window identity: the application type plus a serial from the global window counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId {
    pub app_type: AppType,
    pub serial: u64,
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.app_type, self.serial)
    }
}

impl WindowId {
    /// DOM id of the window frame element.
    pub fn dom_id(self) -> String {
        format!("window-{self}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_type: AppType,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub z_index: u32,
}

/// Authoritative window registry snapshot. `windows` is kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub active_window_id: Option<WindowId>,
    pub next_z_index: u32,
    pub window_counter: u64,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active_window_id: None,
            next_z_index: INITIAL_Z_INDEX,
            window_counter: INITIAL_WINDOW_COUNTER,
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn open_window_for(&self, app_type: AppType) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .find(|w| w.app_type == app_type && w.is_open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWindowRequest {
    pub app_type: AppType,
    pub title: Option<String>,
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
}

impl OpenWindowRequest {
    pub fn new(app_type: AppType) -> Self {
        Self {
            app_type,
            title: None,
            position: None,
            size: None,
        }
    }
}

impl From<AppType> for OpenWindowRequest {
    fn from(app_type: AppType) -> Self {
        Self::new(app_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        window_id: WindowId,
        /// Pointer position relative to the window's top-left corner at drag start.
        offset: PointerPosition,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: DragState,
    /// Canvas size that open and resized windows are fitted into.
    pub viewport: ViewportSize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_type_ids_round_trip_through_from_str() {
        for app_type in AppType::ALL {
            assert_eq!(app_type.as_str().parse::<AppType>(), Ok(app_type));
        }
        assert_eq!(
            "calculator".parse::<AppType>(),
            Err(UnknownAppType("calculator".to_string()))
        );
    }

    #[test]
    fn app_type_serde_uses_kebab_ids() {
        let json = serde_json::to_string(&AppType::SkillsDashboard).expect("serialize");
        assert_eq!(json, "\"skills-dashboard\"");
    }

    #[test]
    fn window_id_displays_as_type_and_serial() {
        let id = WindowId {
            app_type: AppType::AboutMe,
            serial: 1,
        };
        assert_eq!(id.to_string(), "about-me-1");
        assert_eq!(id.dom_id(), "window-about-me-1");
    }
}
