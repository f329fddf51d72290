//! Portfolio desktop shell runtime: window registry, compositor, theme store and Leptos surfaces.
//!
//! All state transitions are pure reducers ([`reduce_desktop`], [`reduce_theme`]); the Leptos
//! provider publishes whole snapshots and an effect executor runs storage and focus side effects.

pub mod apps;
pub mod compositor;
pub mod components;
pub mod deep_link;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod shortcuts;
pub mod theme;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use persistence::{load_theme, persist_theme, THEME_PREFS_KEY};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use theme::{reduce_theme, ThemeAction, ThemeMode, ThemePreference};
