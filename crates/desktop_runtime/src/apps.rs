//! Application catalog and content registry.
//!
//! Catalog entries are generated at build time from `apps.toml`; content renderers are an
//! exhaustive match over [`AppType`].

mod content;
mod display_options;

use leptos::*;
use system_ui::IconName;

use crate::model::{AppType, WindowPosition, WindowSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppCatalogEntry {
    pub app_type: AppType,
    /// Default window title.
    pub title: &'static str,
    pub launcher_label: &'static str,
    pub description: &'static str,
    pub desktop_label: &'static str,
    pub show_on_desktop: bool,
    /// Digit that opens this app with Ctrl/Meta.
    pub shortcut_digit: Option<u8>,
    pub icon_position: WindowPosition,
    pub window_position: WindowPosition,
    pub window_size: WindowSize,
}

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

pub fn app_catalog() -> &'static [AppCatalogEntry] {
    &APP_CATALOG
}

pub fn app_entry(app_type: AppType) -> &'static AppCatalogEntry {
    &APP_CATALOG[catalog_index(app_type)]
}

pub fn desktop_icon_apps() -> impl Iterator<Item = &'static AppCatalogEntry> {
    app_catalog().iter().filter(|entry| entry.show_on_desktop)
}

pub fn shortcut_app(digit: u8) -> Option<AppType> {
    app_catalog()
        .iter()
        .find(|entry| entry.shortcut_digit == Some(digit))
        .map(|entry| entry.app_type)
}

/// Filters the launcher list by a case-insensitive substring over label, description and id.
///
/// A blank query returns every entry in catalog order.
pub fn search_launcher(query: &str) -> Vec<&'static AppCatalogEntry> {
    let needle = query.trim().to_lowercase();
    app_catalog()
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.launcher_label.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
                || entry.app_type.as_str().contains(&needle)
        })
        .collect()
}

pub fn app_icon(app_type: AppType) -> IconName {
    match app_type {
        AppType::AboutMe => IconName::User,
        AppType::Projects => IconName::FolderOpen,
        AppType::SkillsDashboard => IconName::Activity,
        AppType::NetworkMonitor => IconName::Monitor,
        AppType::Contact => IconName::Mail,
        AppType::Terminal => IconName::Terminal,
        AppType::Games => IconName::Games,
        AppType::DisplayOptions => IconName::Settings,
    }
}

/// Returns the content mounted inside a window of `app_type`.
pub fn render_app_contents(app_type: AppType) -> View {
    match app_type {
        AppType::AboutMe => view! { <content::AboutMeApp /> }.into_view(),
        AppType::Projects => view! { <content::ProjectsApp /> }.into_view(),
        AppType::SkillsDashboard => view! { <content::SkillsApp /> }.into_view(),
        AppType::Contact => view! { <content::ContactApp /> }.into_view(),
        AppType::DisplayOptions => view! { <display_options::DisplayOptionsApp /> }.into_view(),
        AppType::NetworkMonitor | AppType::Terminal | AppType::Games => {
            view! { <content::ComingSoon app_type=app_type /> }.into_view()
        }
    }
}
