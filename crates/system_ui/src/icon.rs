//! Centralized SVG icon catalog for shell chrome and app launchers.
//!
//! Components refer to icons by [`IconName`]; raw SVG markup never leaves this module.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Person / profile glyph.
    User,
    /// Open folder glyph.
    FolderOpen,
    /// Pulse line glyph used for skill meters.
    Activity,
    /// Monitor glyph used for network tooling.
    Monitor,
    /// Envelope glyph.
    Mail,
    /// Terminal prompt glyph.
    Terminal,
    /// Game controller glyph.
    Games,
    /// Gear glyph.
    Settings,
    /// Start/launcher button glyph.
    Launcher,
    /// Magnifier glyph.
    Search,
    /// Picture glyph used for wallpapers.
    Image,
    /// Palette glyph used for appearance actions.
    Palette,
    /// Checkmark glyph.
    Checkmark,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::FolderOpen => "folder-open",
            Self::Activity => "activity",
            Self::Monitor => "monitor",
            Self::Mail => "mail",
            Self::Terminal => "terminal",
            Self::Games => "games",
            Self::Settings => "settings",
            Self::Launcher => "launcher",
            Self::Search => "search",
            Self::Image => "image",
            Self::Palette => "palette",
            Self::Checkmark => "checkmark",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Stroke-based SVG body drawn on a 24x24 grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::User => {
                r#"<circle cx="12" cy="8" r="4"/><path d="M4 20c0-4 3.6-6.5 8-6.5s8 2.5 8 6.5"/>"#
            }
            Self::FolderOpen => {
                r#"<path d="M3 7.5V6a2 2 0 0 1 2-2h4l2 2h6a2 2 0 0 1 2 2v1.5"/><path d="M3 19h15.5l2.5-8.5H5.5Z"/>"#
            }
            Self::Activity => r#"<path d="M3 12h4l3-8 4 16 3-8h4"/>"#,
            Self::Monitor => {
                r#"<rect x="3" y="4" width="18" height="12" rx="2"/><path d="M8 20h8M12 16v4"/>"#
            }
            Self::Mail => {
                r#"<rect x="3" y="5" width="18" height="14" rx="2"/><path d="m3.5 6.5 8.5 6.5 8.5-6.5"/>"#
            }
            Self::Terminal => {
                r#"<rect x="3" y="4" width="18" height="16" rx="2"/><path d="m7 9 3 3-3 3M12.5 15H17"/>"#
            }
            Self::Games => {
                r#"<rect x="2.5" y="7" width="19" height="10" rx="5"/><path d="M7 10v4M5 12h4"/><circle cx="15.5" cy="11" r=".75"/><circle cx="17.5" cy="13" r=".75"/>"#
            }
            Self::Settings => {
                r#"<circle cx="12" cy="12" r="3"/><path d="M12 2.5v3M12 18.5v3M2.5 12h3M18.5 12h3M5.3 5.3l2.1 2.1M16.6 16.6l2.1 2.1M5.3 18.7l2.1-2.1M16.6 7.4l2.1-2.1"/>"#
            }
            Self::Launcher => {
                r#"<rect x="3" y="3" width="7.5" height="7.5" rx="1.5"/><rect x="13.5" y="3" width="7.5" height="7.5" rx="1.5"/><rect x="3" y="13.5" width="7.5" height="7.5" rx="1.5"/><rect x="13.5" y="13.5" width="7.5" height="7.5" rx="1.5"/>"#
            }
            Self::Search => r#"<circle cx="10.5" cy="10.5" r="6.5"/><path d="m15.5 15.5 5 5"/>"#,
            Self::Image => {
                r#"<rect x="3" y="4" width="18" height="16" rx="2"/><circle cx="8.5" cy="9.5" r="1.5"/><path d="m21 16-5-5-9 9"/>"#
            }
            Self::Palette => {
                r#"<path d="M12 3a9 9 0 1 0 0 18c1.1 0 1.7-.9 1.2-1.9-.6-1.1.2-2.6 1.5-2.6H17a4 4 0 0 0 4-4c0-5-4-9.5-9-9.5Z"/><circle cx="7.5" cy="11" r="1"/><circle cx="10" cy="7" r="1"/><circle cx="15" cy="7.5" r="1"/>"#
            }
            Self::Checkmark => r#"<path d="m4.5 12.5 4.5 4.5 10.5-10.5"/>"#,
            Self::WindowMinimize => r#"<path d="M4 12h16"/>"#,
            Self::WindowMaximize => r#"<rect x="4" y="4" width="16" height="16" rx="2"/>"#,
            Self::WindowRestore => {
                r#"<rect x="4" y="8" width="12" height="12" rx="2"/><path d="M8 8V6a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2h-2"/>"#
            }
            Self::Dismiss => r#"<path d="m5 5 14 14M19 5 5 19"/>"#,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px (window chrome controls).
    Xs,
    /// 16px (menus and taskbar).
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 32px (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the shared catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconName; 17] = [
        IconName::User,
        IconName::FolderOpen,
        IconName::Activity,
        IconName::Monitor,
        IconName::Mail,
        IconName::Terminal,
        IconName::Games,
        IconName::Settings,
        IconName::Launcher,
        IconName::Search,
        IconName::Image,
        IconName::Palette,
        IconName::Checkmark,
        IconName::WindowMinimize,
        IconName::WindowMaximize,
        IconName::WindowRestore,
        IconName::Dismiss,
    ];

    #[test]
    fn icon_tokens_are_unique_and_bodies_present() {
        let mut tokens: Vec<_> = ALL.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), ALL.len());
        assert!(ALL.iter().all(|icon| !icon.svg_body().is_empty()));
    }
}
