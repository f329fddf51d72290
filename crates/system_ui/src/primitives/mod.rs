//! Structural, shell, overlay, control, and layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod overlays;
mod shell;

pub use controls::{Button, ColorField, Switch, TextField};
pub use data_display::{Badge, Card, EmptyState, Heading, Text};
pub use layout::{Cluster, Grid, Stack};
pub use overlays::{LauncherMenu, MenuItem, MenuSeparator, MenuSurface};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Taskbar,
    TaskbarButton, TaskbarClock, TaskbarSection, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Semantic elevation levels for surfaces.
pub enum Elevation {
    /// Flat surface.
    Flat,
    /// Raised surface.
    #[default]
    Raised,
    /// Overlay surface (menus, popovers).
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action.
    Primary,
    /// Quiet button used inside chrome and menus.
    Quiet,
    /// Accent-filled swatch or toggle.
    Accent,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent-colored text.
    Accent,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    #[default]
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch to fill.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Main-axis justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("start-button")),
            "ui-button start-button"
        );
    }

    #[test]
    fn bool_tokens_match_dom_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
