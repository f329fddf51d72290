//! Shared UI primitive library for the portfolio desktop shell.
//!
//! The crate owns reusable Leptos primitives, the icon catalog, and the stable
//! `data-ui-*` DOM contract the shell stylesheet targets. Shell components and app
//! content compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, ColorField, DesktopBackdrop,
    DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Elevation, EmptyState,
    Grid, Heading, LauncherMenu, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem,
    MenuSeparator, MenuSurface, Stack, Switch, Taskbar, TaskbarButton, TaskbarClock,
    TaskbarSection, Text, TextField, TextRole, TextTone, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for shell and app-content modules.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, ColorField, DesktopBackdrop,
        DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Elevation,
        EmptyState, Grid, Heading, Icon, IconName, IconSize, LauncherMenu, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, MenuItem, MenuSeparator, MenuSurface, Stack,
        Switch, Taskbar, TaskbarButton, TaskbarClock, TaskbarSection, Text, TextField, TextRole,
        TextTone, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
        WindowTitleBar,
    };
}
