use super::*;

#[component]
/// Card surface for content blocks inside app windows.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Inline text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
        >
            {children()}
        </h2>
    }
}

#[component]
/// Compact label badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder block for empty or not-yet-built content.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
