use super::*;

#[component]
/// Overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-elevation=Elevation::Overlay.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu row with an optional leading icon.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-menu-item", layout_class)
            role="menuitem"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-variant=ButtonVariant::Quiet.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Md /> })}
            <span data-ui-slot="menu-item-copy">{children()}</span>
        </button>
    }
}

#[component]
/// Menu separator rule.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Start-menu launcher wrapper.
pub fn LauncherMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <MenuSurface
            layout_class=layout_class.unwrap_or("")
            id=id.unwrap_or_default()
            role="menu".to_string()
            aria_label="Application launcher".to_string()
        >
            {children()}
        </MenuSurface>
    }
}
