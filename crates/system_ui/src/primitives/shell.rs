use super::*;

#[component]
/// Root desktop shell element carrying theme attributes.
pub fn DesktopRoot(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] theme: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-shell", layout_class)
            data-theme=move || theme.get()
            style=move || style.get()
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
        >
            {children()}
        </div>
    }
}

#[component]
/// Wallpaper layer with an optional tint overlay.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] wallpaper_kind: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] tint: MaybeSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
            data-ui-variant=move || wallpaper_kind.get()
            style=move || style.get()
        >
            {move || {
                tint.get()
                    .map(|color| {
                        view! {
                            <div
                                data-ui-slot="wallpaper-tint"
                                style=format!("background-color: {color};")
                            ></div>
                        }
                    })
            }}
            {children()}
        </div>
    }
}

#[component]
/// Absolutely positioned desktop icon container.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            role="list"
            aria-label="Desktop"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop launcher icon. Opens on double click.
pub fn DesktopIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] data_app: Option<String>,
    #[prop(optional)] on_open: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            style=style
            title=label.clone()
            aria-label=label.clone()
            data-app=data_app
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |ev| {
                if let Some(on_open) = on_open.as_ref() {
                    on_open.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Lg />
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

#[component]
/// Host for the window stack.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window frame. Minimized frames stay mounted but hidden.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            id=id
            style=move || style.get()
            tabindex="-1"
            role="dialog"
            aria-label=move || aria_label.get()
            hidden=move || minimized.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window title bar and drag handle.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Title text group inside the title bar.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Row of window chrome controls.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window chrome control button.
///
/// Pointer-down bubbles so the frame still focuses; clicks stay local to the button.
pub fn WindowControlButton(
    icon: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-window-control", layout_class)
            aria-label=aria_label.clone()
            title=aria_label
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=icon.token()
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Xs />
        </button>
    }
}

#[component]
/// Window content region.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar band pinned to the bottom of the viewport.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-taskbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Named taskbar region (start, running windows, tray).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button used by the start button and running-window entries.
pub fn TaskbarButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_pressed: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] ui_state: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id.unwrap_or_default()
            aria_label=aria_label
            aria_controls=aria_controls
            aria_expanded=aria_expanded
            aria_pressed=aria_pressed
            title=title
            ui_state=ui_state
            selected=selected
            ui_slot=ui_slot.unwrap_or("taskbar-button")
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </Button>
    }
}

#[component]
/// Read-only clock readout in the taskbar tray.
pub fn TaskbarClock(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] text: Signal<String>,
) -> impl IntoView {
    view! {
        <time
            class=merge_layout_class("ui-taskbar-clock", layout_class)
            aria-live="off"
            data-ui-primitive="true"
            data-ui-kind="taskbar-clock"
        >
            {move || text.get()}
        </time>
    }
}
