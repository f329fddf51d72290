//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
};
use wasm_bindgen::JsCast;

use self::{menus::StartMenu, taskbar::DesktopTaskbar, window::DesktopWindow};

use crate::{
    apps, compositor,
    model::{DragState, OpenWindowRequest, PointerPosition},
    reducer::DesktopAction,
    shortcuts::{resolve_shortcut, KeyChord},
    theme,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn event_target_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

fn is_text_entry_target(ev: &web_sys::Event) -> bool {
    event_target_element(ev)
        .map(|element| {
            let tag = element.tag_name().to_ascii_lowercase();
            tag == "input" || tag == "textarea"
        })
        .unwrap_or(false)
}

fn key_chord(ev: &web_sys::KeyboardEvent) -> KeyChord {
    KeyChord {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
        in_text_field: is_text_entry_target(ev),
    }
}

#[component]
/// Renders the full desktop shell: wallpaper, icons, windows, start menu and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let theme_pref = runtime.theme;
    let viewport = create_memo(move |_| runtime.interaction.with(|ui| ui.viewport));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ResizeViewport {
            viewport: runtime.host.get_value().viewport_size(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let pointer_move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime.interaction.get_untracked().drag == DragState::Idle {
            return;
        }
        runtime.dispatch_action(DesktopAction::DragTo {
            pointer: pointer_from_pointer_event(&ev),
            viewport: viewport.get_untracked(),
        });
    });
    on_cleanup(move || pointer_move_listener.remove());

    let pointer_up_listener = window_event_listener(ev::pointerup, move |_| {
        if runtime.interaction.get_untracked().drag != DragState::Idle {
            runtime.dispatch_action(DesktopAction::EndDrag);
        }
    });
    on_cleanup(move || pointer_up_listener.remove());

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let desktop = state.get_untracked();
        if let Some(action) = resolve_shortcut(&key_chord(&ev), &desktop) {
            ev.prevent_default();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || keydown_listener.remove());

    let backdrop = Signal::derive(move || theme::backdrop_style(&theme_pref.get()));

    view! {
        <DesktopRoot
            layout_class="desktop-shell"
            theme=Signal::derive(move || theme_pref.get().mode.token().to_string())
            style=Signal::derive(move || theme::root_style(&theme_pref.get()))
        >
            <DesktopBackdrop
                wallpaper_kind=Signal::derive(move || backdrop.get().0.to_string())
                style=Signal::derive(move || backdrop.get().1)
                tint=Signal::derive(move || theme_pref.get().wallpaper_tint)
            >
                <div
                    data-ui-slot="dismiss-layer"
                    on:pointerdown=move |_| {
                        if state.get_untracked().start_menu_open {
                            runtime.dispatch_action(DesktopAction::CloseStartMenu);
                        }
                    }
                />
                <DesktopIconGrid>
                    {apps::desktop_icon_apps()
                        .map(|entry| {
                            let app_type = entry.app_type;
                            view! {
                                <DesktopIconButton
                                    icon=apps::app_icon(app_type)
                                    label=entry.desktop_label
                                    data_app=app_type.as_str()
                                    style=format!(
                                        "left:{}px;top:{}px;",
                                        entry.icon_position.x,
                                        entry.icon_position.y
                                    )
                                    on_open=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenWindow(
                                            OpenWindowRequest::new(app_type),
                                        ));
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || {
                            compositor::stacked_windows(&state.get())
                                .into_iter()
                                .map(|win| win.id)
                                .collect::<Vec<_>>()
                        }
                        key=|window_id| *window_id
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id viewport=viewport />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <StartMenu />
            <DesktopTaskbar />
        </DesktopRoot>
    }
}
