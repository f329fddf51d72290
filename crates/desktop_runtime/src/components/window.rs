use super::*;
use system_ui::{
    Icon, IconName, IconSize, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

use crate::model::{PointerPosition, ViewportSize, WindowId};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn event_inside_button(ev: &web_sys::Event) -> bool {
    event_target_element(ev)
        .and_then(|element| element.closest("button").ok().flatten())
        .is_some()
}

/// Any press on the frame, control buttons included, raises an inactive window.
fn frame_press_action(window_id: WindowId, is_active: bool) -> Option<DesktopAction> {
    (!is_active).then_some(DesktopAction::FocusWindow { window_id })
}

/// Only a primary press on bare title-bar chrome starts a drag.
fn title_bar_press_action(
    window_id: WindowId,
    button: i16,
    on_button: bool,
    pointer: PointerPosition,
) -> Option<DesktopAction> {
    (button == 0 && !on_button).then_some(DesktopAction::BeginDrag { window_id, pointer })
}

/// Double-clicks that land on a control button are that button's clicks, not a maximize gesture.
fn title_bar_double_click_action(window_id: WindowId, on_button: bool) -> Option<DesktopAction> {
    (!on_button).then_some(DesktopAction::MaximizeWindow { window_id })
}

#[component]
pub(super) fn DesktopWindow(
    window_id: WindowId,
    viewport: Memo<ViewportSize>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let is_active = Signal::derive(move || runtime.state.get().active_window_id == Some(window_id));
    let is_minimized =
        Signal::derive(move || window.get().map(|w| w.is_minimized).unwrap_or(false));
    let is_maximized =
        Signal::derive(move || window.get().map(|w| w.is_maximized).unwrap_or(false));
    let title = Signal::derive(move || window.get().map(|w| w.title).unwrap_or_default());
    let style = Signal::derive(move || {
        window
            .get()
            .map(|w| compositor::frame_style(&w, viewport.get()))
            .unwrap_or_default()
    });
    let app_type = window_id.app_type;

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if let Some(action) = frame_press_action(window_id, is_active.get_untracked()) {
            runtime.dispatch_action(action);
        }
    });
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        let Some(action) = title_bar_press_action(
            window_id,
            ev.button(),
            event_inside_button(&ev),
            pointer_from_pointer_event(&ev),
        ) else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(action);
    });
    let title_bar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        if let Some(action) = title_bar_double_click_action(window_id, event_inside_button(&ev)) {
            runtime.dispatch_action(action);
        }
    });
    let toggle_maximize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::MaximizeWindow { window_id });
    });

    view! {
        <WindowFrame
            id=window_id.dom_id()
            style=style
            aria_label=title
            focused=is_active
            minimized=is_minimized
            maximized=is_maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_drag on_dblclick=title_bar_double_click>
                <WindowTitle>
                    <Icon icon=apps::app_icon(app_type) size=IconSize::Sm />
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        })
                    />
                    {move || {
                        let (icon, label) = if is_maximized.get() {
                            (IconName::WindowRestore, "Restore window")
                        } else {
                            (IconName::WindowMaximize, "Maximize window")
                        };
                        view! {
                            <WindowControlButton icon=icon aria_label=label on_click=toggle_maximize />
                        }
                    }}
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        })
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{apps::render_app_contents(app_type)}</WindowBody>
        </WindowFrame>
    }
}
