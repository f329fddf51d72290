use std::time::Duration;

use super::*;
use system_ui::{IconName, Taskbar, TaskbarButton, TaskbarClock, TaskbarSection};

use crate::model::{DesktopState, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum TaskbarEntryState {
    ActiveVisible,
    InactiveVisible,
    Minimized,
}

impl TaskbarEntryState {
    fn token(self) -> &'static str {
        match self {
            Self::ActiveVisible => "active",
            Self::InactiveVisible => "inactive",
            Self::Minimized => "minimized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TaskbarEntry {
    pub window_id: WindowId,
    pub label: String,
    pub state: TaskbarEntryState,
}

/// Title shown on a taskbar entry: the window title without a trailing `.app`.
pub(super) fn taskbar_label(title: &str) -> String {
    title.strip_suffix(".app").unwrap_or(title).to_string()
}

/// One entry per open window, in insertion order.
pub(super) fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .filter(|win| win.is_open)
        .map(|win| TaskbarEntry {
            window_id: win.id,
            label: taskbar_label(&win.title),
            state: if win.is_minimized {
                TaskbarEntryState::Minimized
            } else if state.active_window_id == Some(win.id) {
                TaskbarEntryState::ActiveVisible
            } else {
                TaskbarEntryState::InactiveVisible
            },
        })
        .collect()
}

fn format_clock(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

fn clock_now() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        format_clock(date.get_hours(), date.get_minutes())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        format_clock(0, 0)
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(clock_now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(clock_now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let entries = create_memo(move |_| taskbar_entries(&state.get()));
    let start_open = Signal::derive(move || state.get().start_menu_open);

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id="taskbar-start-button"
                    ui_slot="start-button"
                    icon=IconName::Launcher
                    aria_label="Start"
                    aria_controls="desktop-launcher-menu"
                    aria_expanded=start_open
                    selected=start_open
                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <span>"Start"</span>
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.window_id, entry.label.clone(), entry.state)
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        let active = entry.state == TaskbarEntryState::ActiveVisible;
                        view! {
                            <TaskbarButton
                                id=format!("taskbar-{window_id}")
                                icon=apps::app_icon(window_id.app_type)
                                aria_label=entry.label.clone()
                                aria_pressed=active
                                title=entry.label.clone()
                                ui_state=entry.state.token()
                                selected=active
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry {
                                        window_id,
                                    });
                                })
                            >
                                <span>{entry.label.clone()}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <TaskbarClock text=clock />
            </TaskbarSection>
        </Taskbar>
    }
}
