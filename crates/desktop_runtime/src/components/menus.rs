use super::*;
use system_ui::{
    IconName, LauncherMenu, MenuItem, MenuSeparator, Text, TextField, TextRole, TextTone,
};

use crate::model::AppType;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let query = create_rw_signal(String::new());
    let search_input = create_node_ref::<html::Input>();

    create_effect(move |was_open: Option<bool>| {
        let is_open = state.get().start_menu_open;
        if is_open && was_open != Some(true) {
            query.set(String::new());
            // The input mounts with the menu, after this effect runs.
            request_animation_frame(move || {
                if let Some(input) = search_input.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
        is_open
    });

    let open_app = move |app_type: AppType| {
        runtime.dispatch_action(DesktopAction::OpenWindow(OpenWindowRequest::new(app_type)));
    };
    let results = create_memo(move |_| {
        apps::search_launcher(&query.get())
            .into_iter()
            .map(|entry| entry.app_type)
            .collect::<Vec<_>>()
    });

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <LauncherMenu id="desktop-launcher-menu">
                <TextField
                    id="desktop-launcher-search"
                    placeholder="Search apps"
                    aria_label="Search apps"
                    input_type="search"
                    ui_slot="launcher-search"
                    node_ref=search_input
                    value=Signal::from(query)
                    on_input=Callback::new(move |ev: web_sys::Event| query.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                if let Some(first) = results.get_untracked().first().copied() {
                                    ev.prevent_default();
                                    open_app(first);
                                }
                            }
                            // Text fields are skipped by the global shortcut listener.
                            "Escape" => {
                                ev.prevent_default();
                                runtime.dispatch_action(DesktopAction::CloseStartMenu);
                            }
                            _ => {}
                        }
                    })
                />
                <Show
                    when=move || !results.get().is_empty()
                    fallback=|| {
                        view! {
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                "No matching apps"
                            </Text>
                        }
                    }
                >
                    <For each=move || results.get() key=|app_type| *app_type let:app_type>
                        {{
                            let entry = apps::app_entry(app_type);
                            view! {
                                <MenuItem
                                    icon=apps::app_icon(app_type)
                                    aria_label=entry.launcher_label
                                    on_click=Callback::new(move |_| open_app(app_type))
                                >
                                    <span data-ui-slot="menu-item-label">{entry.launcher_label}</span>
                                    <span data-ui-slot="menu-item-description">{entry.description}</span>
                                </MenuItem>
                            }
                        }}
                    </For>
                </Show>
                <MenuSeparator />
                <MenuItem
                    icon=IconName::Image
                    on_click=Callback::new(move |_| open_app(AppType::DisplayOptions))
                >
                    "Change Wallpaper"
                </MenuItem>
                <MenuItem
                    icon=IconName::Palette
                    on_click=Callback::new(move |_| open_app(AppType::DisplayOptions))
                >
                    "Personalize"
                </MenuItem>
            </LauncherMenu>
        </Show>
    }
}
