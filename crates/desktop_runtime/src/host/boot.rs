use leptos::{logging, spawn_local, Callable};

use crate::{
    deep_link, host::DesktopHostContext, model::OpenWindowRequest, persistence,
    reducer::DesktopAction, runtime_context::DesktopRuntimeContext, theme::ThemeAction,
};

pub(super) fn install_boot_hydration(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let link = deep_link::parse_open_query(&deep_link::current_search());
    for unknown in &link.unknown {
        logging::warn!("deep link names unknown app `{unknown}`; skipping");
    }
    for app_type in link.open {
        runtime
            .dispatch
            .call(DesktopAction::OpenWindow(OpenWindowRequest::new(app_type)));
    }

    spawn_local(async move {
        let prefs = host.prefs_store();
        let theme = persistence::load_theme(prefs.as_ref()).await;
        runtime.dispatch_theme.call(ThemeAction::Hydrate(theme));
    });
}
