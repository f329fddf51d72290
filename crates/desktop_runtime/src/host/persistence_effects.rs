use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_theme(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let theme = runtime.theme.get_untracked();
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::persist_theme(prefs.as_ref(), &theme).await {
            logging::warn!("persist theme failed: {err}");
        }
    });
}

pub(super) fn clear_theme(host: DesktopHostContext) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::clear_theme(prefs.as_ref()).await {
            logging::warn!("clear persisted theme failed: {err}");
        }
    });
}
