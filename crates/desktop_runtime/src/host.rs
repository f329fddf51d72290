//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducers stay pure; everything that touches storage or the DOM is routed through
//! [`DesktopHostContext`] so native tests can inject an in-memory store.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use platform_host::PrefsStore;
use platform_host_web::prefs_store;

use crate::{
    model::{ViewportSize, WindowId},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()))
    }
}

impl DesktopHostContext {
    /// Builds a host context over an explicit preference store.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self { prefs }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Loads the persisted theme and applies any `?open=` deep link.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by a reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistTheme => {
                persistence_effects::persist_theme(self.clone(), runtime)
            }
            RuntimeEffect::ClearPersistedTheme => persistence_effects::clear_theme(self.clone()),
            RuntimeEffect::FocusWindowFrame(window_id) => self.focus_window_frame(window_id),
        }
    }

    /// Moves DOM focus to the frame of `window_id` after the current render.
    pub fn focus_window_frame(&self, window_id: WindowId) {
        host_ui::focus_window_frame(window_id);
    }

    /// Returns the current browser viewport, or a fixed fallback off the browser.
    pub fn viewport_size(&self) -> ViewportSize {
        host_ui::viewport_size()
    }
}
