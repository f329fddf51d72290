//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer containers, the runtime effect queue and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use std::rc::Rc;

use leptos::*;
use platform_host::PrefsStore;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    theme::{reduce_theme, ThemeAction, ThemePreference},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching actions.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive window registry snapshot.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state.
    pub interaction: RwSignal<InteractionState>,
    /// Reactive theme preference snapshot.
    pub theme: RwSignal<ThemePreference>,
    /// Queue of runtime effects emitted by reducers and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Window registry dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Theme store dispatch callback.
    pub dispatch_theme: Callback<ThemeAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a window registry action.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Dispatches a theme store action.
    pub fn dispatch_theme_action(&self, action: ThemeAction) {
        self.dispatch_theme.call(action);
    }
}

fn enqueue(effects: RwSignal<Vec<RuntimeEffect>>, new_effects: Vec<RuntimeEffect>) {
    if new_effects.is_empty() {
        return;
    }
    effects.update(|queue| queue.extend(new_effects));
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    runtime.host.get_value().install_boot_hydration(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Preference store override. Defaults to the browser `localStorage` adapter.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    children: Children,
) -> impl IntoView {
    let host = store_value(
        prefs
            .map(DesktopHostContext::new)
            .unwrap_or_default(),
    );
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState {
        viewport: host.get_value().viewport_size(),
        ..InteractionState::default()
    });
    let theme = create_rw_signal(ThemePreference::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        // On error the working copies are dropped, so subscribers never see a partial update.
        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                enqueue(effects, new_effects);
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let dispatch_theme = Callback::new(move |action: ThemeAction| {
        let mut next = theme.get_untracked();
        let previous = next.clone();
        let new_effects = reduce_theme(&mut next, action);
        if next != previous {
            theme.set(next);
        }
        enqueue(effects, new_effects);
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        theme,
        effects,
        dispatch,
        dispatch_theme,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
