//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    compositor,
    model::{
        DesktopState, DragState, InteractionState, OpenWindowRequest, PointerPosition,
        ViewportSize, WindowId, WindowPosition, WindowSize,
    },
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or focus the open window of the same type.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Toggle a window's minimized flag.
    MinimizeWindow {
        /// Window to minimize or show again.
        window_id: WindowId,
    },
    /// Toggle a window's maximized flag.
    MaximizeWindow {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Replace a window's stored position.
    UpdateWindowPosition {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: WindowPosition,
    },
    /// Replace a window's stored size.
    UpdateWindowSize {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: WindowSize,
    },
    /// Close the active window, if any.
    CloseActiveWindow,
    /// Taskbar entry click.
    ActivateTaskbarEntry {
        /// Window associated with the taskbar entry.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Pointer-down on a window title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-move anywhere in the document.
    DragTo {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport size used for clamping.
        viewport: ViewportSize,
    },
    /// Pointer-up anywhere in the document.
    EndDrag,
    /// The canvas changed size; open frames are fitted into it.
    ResizeViewport {
        /// New canvas size.
        viewport: ViewportSize,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by reducers for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the current theme preference.
    PersistTheme,
    /// Drop the persisted theme so the next boot starts from defaults.
    ClearPersistedTheme,
    /// Move DOM focus to a window frame.
    FocusWindowFrame(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference a missing window.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present. State may not be partially applied in that case; callers discard the working copy.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(request) => {
            let window_id = window_manager::open_window(state, request, interaction.viewport);
            effects.push(RuntimeEffect::FocusWindowFrame(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            window_manager::close_window(state, window_id)?;
            let dragging_closed = matches!(
                interaction.drag,
                DragState::Dragging { window_id: dragged, .. } if dragged == window_id
            );
            if dragging_closed {
                interaction.drag = DragState::Idle;
            }
            if let Some(active) = state.active_window_id {
                effects.push(RuntimeEffect::FocusWindowFrame(active));
            }
        }
        DesktopAction::FocusWindow { window_id }
        | DesktopAction::ActivateTaskbarEntry { window_id } => {
            window_manager::focus_window(state, window_id)?;
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowFrame(window_id));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            window_manager::minimize_window(state, window_id)?;
        }
        DesktopAction::MaximizeWindow { window_id } => {
            window_manager::maximize_window(state, window_id)?;
        }
        DesktopAction::UpdateWindowPosition {
            window_id,
            position,
        } => {
            window_manager::update_window_position(state, window_id, position)?;
        }
        DesktopAction::UpdateWindowSize { window_id, size } => {
            window_manager::update_window_size(state, window_id, size)?;
        }
        DesktopAction::CloseActiveWindow => {
            if let Some(window_id) = state.active_window_id {
                return reduce_desktop(state, interaction, DesktopAction::CloseWindow { window_id });
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            window_manager::focus_window(state, window_id)?;
            state.start_menu_open = false;
            let window = state
                .window(window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            interaction.drag = compositor::begin_drag(window, pointer);
        }
        DesktopAction::DragTo { pointer, viewport } => {
            let DragState::Dragging { window_id, offset } = interaction.drag else {
                return Ok(effects);
            };
            let Some(window) = state.window(window_id) else {
                interaction.drag = DragState::Idle;
                return Err(ReducerError::WindowNotFound(window_id));
            };
            if !window.is_maximized {
                let candidate = WindowPosition {
                    x: pointer.x - offset.x,
                    y: pointer.y - offset.y,
                };
                let position = compositor::clamp_window_position(candidate, window.size, viewport);
                if position != window.position {
                    window_manager::update_window_position(state, window_id, position)?;
                }
            }
        }
        DesktopAction::EndDrag => {
            interaction.drag = DragState::Idle;
        }
        DesktopAction::ResizeViewport { viewport } => {
            interaction.viewport = viewport;
            window_manager::fit_windows_to_viewport(state, viewport);
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppType, TASKBAR_HEIGHT_PX};

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app_type: AppType,
    ) -> WindowId {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(app_type)),
        )
        .expect("open window");
        state.active_window_id.expect("opened window is active")
    }

    fn act(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
        reduce_desktop(state, interaction, action).expect("reduce");
    }

    fn z(state: &DesktopState, id: WindowId) -> u32 {
        state.window(id).expect("window").z_index
    }

    #[test]
    fn open_assigns_serial_ids_catalog_defaults_and_initial_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);

        assert_eq!(about.to_string(), "about-me-1");
        assert_eq!(projects.to_string(), "projects-2");
        let record = state.window(about).expect("about");
        assert_eq!(record.title, "About Me.app");
        assert_eq!(record.position, WindowPosition { x: 100, y: 100 });
        assert_eq!(z(&state, about), 1000);
        assert_eq!(z(&state, projects), 1001);
        assert!(record.is_open && !record.is_minimized && !record.is_maximized);
    }

    #[test]
    fn open_honors_overrides() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let request = OpenWindowRequest {
            app_type: AppType::Terminal,
            title: Some("Shell".to_string()),
            position: Some(WindowPosition { x: 5, y: 6 }),
            size: Some(WindowSize {
                width: 300,
                height: 200,
            }),
        };
        act(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(request),
        );

        let record = &state.windows[0];
        assert_eq!(record.title, "Shell");
        assert_eq!(record.position, WindowPosition { x: 5, y: 6 });
        assert_eq!(
            record.size,
            WindowSize {
                width: 300,
                height: 200
            }
        );
    }

    #[test]
    fn repeated_open_keeps_a_single_instance_and_focuses_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppType::Contact);
        open(&mut state, &mut interaction, AppType::Games);
        for _ in 0..3 {
            let again = open(&mut state, &mut interaction, AppType::Contact);
            assert_eq!(again, first);
            assert_eq!(state.active_window_id, Some(first));
            let open_contacts = state
                .windows
                .iter()
                .filter(|w| w.app_type == AppType::Contact && w.is_open)
                .count();
            assert_eq!(open_contacts, 1);
        }
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn reopening_a_minimized_app_restores_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: about },
        );
        open(&mut state, &mut interaction, AppType::AboutMe);

        assert!(!state.window(about).expect("about").is_minimized);
        assert_eq!(state.active_window_id, Some(about));
    }

    #[test]
    fn most_recently_focused_window_has_strictly_highest_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let ids: Vec<_> = [AppType::AboutMe, AppType::Projects, AppType::Terminal]
            .into_iter()
            .map(|app_type| open(&mut state, &mut interaction, app_type))
            .collect();

        for &target in [ids[0], ids[2], ids[1], ids[0]].iter() {
            act(
                &mut state,
                &mut interaction,
                DesktopAction::FocusWindow { window_id: target },
            );
            let top = z(&state, target);
            assert!(state
                .windows
                .iter()
                .filter(|w| w.id != target)
                .all(|w| w.z_index < top));
        }
    }

    #[test]
    fn ids_are_never_reused_after_close() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppType::Games);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: first },
        );
        let second = open(&mut state, &mut interaction, AppType::Games);

        assert_ne!(first, second);
        assert_eq!(second.serial, first.serial + 1);
    }

    #[test]
    fn closing_active_window_retargets_to_newest_survivor() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);
        let skills = open(&mut state, &mut interaction, AppType::SkillsDashboard);
        // Raise the oldest window so z-order and insertion order disagree.
        act(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: about },
        );
        act(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: skills },
        );

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: skills },
        )
        .expect("close");

        assert_eq!(state.active_window_id, Some(projects));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowFrame(projects)]);
        assert!(z(&state, projects) > z(&state, about));

        act(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: projects,
            },
        );
        assert_eq!(state.active_window_id, Some(about));
        act(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        );
        assert_eq!(state.active_window_id, None);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_inactive_window_keeps_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        );

        assert_eq!(state.active_window_id, Some(projects));
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn minimizing_active_window_clears_focus_without_promotion() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: projects,
            },
        );

        assert_eq!(state.active_window_id, None);
        assert!(state.window(projects).expect("projects").is_minimized);

        act(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: projects,
            },
        );
        assert!(!state.window(projects).expect("projects").is_minimized);
        assert_eq!(state.active_window_id, None);
    }

    #[test]
    fn maximize_twice_restores_literal_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppType::Projects);
        let before = state.window(id).expect("window").clone();
        act(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { window_id: id },
        );
        assert!(state.window(id).expect("window").is_maximized);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { window_id: id },
        );

        let after = state.window(id).expect("window");
        assert!(!after.is_maximized);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
    }

    #[test]
    fn unknown_ids_are_errors_and_leave_state_alone() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppType::AboutMe);
        let snapshot = state.clone();
        let ghost = WindowId {
            app_type: AppType::Games,
            serial: 99,
        };

        for action in [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::FocusWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::MaximizeWindow { window_id: ghost },
            DesktopAction::UpdateWindowPosition {
                window_id: ghost,
                position: WindowPosition { x: 1, y: 1 },
            },
            DesktopAction::UpdateWindowSize {
                window_id: ghost,
                size: WindowSize {
                    width: 10,
                    height: 10,
                },
            },
        ] {
            let mut working = state.clone();
            assert_eq!(
                reduce_desktop(&mut working, &mut interaction, action),
                Err(ReducerError::WindowNotFound(ghost))
            );
            assert_eq!(working, snapshot);
        }
    }

    #[test]
    fn update_size_replaces_only_the_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let contact = open(&mut state, &mut interaction, AppType::Contact);
        let before = state.window(about).expect("about").clone();
        let size = WindowSize {
            width: 420,
            height: 310,
        };
        act(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowSize {
                window_id: about,
                size,
            },
        );

        let after = state.window(about).expect("about");
        assert_eq!(after.size, size);
        assert_eq!(after.position, before.position);
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(state.active_window_id, Some(contact));
    }

    #[test]
    fn close_active_closes_the_focused_window_and_retargets() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseActiveWindow,
        )
        .expect("close active");

        assert!(state.window(projects).is_none());
        assert_eq!(state.active_window_id, Some(about));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowFrame(about)]);
    }

    #[test]
    fn opened_frames_fit_above_the_taskbar() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = interaction.viewport;

        let projects = open(&mut state, &mut interaction, AppType::Projects);
        let record = state.window(projects).expect("projects");
        assert_eq!(
            record.size,
            WindowSize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(
            record.position,
            WindowPosition {
                x: 150,
                y: viewport.height - 600 - TASKBAR_HEIGHT_PX,
            }
        );

        let request = OpenWindowRequest {
            position: Some(WindowPosition { x: -40, y: 5000 }),
            ..OpenWindowRequest::new(AppType::Terminal)
        };
        act(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(request),
        );
        let terminal = state.open_window_for(AppType::Terminal).expect("terminal");
        assert_eq!(terminal.position.x, 0);
        assert_eq!(
            terminal.position.y + terminal.size.height,
            viewport.height - TASKBAR_HEIGHT_PX
        );
    }

    #[test]
    fn viewport_resize_refits_open_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let contact = open(&mut state, &mut interaction, AppType::Contact);
        let small = ViewportSize {
            width: 560,
            height: 480,
        };
        act(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeViewport { viewport: small },
        );

        assert_eq!(interaction.viewport, small);
        for id in [about, contact] {
            let record = state.window(id).expect("window");
            assert!(record.position.x >= 0 && record.position.y >= 0);
            assert!(record.position.x + record.size.width <= small.width);
            assert!(record.position.y + record.size.height <= small.height - TASKBAR_HEIGHT_PX);
        }
        assert_eq!(
            state.window(contact).expect("contact").position,
            WindowPosition { x: 60, y: 16 }
        );
        // Focus and stacking are untouched by a resize.
        assert_eq!(state.active_window_id, Some(contact));
        assert!(z(&state, contact) > z(&state, about));

        let games = open(&mut state, &mut interaction, AppType::Games);
        let record = state.window(games).expect("games");
        assert!(record.position.x + record.size.width <= small.width);
    }

    #[test]
    fn close_active_is_a_no_op_without_an_active_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseActiveWindow,
        )
        .expect("no-op");
        assert!(effects.is_empty());
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn drag_moves_window_by_pointer_delta_and_clamps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = ViewportSize {
            width: 1280,
            height: 800,
        };

        let id = open(&mut state, &mut interaction, AppType::Contact);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 320, y: 190 },
            },
        );
        assert_eq!(
            interaction.drag,
            DragState::Dragging {
                window_id: id,
                offset: PointerPosition { x: 20, y: 10 },
            }
        );

        act(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: 420, y: 290 },
                viewport,
            },
        );
        assert_eq!(
            state.window(id).expect("window").position,
            WindowPosition { x: 400, y: 280 }
        );

        for _ in 0..2 {
            act(
                &mut state,
                &mut interaction,
                DesktopAction::DragTo {
                    pointer: PointerPosition { x: 5000, y: 5000 },
                    viewport,
                },
            );
            assert_eq!(
                state.window(id).expect("window").position,
                WindowPosition {
                    x: 1280 - 500,
                    y: 800 - 400 - TASKBAR_HEIGHT_PX,
                }
            );
        }

        act(&mut state, &mut interaction, DesktopAction::EndDrag);
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn drag_is_suppressed_for_maximized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppType::AboutMe);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { window_id: id },
        );
        act(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(interaction.drag, DragState::Idle);

        act(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: 600, y: 400 },
                viewport: ViewportSize::default(),
            },
        );
        assert_eq!(
            state.window(id).expect("window").position,
            WindowPosition { x: 100, y: 100 }
        );
    }

    #[test]
    fn pointer_up_without_drag_is_tolerated() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        act(&mut state, &mut interaction, DesktopAction::EndDrag);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: 1, y: 1 },
                viewport: ViewportSize::default(),
            },
        );
        assert_eq!(interaction.drag, DragState::Idle);
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn begin_drag_focuses_the_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: about,
                pointer: PointerPosition { x: 150, y: 110 },
            },
        );

        assert_eq!(state.active_window_id, Some(about));
        assert!(z(&state, about) > z(&state, projects));
    }

    #[test]
    fn opening_or_focusing_closes_the_start_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        act(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        let id = open(&mut state, &mut interaction, AppType::Projects);
        assert!(!state.start_menu_open);

        act(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        act(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarEntry { window_id: id },
        );
        assert!(!state.start_menu_open);
    }

    #[test]
    fn portfolio_walkthrough_pins_minimized_survivor_policy() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, AppType::AboutMe);
        let projects = open(&mut state, &mut interaction, AppType::Projects);
        assert_eq!(state.active_window_id, Some(projects));
        assert_eq!(state.windows.len(), 2);
        assert!(z(&state, projects) > z(&state, about));

        act(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: projects,
            },
        );
        assert_eq!(state.active_window_id, None);
        let minimized = state.window(projects).expect("projects");
        assert!(minimized.is_minimized && minimized.is_open);

        act(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: about },
        );
        assert_eq!(state.active_window_id, Some(about));
        assert!(z(&state, about) > z(&state, projects));

        act(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        );
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id, projects);
        // A minimized survivor is not re-activated.
        assert_eq!(state.active_window_id, None);
        assert!(state.window(projects).expect("projects").is_minimized);
    }
}
