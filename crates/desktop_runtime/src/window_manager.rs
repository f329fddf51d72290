//! Window registry commands applied by the desktop reducer.
//!
//! Every command mutates [`DesktopState`] in place. Commands addressed to an unknown window
//! return [`ReducerError::WindowNotFound`]; the runtime treats that as a logged no-op.

use crate::{
    apps, compositor,
    model::{
        DesktopState, OpenWindowRequest, ViewportSize, WindowId, WindowPosition, WindowRecord,
        WindowSize,
    },
    reducer::ReducerError,
};

fn allocate_z_index(state: &mut DesktopState) -> u32 {
    let z_index = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    z_index
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

/// Opens a window for `request.app_type`, or focuses the already-open one.
///
/// New frames are fitted into `viewport`. Returns the id of the window that is active afterwards.
pub fn open_window(
    state: &mut DesktopState,
    request: OpenWindowRequest,
    viewport: ViewportSize,
) -> WindowId {
    state.start_menu_open = false;

    if let Some(existing) = state.open_window_for(request.app_type).map(|w| w.id) {
        // The record was just found, so focusing cannot miss.
        let _ = focus_window(state, existing);
        return existing;
    }

    let entry = apps::app_entry(request.app_type);
    let id = WindowId {
        app_type: request.app_type,
        serial: state.window_counter,
    };
    state.window_counter = state.window_counter.saturating_add(1);
    let z_index = allocate_z_index(state);
    let (position, size) = compositor::clamp_window_frame(
        request.position.unwrap_or(entry.window_position),
        request.size.unwrap_or(entry.window_size),
        viewport,
    );

    state.windows.push(WindowRecord {
        id,
        app_type: request.app_type,
        title: request.title.unwrap_or_else(|| entry.title.to_string()),
        is_open: true,
        is_minimized: false,
        is_maximized: false,
        position,
        size,
        z_index,
    });
    state.active_window_id = Some(id);
    id
}

/// Removes a window from the registry.
///
/// When the removed window was active, focus moves to the most recently inserted survivor that
/// is not minimized (raising it). If every survivor is minimized, nothing is active.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))?;
    state.windows.remove(index);

    if state.active_window_id != Some(window_id) {
        return Ok(());
    }

    let successor = state
        .windows
        .iter()
        .rev()
        .find(|w| w.is_open && !w.is_minimized)
        .map(|w| w.id);
    match successor {
        Some(successor) => focus_window(state, successor),
        None => {
            state.active_window_id = None;
            Ok(())
        }
    }
}

/// Raises a window to the top of the stack, un-minimizes it and makes it active.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?;
    let z_index = allocate_z_index(state);
    let window = find_window_mut(state, window_id)?;
    window.z_index = z_index;
    window.is_minimized = false;
    state.active_window_id = Some(window_id);
    Ok(())
}

/// Toggles the minimized flag. Minimizing the active window leaves nothing active.
pub fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.is_minimized = !window.is_minimized;
    let minimized = window.is_minimized;
    if minimized && state.active_window_id == Some(window_id) {
        state.active_window_id = None;
    }
    Ok(())
}

/// Toggles the maximized flag.
///
/// Stored position and size are never touched, so un-maximizing shows them again. This relies on
/// nothing mutating geometry while maximized: drags are suppressed and no resize gesture exists.
pub fn maximize_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.is_maximized = !window.is_maximized;
    Ok(())
}

pub fn update_window_position(
    state: &mut DesktopState,
    window_id: WindowId,
    position: WindowPosition,
) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?.position = position;
    Ok(())
}

pub fn update_window_size(
    state: &mut DesktopState,
    window_id: WindowId,
    size: WindowSize,
) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?.size = size;
    Ok(())
}

/// Re-fits every open frame after the canvas changed size. Stored geometry of maximized windows
/// is fitted too, so restoring lands inside the new canvas.
pub fn fit_windows_to_viewport(state: &mut DesktopState, viewport: ViewportSize) {
    for window in state.windows.iter_mut().filter(|w| w.is_open) {
        let (position, size) =
            compositor::clamp_window_frame(window.position, window.size, viewport);
        window.position = position;
        window.size = size;
    }
}
