//! Window frame geometry, stacking order, and the title-bar drag protocol.
//!
//! Everything here is pure so the compositor rules can be exercised without a DOM.

use crate::model::{
    DesktopState, DragState, PointerPosition, ViewportSize, WindowPosition, WindowRecord,
    WindowSize, TASKBAR_HEIGHT_PX,
};

/// Rendered frame rectangle for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Resolves the on-screen rectangle. Maximized windows fill the canvas above the taskbar band.
pub fn frame_geometry(record: &WindowRecord, viewport: ViewportSize) -> FrameGeometry {
    if record.is_maximized {
        FrameGeometry {
            x: 0,
            y: 0,
            width: viewport.width.max(0),
            height: (viewport.height - TASKBAR_HEIGHT_PX).max(0),
        }
    } else {
        FrameGeometry {
            x: record.position.x,
            y: record.position.y,
            width: record.size.width,
            height: record.size.height,
        }
    }
}

/// Inline style for a window frame element.
pub fn frame_style(record: &WindowRecord, viewport: ViewportSize) -> String {
    let geometry = frame_geometry(record, viewport);
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        geometry.x, geometry.y, geometry.width, geometry.height, record.z_index
    )
}

/// Open windows ordered back-to-front by z-index.
pub fn stacked_windows(state: &DesktopState) -> Vec<&WindowRecord> {
    let mut windows: Vec<_> = state.windows.iter().filter(|w| w.is_open).collect();
    windows.sort_by_key(|w| w.z_index);
    windows
}

/// Keeps a frame inside the viewport, above the taskbar band.
///
/// When the window is larger than the available range, the axis pins to 0.
pub fn clamp_window_position(
    candidate: WindowPosition,
    size: WindowSize,
    viewport: ViewportSize,
) -> WindowPosition {
    let max_x = (viewport.width - size.width).max(0);
    let max_y = (viewport.height - size.height - TASKBAR_HEIGHT_PX).max(0);
    WindowPosition {
        x: candidate.x.clamp(0, max_x),
        y: candidate.y.clamp(0, max_y),
    }
}

/// Fits a frame into the canvas: the size shrinks to the space above the taskbar band, then the
/// position is clamped. A collapsed viewport leaves the size alone.
pub fn clamp_window_frame(
    position: WindowPosition,
    size: WindowSize,
    viewport: ViewportSize,
) -> (WindowPosition, WindowSize) {
    let available_height = viewport.height - TASKBAR_HEIGHT_PX;
    let size = WindowSize {
        width: if viewport.width > 0 {
            size.width.min(viewport.width)
        } else {
            size.width
        },
        height: if available_height > 0 {
            size.height.min(available_height)
        } else {
            size.height
        },
    };
    (clamp_window_position(position, size, viewport), size)
}

/// Drag state entered on title-bar pointer-down. Maximized windows are not draggable.
pub fn begin_drag(window: &WindowRecord, pointer: PointerPosition) -> DragState {
    if window.is_maximized {
        return DragState::Idle;
    }
    DragState::Dragging {
        window_id: window.id,
        offset: PointerPosition {
            x: pointer.x - window.position.x,
            y: pointer.y - window.position.y,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppType, WindowId};

    fn record(serial: u64, z_index: u32) -> WindowRecord {
        WindowRecord {
            id: WindowId {
                app_type: AppType::Projects,
                serial,
            },
            app_type: AppType::Projects,
            title: "My Projects".to_string(),
            is_open: true,
            is_minimized: false,
            is_maximized: false,
            position: WindowPosition { x: 40, y: 30 },
            size: WindowSize {
                width: 800,
                height: 600,
            },
            z_index,
        }
    }

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1440,
        height: 900,
    };

    #[test]
    fn maximized_frames_fill_the_canvas_above_the_taskbar() {
        let mut window = record(1, 1000);
        assert_eq!(
            frame_geometry(&window, VIEWPORT),
            FrameGeometry {
                x: 40,
                y: 30,
                width: 800,
                height: 600
            }
        );

        window.is_maximized = true;
        assert_eq!(
            frame_geometry(&window, VIEWPORT),
            FrameGeometry {
                x: 0,
                y: 0,
                width: 1440,
                height: 900 - TASKBAR_HEIGHT_PX
            }
        );
        assert_eq!(
            frame_style(&window, VIEWPORT),
            "left:0px;top:0px;width:1440px;height:836px;z-index:1000;"
        );
    }

    #[test]
    fn stacking_orders_by_z_and_keeps_minimized_mounted() {
        let mut state = DesktopState::default();
        state.windows = vec![record(1, 1005), record(2, 1001), record(3, 1003)];
        state.windows[2].is_minimized = true;

        let stacked: Vec<u64> = stacked_windows(&state).iter().map(|w| w.id.serial).collect();
        assert_eq!(stacked, vec![2, 3, 1]);
    }

    #[test]
    fn frames_shrink_and_move_to_fit_the_canvas() {
        let small = ViewportSize {
            width: 640,
            height: 480,
        };
        let (position, size) = clamp_window_frame(
            WindowPosition { x: 150, y: 120 },
            WindowSize {
                width: 800,
                height: 600,
            },
            small,
        );
        assert_eq!(
            size,
            WindowSize {
                width: 640,
                height: 480 - TASKBAR_HEIGHT_PX
            }
        );
        assert_eq!(position, WindowPosition { x: 0, y: 0 });

        let fitting = WindowSize {
            width: 500,
            height: 300,
        };
        assert_eq!(
            clamp_window_frame(WindowPosition { x: 20, y: 30 }, fitting, small),
            (WindowPosition { x: 20, y: 30 }, fitting)
        );
    }

    #[test]
    fn clamp_keeps_frame_inside_viewport() {
        let size = WindowSize {
            width: 500,
            height: 400,
        };
        assert_eq!(
            clamp_window_position(WindowPosition { x: -50, y: -10 }, size, VIEWPORT),
            WindowPosition { x: 0, y: 0 }
        );
        let far = clamp_window_position(WindowPosition { x: 5000, y: 5000 }, size, VIEWPORT);
        assert_eq!(
            far,
            WindowPosition {
                x: 940,
                y: 900 - 400 - TASKBAR_HEIGHT_PX
            }
        );
        assert_eq!(clamp_window_position(far, size, VIEWPORT), far);
    }

    #[test]
    fn clamp_pins_to_origin_when_window_exceeds_viewport() {
        let size = WindowSize {
            width: 2000,
            height: 2000,
        };
        assert_eq!(
            clamp_window_position(WindowPosition { x: 120, y: 80 }, size, VIEWPORT),
            WindowPosition { x: 0, y: 0 }
        );
    }

    #[test]
    fn begin_drag_records_pointer_offset() {
        let window = record(7, 1000);
        assert_eq!(
            begin_drag(&window, PointerPosition { x: 100, y: 45 }),
            DragState::Dragging {
                window_id: window.id,
                offset: PointerPosition { x: 60, y: 15 },
            }
        );
    }
}
