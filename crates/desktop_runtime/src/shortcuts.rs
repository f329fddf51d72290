//! Global keyboard shortcut resolution.
//!
//! The keydown listener converts browser events into a [`KeyChord`]; resolution is pure so the
//! bindings can be tested natively.

use crate::{
    apps,
    model::{DesktopState, OpenWindowRequest},
    reducer::DesktopAction,
};

/// Keyboard event fields the shortcut table cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Event target is an `input` or `textarea`.
    pub in_text_field: bool,
}

impl KeyChord {
    fn command(&self) -> bool {
        (self.ctrl || self.meta) && !self.alt
    }
}

/// Maps a chord to the action it triggers in the current desktop state.
///
/// Returns `None` for unbound chords and for every chord typed into a text field.
pub fn resolve_shortcut(chord: &KeyChord, state: &DesktopState) -> Option<DesktopAction> {
    if chord.in_text_field {
        return None;
    }

    if chord.key == "Escape" && !chord.command() {
        if state.start_menu_open {
            return Some(DesktopAction::CloseStartMenu);
        }
        return close_active(state);
    }

    if !chord.command() {
        return None;
    }

    if chord.key.eq_ignore_ascii_case("w") {
        return close_active(state);
    }

    let digit = chord.key.parse::<u8>().ok()?;
    apps::shortcut_app(digit)
        .map(|app_type| DesktopAction::OpenWindow(OpenWindowRequest::new(app_type)))
}

fn close_active(state: &DesktopState) -> Option<DesktopAction> {
    state.active_window_id.map(|_| DesktopAction::CloseActiveWindow)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppType, WindowId};

    fn chord(key: &str) -> KeyChord {
        KeyChord {
            key: key.to_string(),
            ..KeyChord::default()
        }
    }

    fn ctrl(key: &str) -> KeyChord {
        KeyChord {
            ctrl: true,
            ..chord(key)
        }
    }

    fn with_active() -> DesktopState {
        DesktopState {
            active_window_id: Some(WindowId {
                app_type: AppType::Projects,
                serial: 3,
            }),
            ..DesktopState::default()
        }
    }

    #[test]
    fn digits_open_their_manifest_apps() {
        let state = DesktopState::default();
        let expected = [
            ("1", AppType::AboutMe),
            ("2", AppType::Projects),
            ("3", AppType::SkillsDashboard),
            ("4", AppType::Contact),
        ];
        for (key, app_type) in expected {
            assert_eq!(
                resolve_shortcut(&ctrl(key), &state),
                Some(DesktopAction::OpenWindow(OpenWindowRequest::new(app_type)))
            );
            let meta = KeyChord {
                meta: true,
                ..chord(key)
            };
            assert!(resolve_shortcut(&meta, &state).is_some());
        }
        assert_eq!(resolve_shortcut(&ctrl("7"), &state), None);
        assert_eq!(resolve_shortcut(&chord("1"), &state), None);
    }

    #[test]
    fn close_shortcuts_require_an_active_window() {
        let idle = DesktopState::default();
        assert_eq!(resolve_shortcut(&ctrl("w"), &idle), None);
        assert_eq!(resolve_shortcut(&chord("Escape"), &idle), None);

        let state = with_active();
        let close = Some(DesktopAction::CloseActiveWindow);
        assert_eq!(resolve_shortcut(&ctrl("w"), &state), close);
        assert_eq!(resolve_shortcut(&ctrl("W"), &state), close);
        assert_eq!(resolve_shortcut(&chord("Escape"), &state), close);
    }

    #[test]
    fn escape_closes_the_start_menu_before_any_window() {
        let mut state = with_active();
        state.start_menu_open = true;
        assert_eq!(
            resolve_shortcut(&chord("Escape"), &state),
            Some(DesktopAction::CloseStartMenu)
        );
    }

    #[test]
    fn typing_in_text_fields_is_never_intercepted() {
        let state = with_active();
        for key in ["Escape", "w", "1"] {
            let typed = KeyChord {
                in_text_field: true,
                ..ctrl(key)
            };
            assert_eq!(resolve_shortcut(&typed, &state), None);
        }
    }
}
