use crate::storage::local_prefs::WebPrefsStore;

/// Builds the preference store used by the desktop runtime in the browser.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}
