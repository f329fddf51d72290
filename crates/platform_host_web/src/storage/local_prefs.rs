//! `localStorage`-backed preference store.
//!
//! The browser API is synchronous; the async [`PrefsStore`] methods resolve immediately.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Reads the raw JSON text for `key`. Missing storage reads as an absent value.
    pub fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Writes raw JSON text under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or rejects the write (quota, privacy
    /// mode).
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Removes `key` from localStorage.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the removal fails.
    pub fn delete_json(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load_json(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_json(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete_json(key) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_fallback_reads_empty_and_accepts_writes() {
        let store = WebPrefsStore;
        block_on(store.save_pref("portfolio-os-theme", "{}")).expect("save");
        assert_eq!(block_on(store.load_pref("portfolio-os-theme")).expect("load"), None);
        block_on(store.delete_pref("portfolio-os-theme")).expect("delete");
    }
}
