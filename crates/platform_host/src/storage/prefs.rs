//! Key/value preference storage used for small user settings such as the desktop theme.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future returned by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service storing preference blobs as JSON text under string keys.
///
/// Stores are single-threaded (`Rc`-shared on the UI thread), so futures are not `Send`.
pub trait PrefsStore {
    /// Loads the raw JSON text stored under `key`, if any.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores raw JSON text under `key`, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`. Removing a missing key succeeds.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store. Clones share the same backing map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw value for `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that persists nothing. Loads always read as absent.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

/// Loads and deserializes a typed preference value.
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON does not match `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("decode `{key}`: {e}"))?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| format!("encode `{key}`: {e}"))?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Palette {
        mode: String,
        accent: String,
    }

    #[test]
    fn memory_store_saves_replaces_and_deletes() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("theme", "{\"a\":1}")).expect("save");
        block_on(store_obj.save_pref("theme", "{\"a\":2}")).expect("overwrite");
        assert_eq!(
            block_on(store_obj.load_pref("theme")).expect("load"),
            Some("{\"a\":2}".to_string())
        );

        block_on(store_obj.delete_pref("theme")).expect("delete");
        block_on(store_obj.delete_pref("theme")).expect("delete missing key");
        assert_eq!(block_on(store_obj.load_pref("theme")).expect("load"), None);
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        block_on(store.save_pref("k", "true")).expect("save");
        assert_eq!(other.raw("k"), Some("true".to_string()));
    }

    #[test]
    fn typed_helpers_encode_and_decode_json() {
        let store = MemoryPrefsStore::default();
        let value = Palette {
            mode: "dark".to_string(),
            accent: "#FF9500".to_string(),
        };

        block_on(save_pref_with(&store, "palette", &value)).expect("save typed");
        let loaded: Option<Palette> =
            block_on(load_pref_with(&store, "palette")).expect("load typed");
        assert_eq!(loaded, Some(value));

        let missing: Option<Palette> =
            block_on(load_pref_with(&store, "absent")).expect("load missing");
        assert_eq!(missing, None);
    }

    #[test]
    fn noop_store_forgets_everything() {
        let store = NoopPrefsStore;
        block_on(store.save_pref("theme", "{}")).expect("save");
        assert_eq!(block_on(store.load_pref("theme")).expect("load"), None);
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("palette", "{not json")).expect("save raw");

        let err = block_on(load_pref_with::<_, Palette>(&store, "palette"))
            .expect_err("malformed payload should fail");
        assert!(err.contains("palette"), "error should name the key: {err}");
    }
}
