use gloo_storage::{LocalStorage, Storage};
use shared::{KeyValueStore, StorageError};

/// `localStorage` adapter. Goes through the raw web storage so values keep the
/// exact text layout older sessions wrote (the date key is not JSON-quoted).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_message(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: js_message(e),
            })
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_message(e),
            })
    }
}
