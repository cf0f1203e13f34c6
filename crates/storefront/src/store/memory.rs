//! In-memory store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{StateStore, StoreError};

/// Store holding raw JSON documents in a mutex-guarded map.
///
/// Useful in tests: documents can be seeded with deliberately corrupt
/// text to exercise the degradation contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock means a panic mid-insert on a plain HashMap;
        // the map itself is still consistent, so keep serving it.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StateStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;

    use fresh_bowl_core::{CartLine, Price, ProductId};

    #[test]
    fn non_json_cart_text_loads_as_empty_without_error() {
        let store = MemoryStore::new();
        store.put_raw(keys::CART, "oops not json").expect("put");
        assert!(store.load_cart().expect("load").is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let store = MemoryStore::new();
        let lines = vec![
            CartLine {
                product_id: ProductId::new("ens-02"),
                name: "Quinoa Power".to_owned(),
                unit_price: Price::from_minor(5490),
                image_url: None,
                quantity: 1,
            },
            CartLine {
                product_id: ProductId::new("ens-01"),
                name: "César Clásica".to_owned(),
                unit_price: Price::from_minor(4990),
                image_url: None,
                quantity: 3,
            },
        ];
        store.save_cart(&lines).expect("save");
        assert_eq!(store.load_cart().expect("load"), lines);
    }
}
