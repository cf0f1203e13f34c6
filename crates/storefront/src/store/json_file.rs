//! File-backed store: one JSON document per logical key.
//!
//! The on-disk layout mirrors browser local storage: a flat directory with
//! `<key>.json` files holding JSON-serialized text. Writes go through a
//! temporary file and rename so a crash mid-write leaves the previous
//! document intact rather than a truncated one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{StateStore, StoreError};

/// Store backed by JSON files in a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory holding the documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;

    use fresh_bowl_core::{CartLine, Price, ProductId, SessionRecord, UserId};

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: Price::from_minor(price),
            image_url: None,
            quantity,
        }
    }

    #[test]
    fn cart_round_trip_is_byte_stable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).expect("open");

        let lines = vec![line("ens-01", 4990, 2), line("ens-03", 5990, 1)];
        store.save_cart(&lines).expect("save");

        let first = store.get_raw(keys::CART).expect("get").expect("present");
        let loaded = store.load_cart().expect("load");
        assert_eq!(loaded, lines);

        // write(read()) leaves the stored text unchanged
        store.save_cart(&loaded).expect("save again");
        let second = store.get_raw(keys::CART).expect("get").expect("present");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_cart_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).expect("open");
        assert!(store.load_cart().expect("load").is_empty());
    }

    #[test]
    fn corrupt_cart_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).expect("open");

        store
            .put_raw(keys::CART, "definitely {not json")
            .expect("put");
        assert!(store.load_cart().expect("load").is_empty());
    }

    #[test]
    fn clear_cart_removes_the_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).expect("open");

        store.save_cart(&[line("ens-01", 4990, 1)]).expect("save");
        store.clear_cart().expect("clear");
        assert!(store.get_raw(keys::CART).expect("get").is_none());

        // clearing again is a no-op
        store.clear_cart().expect("clear again");
    }

    #[test]
    fn session_presence_tracks_login_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).expect("open");

        assert!(store.load_session().expect("load").is_none());

        let record = SessionRecord {
            user_id: UserId::new("u-1"),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: Some("+56 9 1234 5678".to_owned()),
            token: Some("tok".to_owned()),
        };
        store.save_session(&record).expect("save");
        assert_eq!(store.load_session().expect("load"), Some(record));

        store.clear_session().expect("clear");
        assert!(store.load_session().expect("load").is_none());
    }

    #[test]
    fn corrupt_session_reads_as_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).expect("open");

        store.put_raw(keys::SESSION, "[1, 2, 3]").expect("put");
        assert!(store.load_session().expect("load").is_none());
    }
}
