//! Repository for the persisted cart record.
//!
//! These are the record-level operations over the store port: read,
//! write-through mutations, and the recomputed total. The interactive
//! widget goes through [`crate::ui::CartController`] instead, which keeps
//! the cart in memory between mutations; this repository always reads the
//! persisted state fresh, so it is safe to call from anywhere.

use fresh_bowl_core::{Cart, CartLine, Price, Product, ProductId};

use crate::store::{StateStore, StoreError};

/// Repository for cart record operations.
pub struct CartRepository<'a> {
    store: &'a dyn StateStore,
}

impl<'a> CartRepository<'a> {
    /// Create a repository over a store.
    #[must_use]
    pub const fn new(store: &'a dyn StateStore) -> Self {
        Self { store }
    }

    /// Read the persisted cart lines; empty if absent or corrupt.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for medium failures.
    pub fn read(&self) -> Result<Vec<CartLine>, StoreError> {
        self.store.load_cart()
    }

    /// Persist `lines` and hand them back, enabling chaining.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn write(&self, lines: Vec<CartLine>) -> Result<Vec<CartLine>, StoreError> {
        self.store.save_cart(&lines)?;
        Ok(lines)
    }

    /// Delete the persisted cart and return the (empty) result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium fails.
    pub fn clear(&self) -> Result<Vec<CartLine>, StoreError> {
        self.store.clear_cart()?;
        Ok(Vec::new())
    }

    /// Add `quantity` units of a product to the persisted cart.
    ///
    /// Finds the existing line by product identifier and increments it,
    /// or appends a new line; persists and returns the updated list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if reading or persisting fails.
    pub fn add(&self, product: &Product, quantity: u32) -> Result<Vec<CartLine>, StoreError> {
        let mut cart = Cart::from_lines(self.read()?);
        cart.add_units(product, quantity);
        self.write(cart.lines().to_vec())
    }

    /// Remove the line for a product from the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if reading or persisting fails.
    pub fn remove(&self, id: &ProductId) -> Result<Vec<CartLine>, StoreError> {
        let mut cart = Cart::from_lines(self.read()?);
        cart.remove(id);
        self.write(cart.lines().to_vec())
    }

    /// Grand total over the persisted cart, recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if reading fails.
    pub fn total(&self) -> Result<Price, StoreError> {
        Ok(Cart::from_lines(self.read()?).total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    use fresh_bowl_core::CategoryId;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_minor(price),
            description: None,
            image_url: None,
            category_id: Some(CategoryId::new("cat-01")),
            active: true,
            sold_out: false,
        }
    }

    #[test]
    fn add_merges_lines_by_product_id() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);

        repo.add(&product("ens-01", 4990), 1).expect("add");
        let lines = repo.add(&product("ens-01", 4990), 2).expect("add");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().expect("line").quantity, 3);
    }

    #[test]
    fn write_returns_what_it_persisted() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);

        let written = repo
            .add(&product("ens-02", 5490), 1)
            .expect("add");
        assert_eq!(repo.read().expect("read"), written);
    }

    #[test]
    fn total_recomputes_from_persisted_state() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);

        repo.add(&product("ens-01", 4990), 2).expect("add");
        repo.add(&product("ens-03", 5990), 1).expect("add");
        assert_eq!(repo.total().expect("total").minor(), 15970);

        repo.remove(&ProductId::new("ens-01")).expect("remove");
        assert_eq!(repo.total().expect("total").minor(), 5990);

        // Idempotent under repeated reads
        assert_eq!(repo.total().expect("total").minor(), 5990);
    }

    #[test]
    fn clear_empties_the_record() {
        let store = MemoryStore::new();
        let repo = CartRepository::new(&store);

        repo.add(&product("ens-01", 4990), 1).expect("add");
        assert!(repo.clear().expect("clear").is_empty());
        assert!(repo.read().expect("read").is_empty());
        assert_eq!(repo.total().expect("total"), Price::ZERO);
    }
}
