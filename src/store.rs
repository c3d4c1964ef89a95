//! In-memory product catalog.
//!
//! The store is the only owner of the product sequence and of id assignment.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::dtos::product::CreateProductRequest;
use crate::models::product::Product;

#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// An empty catalog. The first product created gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the server starts with.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// A catalog holding `products` as given. If one of them already has
    /// `i64::MAX` as its id, every later `create` returns `None`.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().collect()),
        }
    }

    /// All products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// Appends a product built from `candidate`, assigning `max(id) + 1`.
    /// Returns `None` only when no id above the current max is left.
    ///
    /// The write lock is held from reading the max id through the append, so
    /// concurrent creations never observe the same max.
    pub fn create(&self, candidate: CreateProductRequest) -> Option<Product> {
        let mut products = self.write();
        let max = products.iter().map(|p| p.id).max().unwrap_or(0);
        let Some(id) = max.checked_add(1) else {
            warn!(max, "Product id space exhausted");
            return None;
        };
        if let Some(ignored) = candidate.id {
            debug!(ignored, assigned = id, "Dropping client-supplied product id");
        }
        let product = Product {
            id,
            name: candidate.name,
            price: candidate.price,
            description: candidate.description,
        };
        products.push(product.clone());
        Some(product)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers only ever push a fully built product, so a poisoned lock still
    // guards a consistent sequence.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
            description: "High-performance laptop".to_string(),
        },
        Product {
            id: 2,
            name: "Mouse".to_string(),
            price: 29.99,
            description: "Wireless optical mouse".to_string(),
        },
        Product {
            id: 3,
            name: "Keyboard".to_string(),
            price: 79.99,
            description: "Mechanical gaming keyboard".to_string(),
        },
    ]
}
