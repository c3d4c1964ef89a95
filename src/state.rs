// src/state.rs
use std::sync::Arc;

use crate::store::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    /// Prefix the API is mounted under, used to build `Location` headers.
    pub base_path: Arc<str>,
}

impl AppState {
    pub fn new(catalog: CatalogStore, base_path: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            base_path: Arc::from(base_path.trim_end_matches('/')),
        }
    }
}
