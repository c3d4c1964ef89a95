use std::fmt::Write as _;

use tokio::sync::watch;
use tracing::warn;

use crate::client::CatalogClient;
use crate::models::product::{format_price, Product};

pub const LOAD_FAILED: &str = "Failed to load products";

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Error(String),
    Loaded(Vec<Product>),
}

pub struct ProductListView {
    client: CatalogClient,
    state: ListState,
}

impl ProductListView {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetches the full list once and settles into `Loaded` or `Error`.
    pub async fn load(&mut self) {
        self.state = ListState::Loading;
        self.state = match self.client.fetch_all().await {
            Ok(products) => ListState::Loaded(products),
            Err(e) => {
                warn!(error = %e, "Loading product list failed");
                ListState::Error(LOAD_FAILED.to_string())
            }
        };
    }

    /// Waits for the next change on `changes` and reloads.
    ///
    /// Returns `false` once the signal is gone and no further changes can arrive.
    pub async fn refresh_on_change(&mut self, changes: &mut watch::Receiver<u64>) -> bool {
        if changes.changed().await.is_err() {
            return false;
        }
        self.load().await;
        true
    }

    pub fn render(&self) -> String {
        match &self.state {
            ListState::Loading => "Loading products...\n".to_string(),
            ListState::Error(msg) => format!("Error: {msg}\n"),
            ListState::Loaded(products) => {
                let mut out = String::from("Products\n");
                for product in products {
                    out.push('\n');
                    out.push_str(&render_card(product));
                }
                out
            }
        }
    }
}

/// One product card: name, description, then the formatted price.
pub fn render_card(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "  {}", product.description);
    let _ = writeln!(out, "  {}", format_price(product.price));
    out
}
