//! Typed async client for the catalog HTTP API.
//!
//! Non-success responses collapse into one failure per operation; transport
//! errors are passed through untouched so callers can tell "server said no"
//! apart from "server unreachable".

mod error;

pub use error::ClientError;

use tracing::debug;

use crate::dtos::product::CreateProductRequest;
use crate::models::product::Product;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5219/api";

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Reuses an existing `reqwest::Client`, e.g. one with a caller-imposed timeout.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.url("/products");
        debug!(%url, "Fetching products");
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "Product list request rejected");
            return Err(ClientError::FetchProducts);
        }
        Ok(resp.json().await?)
    }

    pub async fn fetch_one(&self, id: i64) -> Result<Product, ClientError> {
        let url = self.url(&format!("/products/{id}"));
        debug!(%url, "Fetching product");
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), id, "Product request rejected");
            return Err(ClientError::FetchProduct);
        }
        Ok(resp.json().await?)
    }

    pub async fn create(&self, candidate: &CreateProductRequest) -> Result<Product, ClientError> {
        let url = self.url("/products");
        debug!(%url, name = %candidate.name, "Creating product");
        // `.json()` sets `Content-Type: application/json`.
        let resp = self.http.post(url).json(candidate).send().await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "Create request rejected");
            return Err(ClientError::CreateProduct);
        }
        Ok(resp.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
