// src/dtos/product.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /products`. Any `id` sent by the caller is accepted and ignored.
/// Missing fields default to empty text and a zero price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}
