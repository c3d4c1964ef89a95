use std::fmt::Write as _;

use tracing::{info, warn};

use crate::client::CatalogClient;
use crate::dtos::product::CreateProductRequest;
use crate::models::product::Product;

use super::ChangeSignal;

pub const CREATE_FAILED: &str = "Failed to create product";

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Idle,
    Creating,
    Failed(String),
}

/// Creation form. Field values are kept as typed text until submit.
pub struct ProductForm {
    client: CatalogClient,
    changes: ChangeSignal,
    pub name: String,
    pub price: String,
    pub description: String,
    state: FormState,
}

impl ProductForm {
    pub fn new(client: CatalogClient, changes: ChangeSignal) -> Self {
        Self {
            client,
            changes,
            name: String::new(),
            price: String::new(),
            description: String::new(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.state == FormState::Creating
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submit_disabled() {
            "Creating..."
        } else {
            "Add Product"
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Submits the current fields. On success the fields are cleared and the
    /// change signal is bumped; on failure the fields are kept.
    pub async fn submit(&mut self) -> Option<Product> {
        let candidate = self.begin_submit()?;
        let result = self.client.create(&candidate).await;
        self.finish_submit(result)
    }

    /// Moves into `Creating` and builds the candidate. Returns `None` if a
    /// submit is already pending or the price does not parse.
    pub fn begin_submit(&mut self) -> Option<CreateProductRequest> {
        if self.is_submit_disabled() {
            return None;
        }
        self.state = FormState::Creating;

        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Some(CreateProductRequest::new(
                self.name.clone(),
                price,
                self.description.clone(),
            )),
            _ => {
                warn!(price = %self.price, "Unparseable price");
                self.state = FormState::Failed(CREATE_FAILED.to_string());
                None
            }
        }
    }

    pub fn finish_submit<E: std::fmt::Display>(&mut self, result: Result<Product, E>) -> Option<Product> {
        match result {
            Ok(product) => {
                info!(id = product.id, "Product created from form");
                self.name.clear();
                self.price.clear();
                self.description.clear();
                self.state = FormState::Idle;
                self.changes.bump();
                Some(product)
            }
            Err(e) => {
                warn!(error = %e, "Creating product from form failed");
                self.state = FormState::Failed(CREATE_FAILED.to_string());
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Add New Product\n");
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Price: {}", self.price);
        let _ = writeln!(out, "Description: {}", self.description);
        if let Some(msg) = self.error_message() {
            let _ = writeln!(out, "{msg}");
        }
        let _ = writeln!(out, "[{}]", self.submit_label());
        out
    }
}
