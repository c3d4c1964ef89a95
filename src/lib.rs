//! Product catalog: an in-memory store served over HTTP, a typed client for
//! it, and headless presentation components driven by that client.

pub mod app;
pub mod client;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod ui;
