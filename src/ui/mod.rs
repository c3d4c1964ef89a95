//! Headless presentation components.
//!
//! The list view and the creation form never share state directly: the form
//! bumps a [`ChangeSignal`] after a successful create and the list view
//! re-fetches when it sees the version move.

mod form;
mod list;
mod signal;

pub use form::{FormState, ProductForm};
pub use list::{render_card, ListState, ProductListView};
pub use signal::ChangeSignal;
