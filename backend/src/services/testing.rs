//! Shared setup for service tests.

use crate::dataset::fixtures;
use crate::dataset::state::DatasetState;
use actix_web::web;

/// Fixture dataset wrapped the same way `main.rs` wraps the real one.
pub fn state() -> web::Data<DatasetState> {
    web::Data::new(fixtures::state())
}
