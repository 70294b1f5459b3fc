//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they only depend on
//! the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CommentFeed, HeroCatalogueQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Hero catalogue queries.
    pub heroes: Arc<dyn HeroCatalogueQuery>,
    /// Comment creation and listing.
    pub comments: Arc<dyn CommentFeed>,
}

impl HttpState {
    /// Bundle the port implementations handlers depend on.
    pub fn new(heroes: Arc<dyn HeroCatalogueQuery>, comments: Arc<dyn CommentFeed>) -> Self {
        Self { heroes, comments }
    }
}
