//! Shared application state for the web server.

use std::sync::Arc;

use biosig_catalog::Catalog;
use biosig_common::Result;

use crate::render::Templates;

/// Shared state injected into every Axum handler. Read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub templates: Templates,
}

impl AppState {
    /// State over the compiled-in reference dataset.
    pub fn new() -> Result<Self> {
        Self::with_catalog(Catalog::reference())
    }

    pub fn with_catalog(catalog: Catalog) -> Result<Self> {
        Ok(Self {
            catalog,
            templates: Templates::new()?,
        })
    }
}

pub type SharedState = Arc<AppState>;
