use std::sync::Arc;

use catalog_store::CatalogStore;

use crate::paging::Paging;

/// Shared state handed to every catalog handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub paging: Paging,
}
