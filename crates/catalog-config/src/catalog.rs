use serde::Deserialize;

/// Pagination limits for list and search endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Page size used when the request does not give one
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
    /// Largest page size a request may ask for, unbounded when unset
    #[serde(default)]
    pub max_page_size: Option<i64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: None,
        }
    }
}

const fn default_page_size() -> i64 {
    10
}
