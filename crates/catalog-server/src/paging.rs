use catalog_config::CatalogConfig;
use catalog_core::{Failure, MethodConstraints};
use catalog_store::Page;

use crate::extract::QueryParams;

/// Page size defaults and limits applied to every listing endpoint
#[derive(Debug, Clone, Copy)]
pub struct Paging {
    default_size: i64,
    max_size: Option<i64>,
}

impl Paging {
    /// Read `pageNumber` and `pageSize` from the query string
    pub fn read(self, params: &QueryParams) -> Result<PageRequest, Failure> {
        Ok(PageRequest {
            number: params.optional_or("pageNumber", 0)?,
            size: params.optional_or("pageSize", self.default_size)?,
            max_size: self.max_size,
        })
    }
}

impl From<&CatalogConfig> for Paging {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            default_size: config.default_page_size,
            max_size: config.max_page_size,
        }
    }
}

/// Page coordinates as the client sent them, not yet checked
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
    max_size: Option<i64>,
}

impl PageRequest {
    /// Add the paging rules to an operation's constraints
    pub fn constrain(self, constraints: MethodConstraints) -> MethodConstraints {
        let constraints = constraints
            .positive_or_zero("pageNumber", self.number, "Must be greater than or equal to 0")
            .positive("pageSize", self.size, "Must be greater than 0");

        match self.max_size {
            Some(max) => constraints.at_most(
                "pageSize",
                self.size,
                max,
                &format!("Must be less than or equal to {max}"),
            ),
            None => constraints,
        }
    }

    /// Only meaningful once [`constrain`](Self::constrain) has passed
    pub fn page(self) -> Page {
        Page::new(
            usize::try_from(self.number).unwrap_or_default(),
            usize::try_from(self.size).unwrap_or_default(),
        )
    }
}
