//! Request bodies and response views
//!
//! Required fields are `Option` so that an absent field is reported by the
//! `required` rule instead of failing deserialization.

use catalog_store::{Category, CategoryDraft, ProductDraft, ProductEntry};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Strictly greater than zero, however small
fn positive_price<T: std::borrow::Borrow<f64>>(price: T) -> Result<(), ValidationError> {
    if *price.borrow() > 0.0 {
        return Ok(());
    }

    let mut error = ValidationError::new("positive");
    error.message = Some("Must be positive".into());
    Err(error)
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 85, message = "Must be between 3 and 85 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 255, message = "Must be between 3 and 255 characters")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 255, message = "Must be between 3 and 255 characters")
    )]
    pub logo_url: Option<String>,
}

impl CreateCategory {
    pub fn into_draft(self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            logo_url: self.logo_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[validate(required(message = "Must not be null"))]
    pub id: Option<i64>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 85, message = "Must be between 3 and 85 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 255, message = "Must be between 3 and 255 characters")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 255, message = "Must be between 3 and 255 characters")
    )]
    pub logo_url: Option<String>,
}

impl UpdateCategory {
    pub fn into_draft(self) -> (i64, CategoryDraft) {
        let draft = CategoryDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            logo_url: self.logo_url.unwrap_or_default(),
        };
        (self.id.unwrap_or_default(), draft)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 85, message = "Must be between 3 and 85 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 255, message = "Must be between 3 and 255 characters")
    )]
    pub description: Option<String>,
    #[validate(required(message = "Must not be null"), custom = "positive_price")]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Must be positive"))]
    pub stock_quantity: i32,
    #[validate(required(message = "Must not be null"))]
    pub category_id: Option<i64>,
}

impl CreateProduct {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            stock_quantity: self.stock_quantity,
            category_id: self.category_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(required(message = "Must not be null"))]
    pub id: Option<i64>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 85, message = "Must be between 3 and 85 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Must not be null"),
        length(min = 3, max = 255, message = "Must be between 3 and 255 characters")
    )]
    pub description: Option<String>,
    #[validate(required(message = "Must not be null"), custom = "positive_price")]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Must be positive"))]
    pub stock_quantity: i32,
    #[validate(required(message = "Must not be null"))]
    pub category_id: Option<i64>,
}

impl UpdateProduct {
    pub fn into_draft(self) -> (i64, ProductDraft) {
        let draft = ProductDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            stock_quantity: self.stock_quantity,
            category_id: self.category_id.unwrap_or_default(),
        };
        (self.id.unwrap_or_default(), draft)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo_url: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            logo_url: category.logo_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: CategoryView,
}

impl From<ProductEntry> for ProductView {
    fn from(entry: ProductEntry) -> Self {
        let ProductEntry { product, category } = entry;
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
            category: category.into(),
        }
    }
}
