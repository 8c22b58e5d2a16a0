use std::collections::BTreeMap;

use catalog_core::DomainFailure;
use http::StatusCode;
use tokio::sync::RwLock;

use crate::{
    model::{Category, CategoryDraft, Product, ProductDraft, ProductEntry},
    page::Page,
};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    products: BTreeMap<i64, Product>,
    last_category_id: i64,
    last_product_id: i64,
}

impl Tables {
    fn category(&self, id: i64) -> Result<&Category, DomainFailure> {
        self.categories.get(&id).ok_or_else(DomainFailure::not_found)
    }

    fn entry(&self, product: &Product) -> Option<ProductEntry> {
        let category = self.categories.get(&product.category_id)?;
        Some(ProductEntry {
            product: product.clone(),
            category: category.clone(),
        })
    }

    fn entries<'a>(
        &'a self,
        products: impl Iterator<Item = &'a Product> + 'a,
    ) -> impl Iterator<Item = ProductEntry> + 'a {
        products.filter_map(|product| self.entry(product))
    }
}

/// Categories and products kept in id order
#[derive(Debug, Default)]
pub struct CatalogStore {
    tables: RwLock<Tables>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn categories(&self, page: Page) -> Vec<Category> {
        let tables = self.tables.read().await;
        page.slice(tables.categories.values().cloned())
    }

    pub async fn category(&self, id: i64) -> Result<Category, DomainFailure> {
        let tables = self.tables.read().await;
        tables.category(id).cloned()
    }

    pub async fn create_category(&self, draft: CategoryDraft) -> Category {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;

        let category = Category {
            id: tables.last_category_id,
            name: draft.name,
            description: draft.description,
            logo_url: draft.logo_url,
        };
        tables.categories.insert(category.id, category.clone());

        tracing::debug!(category_id = category.id, "category created");
        category
    }

    pub async fn update_category(&self, id: i64, draft: CategoryDraft) -> Result<Category, DomainFailure> {
        let mut tables = self.tables.write().await;
        let category = tables.categories.get_mut(&id).ok_or_else(DomainFailure::not_found)?;

        category.name = draft.name;
        category.description = draft.description;
        category.logo_url = draft.logo_url;

        Ok(category.clone())
    }

    /// Remove a category that no product refers to
    pub async fn delete_category(&self, id: i64) -> Result<(), DomainFailure> {
        let mut tables = self.tables.write().await;
        tables.category(id)?;

        if tables.products.values().any(|p| p.category_id == id) {
            return Err(DomainFailure::new(
                StatusCode::CONFLICT,
                "Entity in use",
                "Category has products",
            ));
        }

        tables.categories.remove(&id);
        tracing::debug!(category_id = id, "category deleted");
        Ok(())
    }

    pub async fn products(&self, page: Page) -> Vec<ProductEntry> {
        let tables = self.tables.read().await;
        page.slice(tables.entries(tables.products.values()))
    }

    pub async fn product(&self, id: i64) -> Result<ProductEntry, DomainFailure> {
        let tables = self.tables.read().await;
        tables
            .products
            .get(&id)
            .and_then(|product| tables.entry(product))
            .ok_or_else(DomainFailure::not_found)
    }

    /// Products whose name contains `name`, ignoring case
    pub async fn search_products(&self, name: &str, page: Page) -> Vec<ProductEntry> {
        let needle = name.to_lowercase();
        let tables = self.tables.read().await;
        let matching = tables
            .products
            .values()
            .filter(|product| product.name.to_lowercase().contains(&needle));

        page.slice(tables.entries(matching))
    }

    /// Products in the category named `category_name`, ignoring case
    pub async fn products_in_category(&self, category_name: &str, page: Page) -> Vec<ProductEntry> {
        let wanted = category_name.to_lowercase();
        let tables = self.tables.read().await;
        let matching = tables.products.values().filter(|product| {
            tables
                .categories
                .get(&product.category_id)
                .is_some_and(|category| category.name.to_lowercase() == wanted)
        });

        page.slice(tables.entries(matching))
    }

    pub async fn create_product(&self, draft: ProductDraft) -> Result<ProductEntry, DomainFailure> {
        let mut tables = self.tables.write().await;
        let category = tables.category(draft.category_id)?.clone();
        tables.last_product_id += 1;

        let product = Product {
            id: tables.last_product_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            category_id: category.id,
        };
        tables.products.insert(product.id, product.clone());

        tracing::debug!(product_id = product.id, category_id = category.id, "product created");
        Ok(ProductEntry { product, category })
    }

    pub async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<ProductEntry, DomainFailure> {
        let mut tables = self.tables.write().await;
        let category = tables.category(draft.category_id)?.clone();
        let product = tables.products.get_mut(&id).ok_or_else(DomainFailure::not_found)?;

        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.stock_quantity = draft.stock_quantity;
        product.category_id = category.id;

        Ok(ProductEntry {
            product: product.clone(),
            category,
        })
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), DomainFailure> {
        let mut tables = self.tables.write().await;
        tables.products.remove(&id).ok_or_else(DomainFailure::not_found)?;

        tracing::debug!(product_id = id, "product deleted");
        Ok(())
    }
}
