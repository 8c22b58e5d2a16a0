/// A stored category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo_url: String,
}

/// Category fields supplied by a client
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub logo_url: String,
}

/// A stored product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub category_id: i64,
}

/// Product fields supplied by a client
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub category_id: i64,
}

/// A product joined with its category
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEntry {
    pub product: Product,
    pub category: Category,
}
