use axum::{Json, Router, extract::State, routing};
use catalog_core::MethodConstraints;
use http::StatusCode;

use crate::{
    dispatch::ApiError,
    dto::{CreateProduct, ProductView, UpdateProduct},
    extract::{PathParams, QueryParams, ValidatedJson},
    state::AppState,
};

pub fn product_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/products",
            routing::get(list_products).post(create_product).put(update_product),
        )
        // Static segments take priority over `{id}`
        .route("/api/v1/products/search", routing::get(search_products))
        .route("/api/v1/products/category", routing::get(products_by_category))
        .route(
            "/api/v1/products/{id}",
            routing::get(get_product).delete(delete_product),
        )
}

/// Rules shared by the name based lookups
fn name_rules(constraints: MethodConstraints, parameter: &str, value: &str) -> MethodConstraints {
    constraints.not_blank(parameter, value, "Must be present").size(
        parameter,
        value,
        3..=85,
        "Must be between 3 and 85 characters",
    )
}

fn views(entries: Vec<catalog_store::ProductEntry>) -> Json<Vec<ProductView>> {
    Json(entries.into_iter().map(ProductView::from).collect())
}

/// Handle `GET /api/v1/products`
async fn list_products(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let page = state.paging.read(&params)?;
    page.constrain(MethodConstraints::new("getAllProducts")).check()?;

    let products = state.store.products(page.page()).await;
    tracing::debug!(page_number = page.number, count = products.len(), "listed products");

    Ok(views(products))
}

/// Handle `GET /api/v1/products/{id}`
async fn get_product(
    State(state): State<AppState>,
    path: PathParams,
) -> Result<Json<ProductView>, ApiError> {
    let id: i64 = path.get("id")?;
    let entry = state.store.product(id).await?;

    Ok(Json(entry.into()))
}

/// Handle `GET /api/v1/products/search`
async fn search_products(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let name: String = params.required("name")?;
    let page = state.paging.read(&params)?;

    let constraints = name_rules(MethodConstraints::new("searchProducts"), "name", &name);
    page.constrain(constraints).check()?;

    let products = state.store.search_products(&name, page.page()).await;
    tracing::debug!(%name, count = products.len(), "searched products");

    Ok(views(products))
}

/// Handle `GET /api/v1/products/category`
async fn products_by_category(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let category_name: String = params.required("categoryName")?;
    let page = state.paging.read(&params)?;

    let constraints = name_rules(
        MethodConstraints::new("getProductsByCategoryName"),
        "categoryName",
        &category_name,
    );
    page.constrain(constraints).check()?;

    let products = state.store.products_in_category(&category_name, page.page()).await;
    tracing::debug!(%category_name, count = products.len(), "listed products in category");

    Ok(views(products))
}

/// Handle `POST /api/v1/products`
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateProduct>,
) -> Result<Json<ProductView>, ApiError> {
    let entry = state.store.create_product(body.into_draft()).await?;
    tracing::info!(product_id = entry.product.id, "product created");

    Ok(Json(entry.into()))
}

/// Handle `PUT /api/v1/products`
async fn update_product(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateProduct>,
) -> Result<Json<ProductView>, ApiError> {
    let (id, draft) = body.into_draft();
    let entry = state.store.update_product(id, draft).await?;
    tracing::info!(product_id = id, "product updated");

    Ok(Json(entry.into()))
}

/// Handle `DELETE /api/v1/products/{id}`
async fn delete_product(
    State(state): State<AppState>,
    path: PathParams,
) -> Result<StatusCode, ApiError> {
    let id: i64 = path.get("id")?;
    state.store.delete_product(id).await?;
    tracing::info!(product_id = id, "product deleted");

    Ok(StatusCode::NO_CONTENT)
}
