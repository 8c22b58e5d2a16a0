use axum::{Json, Router, extract::State, routing};
use catalog_core::MethodConstraints;
use http::StatusCode;

use crate::{
    dispatch::ApiError,
    dto::{CategoryView, CreateCategory, UpdateCategory},
    extract::{PathParams, QueryParams, ValidatedJson},
    state::AppState,
};

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/categories",
            routing::get(list_categories)
                .post(create_category)
                .put(update_category),
        )
        .route(
            "/api/v1/categories/{id}",
            routing::get(get_category).delete(delete_category),
        )
}

/// Handle `GET /api/v1/categories`
async fn list_categories(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Vec<CategoryView>>, ApiError> {
    let page = state.paging.read(&params)?;
    page.constrain(MethodConstraints::new("getAllCategories")).check()?;

    let categories = state.store.categories(page.page()).await;
    tracing::debug!(page_number = page.number, count = categories.len(), "listed categories");

    Ok(Json(categories.into_iter().map(CategoryView::from).collect()))
}

/// Handle `GET /api/v1/categories/{id}`
async fn get_category(
    State(state): State<AppState>,
    path: PathParams,
) -> Result<Json<CategoryView>, ApiError> {
    let id: i64 = path.get("id")?;
    let category = state.store.category(id).await?;

    Ok(Json(category.into()))
}

/// Handle `POST /api/v1/categories`
async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateCategory>,
) -> Json<CategoryView> {
    let category = state.store.create_category(body.into_draft()).await;
    tracing::info!(category_id = category.id, "category created");

    Json(category.into())
}

/// Handle `PUT /api/v1/categories`
async fn update_category(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateCategory>,
) -> Result<Json<CategoryView>, ApiError> {
    let (id, draft) = body.into_draft();
    let category = state.store.update_category(id, draft).await?;
    tracing::info!(category_id = id, "category updated");

    Ok(Json(category.into()))
}

/// Handle `DELETE /api/v1/categories/{id}`
async fn delete_category(
    State(state): State<AppState>,
    path: PathParams,
) -> Result<StatusCode, ApiError> {
    let id: i64 = path.get("id")?;
    state.store.delete_category(id).await?;
    tracing::info!(category_id = id, "category deleted");

    Ok(StatusCode::NO_CONTENT)
}
