//! Category endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::category::{Category, CategoryPageQuery, CategoryPayload, CategoryWithBooks},
    AppState,
};

use super::PaginatedResponse;

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation errors"),
        (status = 409, description = "A category with the same name already exists")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<impl IntoResponse> {
    let category = payload.validate()?;
    let created = state.services.categories.create(category).await?;

    let location = format!("/api/categories/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Update an existing category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<Json<Category>> {
    let category = payload.validate()?;
    let updated = state.services.categories.update(id, category).await?;
    Ok(Json(updated))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get category details with books
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details with books", body = CategoryWithBooks),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let category = state.services.categories.get_with_books(id).await?;
    Ok(([(header::CACHE_CONTROL, "no-cache")], Json(category)))
}

/// Get all categories with their books
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories with books", body = Vec<CategoryWithBooks>),
        (status = 404, description = "No categories found")
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.services.categories.list_with_books().await?;
    Ok(Json(categories))
}

/// Get a filtered, paginated list of categories
#[utoipa::path(
    get,
    path = "/categories/page",
    tag = "categories",
    params(CategoryPageQuery),
    responses(
        (status = 200, description = "Page of categories with books"),
        (status = 404, description = "No categories found with the provided filters")
    )
)]
pub async fn page_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryPageQuery>,
) -> AppResult<impl IntoResponse> {
    let (items, total) = state.services.categories.page_with_filters(&query).await?;

    let body = PaginatedResponse::<CategoryWithBooks> {
        items,
        total,
        page: query.page.unwrap_or(0),
        size: query.size.unwrap_or(10),
    };
    Ok(Json(body))
}
