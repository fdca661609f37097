//! Publisher endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::publisher::{Publisher, PublisherPageQuery, PublisherPayload, PublisherWithBooks},
    AppState,
};

use super::PaginatedResponse;

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    request_body = PublisherPayload,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Validation errors"),
        (status = 409, description = "A publisher with the same name already exists")
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    Json(payload): Json<PublisherPayload>,
) -> AppResult<impl IntoResponse> {
    let publisher = payload.validate()?;
    let created = state.services.publishers.create(publisher).await?;

    let location = format!("/api/publishers/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Update an existing publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    request_body = PublisherPayload,
    responses(
        (status = 200, description = "Publisher updated", body = Publisher),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublisherPayload>,
) -> AppResult<Json<Publisher>> {
    let publisher = payload.validate()?;
    let updated = state.services.publishers.update(id, publisher).await?;
    Ok(Json(updated))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.publishers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get publisher details with books
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Publisher details with books", body = PublisherWithBooks),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let publisher = state.services.publishers.get_with_books(id).await?;
    Ok(([(header::CACHE_CONTROL, "no-cache")], Json(publisher)))
}

/// Get all publishers with their books
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    responses(
        (status = 200, description = "All publishers with books", body = Vec<PublisherWithBooks>),
        (status = 404, description = "No publishers found")
    )
)]
pub async fn list_publishers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let publishers = state.services.publishers.list_with_books().await?;
    Ok(Json(publishers))
}

/// Get a filtered, paginated list of publishers
#[utoipa::path(
    get,
    path = "/publishers/page",
    tag = "publishers",
    params(PublisherPageQuery),
    responses(
        (status = 200, description = "Page of publishers with books"),
        (status = 404, description = "No publishers found with the provided filters")
    )
)]
pub async fn page_publishers(
    State(state): State<AppState>,
    Query(query): Query<PublisherPageQuery>,
) -> AppResult<impl IntoResponse> {
    let (items, total) = state.services.publishers.page_with_filters(&query).await?;

    let body = PaginatedResponse::<PublisherWithBooks> {
        items,
        total,
        page: query.page.unwrap_or(0),
        size: query.size.unwrap_or(10),
    };
    Ok(Json(body))
}
