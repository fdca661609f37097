//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::author::{Author, AuthorPageQuery, AuthorPayload, AuthorWithBooks},
    AppState,
};

use super::PaginatedResponse;

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Validation errors"),
        (status = 409, description = "An author with the same name already exists")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<AuthorPayload>,
) -> AppResult<impl IntoResponse> {
    let author = payload.validate()?;
    let created = state.services.authors.create(author).await?;

    let location = format!("/api/authors/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    request_body = AuthorPayload,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AuthorPayload>,
) -> AppResult<Json<Author>> {
    let author = payload.validate()?;
    let updated = state.services.authors.update(id, author).await?;
    Ok(Json(updated))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get author details with books
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details with books", body = AuthorWithBooks),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let author = state.services.authors.get_with_books(id).await?;
    Ok(([(header::CACHE_CONTROL, "no-cache")], Json(author)))
}

/// Get all authors with their books
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "All authors with books", body = Vec<AuthorWithBooks>),
        (status = 404, description = "No authors found")
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let authors = state.services.authors.list_with_books().await?;
    Ok(Json(authors))
}

/// Get a filtered, paginated list of authors
#[utoipa::path(
    get,
    path = "/authors/page",
    tag = "authors",
    params(AuthorPageQuery),
    responses(
        (status = 200, description = "Page of authors with books"),
        (status = 404, description = "No authors found with the provided filters")
    )
)]
pub async fn page_authors(
    State(state): State<AppState>,
    Query(query): Query<AuthorPageQuery>,
) -> AppResult<impl IntoResponse> {
    let (items, total) = state.services.authors.page_with_filters(&query).await?;

    let body = PaginatedResponse::<AuthorWithBooks> {
        items,
        total,
        page: query.page.unwrap_or(0),
        size: query.size.unwrap_or(10),
    };
    Ok(Json(body))
}
