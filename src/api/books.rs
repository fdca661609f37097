//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookDetails, BookPageQuery, BookPayload},
    AppState,
};

use super::PaginatedResponse;

/// Create a new book with its authors, publishers and categories
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "One or more authors, publishers, or categories not found"),
        (status = 409, description = "A book with the provided ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<impl IntoResponse> {
    let book = payload.validate()?;
    let created = state.services.books.create(book).await?;

    let location = format!("/api/books/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Update an existing book, replacing scalars and all relation sets
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Book or one of the provided relation names not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<Book>> {
    let book = payload.validate()?;
    let updated = state.services.books.update(id, book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let book = state.services.books.get_details(id).await?;
    Ok(([(header::CACHE_CONTROL, "no-cache")], Json(book)))
}

/// Get all book details
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All book details", body = Vec<BookDetails>),
        (status = 404, description = "No books found")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = state.services.books.list_details().await?;
    Ok(Json(books))
}

/// Get a filtered, paginated list of book details
#[utoipa::path(
    get,
    path = "/books/page",
    tag = "books",
    params(BookPageQuery),
    responses(
        (status = 200, description = "Page of book details"),
        (status = 404, description = "No books found matching the provided filters")
    )
)]
pub async fn page_books(
    State(state): State<AppState>,
    Query(query): Query<BookPageQuery>,
) -> AppResult<impl IntoResponse> {
    let (items, total) = state.services.books.page_with_filters(&query).await?;

    let body = PaginatedResponse::<BookDetails> {
        items,
        total,
        page: query.page.unwrap_or(0),
        size: query.size.unwrap_or(10),
    };
    Ok(Json(body))
}
