//! Auth endpoints: registration and username lookup

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::user::{RegisterUser, User},
    AppState,
};

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Validation errors"),
        (status = 409, description = "A user with the same username already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> AppResult<impl IntoResponse> {
    let user = payload.validate()?;
    let created = state.services.auth.register(user).await?;

    let location = format!("/api/auth/users/{}", created.username);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Look up a user by username
#[utoipa::path(
    get,
    path = "/auth/users/{username}",
    tag = "auth",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.auth.get_by_username(&username).await?;
    Ok(Json(user))
}
