// src/presentation/http/controllers/users.rs
use crate::application::dto::UserResponse;
use crate::domain::user::{User, UserId};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: String,
}

pub async fn get_all_users(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let users = state.users.get_all().await.into_http()?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok((StatusCode::OK, Json(body)).into_response())
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Response> {
    match state.users.get_by_id(UserId::from(id)).await.into_http()? {
        Some(user) => Ok((StatusCode::OK, Json(UserResponse::from(user))).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Response> {
    // The id is assigned here, before the store sees the user. Name
    // validation is an upstream concern; only the store's verdict matters.
    let user = User::new(payload.full_name);

    if state.users.create(&user).await.into_http()? {
        let location = format!("/users/{}", user.id);
        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(UserResponse::from(user)),
        )
            .into_response())
    } else {
        Ok(StatusCode::BAD_REQUEST.into_response())
    }
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Response> {
    if state
        .users
        .delete_by_id(UserId::from(id))
        .await
        .into_http()?
    {
        Ok(StatusCode::OK.into_response())
    } else {
        Ok(StatusCode::NOT_FOUND.into_response())
    }
}
