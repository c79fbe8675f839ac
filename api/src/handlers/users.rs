//! User handlers
//!
//! Endpoints for listing, viewing, creating, editing and deleting users.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::posts::PostResponse;
use crate::domain::entities::{NewUser, User, UserChanges, UserId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or editing a user.
///
/// Missing fields deserialize as empty and are rejected by validation.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Empty or absent: placeholder on create, unchanged on edit
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        NewUser::new(request.first_name, request.last_name, request.image_url)
    }
}

impl From<UserRequest> for UserChanges {
    fn from(request: UserRequest) -> Self {
        UserChanges::new(request.first_name, request.last_name, request.image_url)
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub image_url: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            full_name: user.full_name(),
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        }
    }
}

/// A user's profile with their posts
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts: Vec<PostResponse>,
}

/// GET /users
///
/// List all users.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users
///
/// Create a user.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(request) = payload?;
    let user = state.user_service.create_user(&request.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/:id
///
/// Show a user and their posts.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let id = UserId(id);
    let user = state.user_service.get_user(&id).await?;
    let posts = state.post_service.list_posts_by_user(&id).await?;

    Ok(Json(UserDetailResponse {
        user: user.into(),
        posts: posts.into_iter().map(PostResponse::from).collect(),
    }))
}

/// PATCH /users/:id
///
/// Edit a user. An empty image URL keeps the current one.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(request) = payload?;
    let user = state
        .user_service
        .update_user(&UserId(id), &request.into())
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/:id
///
/// Delete a user together with their posts.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&UserId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
