//! Post handlers
//!
//! Endpoints for posts. Creation and listing are nested under their user.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::users::UserResponse;
use crate::domain::entities::{NewPost, Post, PostChanges, PostId, UserId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or editing a post
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl PostRequest {
    fn into_new_post(self, user_id: UserId) -> NewPost {
        NewPost {
            user_id,
            title: self.title,
            content: self.content,
        }
    }
}

impl From<PostRequest> for PostChanges {
    fn from(request: PostRequest) -> Self {
        PostChanges {
            title: request.title,
            content: request.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            user_id: post.user_id.to_string(),
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// A post with its author
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author: UserResponse,
}

/// GET /users/:id/posts
///
/// List a user's posts.
pub async fn list_posts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state
        .post_service
        .list_posts_by_user(&UserId(user_id))
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// POST /users/:id/posts
///
/// Create a post for the user.
pub async fn create_post(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let Json(request) = payload?;
    let post = state
        .post_service
        .create_post(&request.into_new_post(UserId(user_id)))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// GET /posts/:id
///
/// Show a post with its author.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let (post, author) = state.post_service.get_post_with_author(&PostId(id)).await?;

    Ok(Json(PostDetailResponse {
        post: post.into(),
        author: author.into(),
    }))
}

/// PATCH /posts/:id
///
/// Edit a post's title and content.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<PostResponse>, AppError> {
    let Json(request) = payload?;
    let post = state
        .post_service
        .update_post(&PostId(id), &request.into())
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete_post(&PostId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
