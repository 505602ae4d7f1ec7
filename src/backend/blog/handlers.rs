/**
 * Blog Handlers
 *
 * HTTP handlers for the post routes under `/api/v1`:
 *
 * - `POST /blog` - create a post
 * - `PUT /blog` - update a post owned by `userId`
 * - `GET /{id}` - fetch a post by id
 * - `PUT /publish` - acknowledgement only
 *
 * All four run behind the auth middleware. The author id comes from the
 * request body; a body `userId` that differs from the token's id is logged
 * but not refused.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::blog::posts::{NewPost, Post};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, AuthenticatedUser};
use crate::backend::server::state::AppState;

pub const CREATE_ERROR: &str = "Internal Error occured while creating new blog";
pub const UPDATE_ERROR: &str = "Internal Error occurred while updating blog";
pub const FETCH_ERROR: &str = "Internal Error occured while searching for the blog";

/// Fixed acknowledgement for the publish stub
pub const PUBLISH_MESSAGE: &str = "blog was published";

/// Body of `POST /blog`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
}

/// Body of `PUT /blog`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
}

/// `{ "id": ... }` returned by create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: Uuid,
}

/// `{ "findResult": Post | null }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    pub find_result: Option<Post>,
}

fn note_author_mismatch(caller: &AuthenticatedUser, user_id: Uuid) {
    if caller.id != user_id.to_string() {
        tracing::warn!(
            "Request body names author {} but token belongs to {}",
            user_id,
            caller.id
        );
    }
}

/// Create a post
///
/// # Errors
///
/// * `500 Internal Server Error` - Unreadable body, unknown author or store failure
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> Result<Json<IdResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| BackendError::internal(CREATE_ERROR, e))?;
    note_author_mismatch(&caller, request.user_id);

    let post = state
        .posts
        .create_post(NewPost {
            title: request.title,
            content: request.content,
            author_id: request.user_id,
        })
        .await
        .map_err(|e| BackendError::internal(CREATE_ERROR, e))?;

    tracing::info!("Post {} created by {}", post.id, post.author_id);

    Ok(Json(IdResponse { id: post.id }))
}

/// Update the post matching both `id` and `userId`
///
/// A request whose pair matches no post writes nothing and fails with 500.
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<UpdateBlogRequest>, JsonRejection>,
) -> Result<Json<IdResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| BackendError::internal(UPDATE_ERROR, e))?;
    note_author_mismatch(&caller, request.user_id);

    let updated = state
        .posts
        .update_post(
            request.id,
            request.user_id,
            &request.title,
            &request.content,
        )
        .await
        .map_err(|e| BackendError::internal(UPDATE_ERROR, e))?;

    match updated {
        Some(post) => {
            tracing::info!("Post {} updated by {}", post.id, post.author_id);
            Ok(Json(IdResponse { id: post.id }))
        }
        None => Err(BackendError::internal(
            UPDATE_ERROR,
            format!(
                "no post {} authored by {}",
                request.id, request.user_id
            ),
        )),
    }
}

/// Fetch a post by id
///
/// Ids that are not UUIDs cannot name a post and yield `findResult: null`.
pub async fn fetch_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FindResponse>, BackendError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        tracing::debug!("Lookup with non-UUID id {:?}", id);
        return Ok(Json(FindResponse { find_result: None }));
    };

    let find_result = state
        .posts
        .find_post(id)
        .await
        .map_err(|e| BackendError::internal(FETCH_ERROR, e))?;

    Ok(Json(FindResponse { find_result }))
}

pub async fn publish_blog(AuthUser(caller): AuthUser) -> Json<MessageResponse> {
    tracing::debug!("Publish requested by user {}", caller.id);
    Json(MessageResponse::new(PUBLISH_MESSAGE))
}
