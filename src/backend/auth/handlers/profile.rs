/**
 * Profile Update Handler
 *
 * PUT /api/v1/profile. Requires authentication. Account changes are not
 * implemented; the handler acknowledges the request and changes nothing.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::middleware::AuthUser;

/// Fixed acknowledgement for profile updates
pub const PROFILE_MESSAGE: &str = "profile update is not available yet";

/// Profile update handler (stub)
pub async fn update_profile(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::debug!("Profile update requested by user {}", user.id);
    Json(MessageResponse::new(PROFILE_MESSAGE))
}
