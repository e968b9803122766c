use poem::Result as PoemResult;
use uuid::Uuid;

use crate::presentation::http::{endpoints::root::ApiState, mappers::map_domain_error};

/// Header carrying the caller's user id on every meal route.
pub const USER_ID_HEADER: &str = "user-id";

/// Resolves the `user-id` header to a known user, or fails the request with
/// 400 (missing) / 404 (unknown).
pub async fn authorize(state: &ApiState, user_id: Option<&str>) -> PoemResult<Uuid> {
    state
        .access_guard
        .authorize(user_id)
        .await
        .map_err(map_domain_error)
}
