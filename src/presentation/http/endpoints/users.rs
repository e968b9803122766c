use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::resolve_user::ResolveUserRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_domain_error, map_user},
        requests::ResolveUserRequestDto,
        responses::{ResolveUserResponse, UserDto},
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// Create a user, or return the existing one with the same name (ignoring case)
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn resolve_user(
        &self,
        request: Json<ResolveUserRequestDto>,
    ) -> poem::Result<ResolveUserResponse> {
        let resolution = self
            .state
            .resolve_user_usecase
            .execute(ResolveUserRequest {
                name: request.0.name,
            })
            .await
            .map_err(map_domain_error)?;

        let created = resolution.is_created();
        let user = Json(map_user(&resolution.into_user()));
        Ok(if created {
            ResolveUserResponse::Created(user)
        } else {
            ResolveUserResponse::Existing(user)
        })
    }

    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> poem::Result<Json<Vec<UserDto>>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(map_domain_error)?;

        Ok(Json(users.iter().map(map_user).collect()))
    }
}
