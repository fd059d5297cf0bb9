use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::ApiError,
        mappers::map_user,
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{CreateUserResponse, UserListResponseDto, UserPostParamsDto, UserResponseDto},
    },
};

#[derive(Clone)]
pub struct UserEndpoints {
    state: Arc<ApiState>,
}

impl UserEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UserEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> poem::Result<Json<UserListResponseDto>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(ApiError::from)?;

        Ok(Json(UserListResponseDto {
            success: true,
            count: users.len() as u64,
            data: users.iter().map(map_user).collect(),
        }))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> poem::Result<Json<UserResponseDto>> {
        let user = self
            .state
            .get_user_usecase
            .execute(lookup_id(&id.0))
            .await
            .map_err(ApiError::from)?;

        Ok(Json(UserResponseDto {
            success: true,
            data: map_user(&user),
            message: None,
        }))
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> poem::Result<CreateUserResponse> {
        let payload = CreateUserRequest {
            name: request.name.clone(),
            email: request.email.clone(),
        };

        let user = self
            .state
            .create_user_usecase
            .execute(payload)
            .await
            .map_err(ApiError::from)?;

        Ok(CreateUserResponse::Created(Json(UserResponseDto {
            success: true,
            data: map_user(&user),
            message: Some("user created".to_string()),
        })))
    }

    #[oai(path = "/users/:id", method = "patch", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<String>,
        request: Json<UpdateUserRequestDto>,
    ) -> poem::Result<Json<UserResponseDto>> {
        let payload = UpdateUserRequest {
            id: lookup_id(&id.0),
            name: request.name.clone(),
            email: request.email.clone(),
        };

        let user = self
            .state
            .update_user_usecase
            .execute(payload)
            .await
            .map_err(ApiError::from)?;

        Ok(Json(UserResponseDto {
            success: true,
            data: map_user(&user),
            message: Some("user updated".to_string()),
        }))
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> poem::Result<Json<UserResponseDto>> {
        // Unlike lookups, delete rejects a malformed id outright.
        let id: i64 = id
            .0
            .parse()
            .map_err(|_| ApiError::from(DomainError::Validation("id must be a number".to_string())))?;

        let user = self
            .state
            .delete_user_usecase
            .execute(id)
            .await
            .map_err(ApiError::from)?;

        Ok(Json(UserResponseDto {
            success: true,
            data: map_user(&user),
            message: Some("user deleted".to_string()),
        }))
    }

    /// Nested path-parameter demo: echoes both segments, there is no post
    /// collection behind it.
    #[oai(
        path = "/users/:user_id/posts/:post_id",
        method = "get",
        tag = EndpointsTags::Users
    )]
    pub async fn get_user_post(
        &self,
        user_id: Path<String>,
        post_id: Path<String>,
    ) -> Json<UserPostParamsDto> {
        Json(UserPostParamsDto {
            user_id: user_id.0,
            post_id: post_id.0,
        })
    }
}

/// A malformed id segment takes part in the lookup as an id that matches
/// no record, so it surfaces as `NotFound` rather than a parse failure.
fn lookup_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}
