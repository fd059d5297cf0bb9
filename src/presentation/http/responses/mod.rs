use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[oai(rename = "createdAt")]
    pub created_at: String,
    #[oai(rename = "updatedAt", skip_serializing_if_is_none)]
    pub updated_at: Option<String>,
}

#[derive(Object)]
pub struct UserListResponseDto {
    pub success: bool,
    pub data: Vec<UserDto>,
    pub count: u64,
}

#[derive(Object)]
pub struct UserResponseDto {
    pub success: bool,
    pub data: UserDto,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

#[derive(Object)]
pub struct UserPostParamsDto {
    #[oai(rename = "userId")]
    pub user_id: String,
    #[oai(rename = "postId")]
    pub post_id: String,
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponseDto>),
}
