use poem_openapi::Object;

/// Fields stay optional at the boundary: presence and non-emptiness are
/// the use case's call, so an absent field and an empty one are rejected
/// the same way.
#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
}
