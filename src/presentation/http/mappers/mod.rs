use crate::{domain::models::User, presentation::http::responses::UserDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.map(|at| at.to_rfc3339()),
    }
}
