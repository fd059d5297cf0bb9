use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> Result<User, DomainError> {
        self.repo.remove(id).await
    }
}
