use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{User, UserPatch},
    repositories::UserRepository,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        let patch = UserPatch {
            name: request.name.filter(|name| !name.is_empty()),
            email: request.email.filter(|email| !email.is_empty()),
        };

        if patch.is_empty() {
            return Err(DomainError::Validation(
                "name or email is required".to_string(),
            ));
        }

        self.repo.update(request.id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    fn usecase() -> (UpdateUserUseCase, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::with_seed(&[
            ("Alice", "a@x.com"),
            ("Bob", "b@x.com"),
        ]));
        (UpdateUserUseCase::new(repo.clone()), repo)
    }

    fn request(id: i64, name: Option<&str>, email: Option<&str>) -> UpdateUserRequest {
        UpdateUserRequest {
            id,
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn nothing_to_update_is_rejected() {
        let (usecase, _repo) = usecase();

        let err = usecase.execute(request(1, None, None)).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_strings_count_as_absent() {
        let (usecase, repo) = usecase();

        let err = usecase
            .execute(request(1, Some(""), Some("")))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.get(1).await.unwrap().updated_at.is_none());
    }

    #[tokio::test]
    async fn name_only_patch_keeps_email() {
        let (usecase, _repo) = usecase();

        let user = usecase
            .execute(request(1, Some("Renamed"), None))
            .await
            .unwrap();

        assert_eq!(user.name, "Renamed");
        assert_eq!(user.email, "a@x.com");
        assert!(user.updated_at.is_some());
    }

    #[tokio::test]
    async fn email_conflict_with_other_record() {
        let (usecase, _repo) = usecase();

        let err = usecase
            .execute(request(1, None, Some("b@x.com")))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyExists(_)));
    }
}
