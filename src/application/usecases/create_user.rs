use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        // An empty string counts as absent, same as a missing field.
        let name = request.name.filter(|name| !name.is_empty());
        let email = request.email.filter(|email| !email.is_empty());

        let (Some(name), Some(email)) = (name, email) else {
            return Err(DomainError::Validation(
                "name and email are required".to_string(),
            ));
        };

        self.repo.insert(name, email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    fn usecase() -> (CreateUserUseCase, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        (CreateUserUseCase::new(repo.clone()), repo)
    }

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn creates_a_user() {
        let (usecase, _repo) = usecase();

        let user = usecase
            .execute(request(Some("Alice"), Some("a@x.com")))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn missing_name_is_rejected_before_mutation() {
        let (usecase, repo) = usecase();

        let err = usecase
            .execute(request(None, Some("a@x.com")))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_email_is_rejected_before_mutation() {
        let (usecase, repo) = usecase();

        let err = usecase
            .execute(request(Some("Alice"), Some("")))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn count_tracks_successful_creates() {
        let (usecase, repo) = usecase();

        for i in 0..5 {
            usecase
                .execute(request(Some("User"), Some(&format!("u{i}@x.com"))))
                .await
                .unwrap();
        }
        usecase
            .execute(request(Some("Dup"), Some("u0@x.com")))
            .await
            .unwrap_err();

        assert_eq!(repo.list().await.unwrap().len(), 5);
    }
}
