use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    errors::DomainError,
    models::{User, UserPatch},
    repositories::UserRepository,
};

const USER_NOT_FOUND: &str = "user not found";
const EMAIL_EXISTS: &str = "email already exists";

/// Records and the id counter live under one lock so every
/// check-then-mutate sequence is atomic under concurrent requests.
struct UserTable {
    users: Vec<User>,
    next_id: i64,
}

pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Startup fixture: ids are assigned here, not by the caller, so the
    /// counter stays ahead of every live record.
    pub fn with_seed(seed: &[(&str, &str)]) -> Self {
        let now = Utc::now();
        let users: Vec<User> = seed
            .iter()
            .enumerate()
            .map(|(index, (name, email))| User {
                id: index as i64 + 1,
                name: (*name).to_string(),
                email: (*email).to_string(),
                created_at: now,
                updated_at: None,
            })
            .collect();
        let next_id = users.len() as i64 + 1;

        Self {
            table: RwLock::new(UserTable { users, next_id }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get(&self, id: i64) -> Result<User, DomainError> {
        let table = self.table.read().await;
        table
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.to_string()))
    }

    async fn insert(&self, name: String, email: String) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.users.iter().any(|u| u.email == email) {
            return Err(DomainError::AlreadyExists(EMAIL_EXISTS.to_string()));
        }

        let user = User {
            id: table.next_id,
            name,
            email,
            created_at: Utc::now(),
            updated_at: None,
        };
        // Counter advances on every successful insert and never rolls
        // back, so ids of deleted records are not reissued.
        table.next_id += 1;
        table.users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let index = table
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.to_string()))?;

        if let Some(email) = &patch.email {
            // The record itself is excluded: patching to the current
            // email is allowed.
            if table.users.iter().any(|u| &u.email == email && u.id != id) {
                return Err(DomainError::AlreadyExists(EMAIL_EXISTS.to_string()));
            }
        }

        let user = &mut table.users[index];
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        user.updated_at = Some(Utc::now());

        Ok(user.clone())
    }

    async fn remove(&self, id: i64) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let index = table
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(table.users.remove(index))
    }
}
