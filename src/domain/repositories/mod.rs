use async_trait::async_trait;

use crate::domain::{
    errors::DomainError,
    models::{User, UserPatch},
};

/// Store contract for the user collection. Existence and uniqueness are
/// decided by the implementation, atomically with the mutation they guard.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// `NotFound` when no record has the id.
    async fn get(&self, id: i64) -> Result<User, DomainError>;

    /// Assigns the next id, stamps `created_at`, appends the record.
    /// `AlreadyExists` when a live record already has the email.
    async fn insert(&self, name: String, email: String) -> Result<User, DomainError>;

    /// Partial merge; stamps `updated_at`. `NotFound` when the id is
    /// unknown, `AlreadyExists` when the new email belongs to another
    /// record.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, DomainError>;

    /// Removes and returns the record, preserving the relative order of
    /// the remainder. `NotFound` when the id is unknown.
    async fn remove(&self, id: i64) -> Result<User, DomainError>;
}
