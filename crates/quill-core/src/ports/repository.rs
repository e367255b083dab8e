use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard persistence operations.
///
/// `insert` and `update` are separate on purpose: creating an entity and
/// persisting an edit are distinct operations with distinct failure modes.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID, regardless of status.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;
}

/// User directory.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find an active user by email address. Soft-deleted users are excluded.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post directory.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// List a page of active posts, ordered by creation time.
    ///
    /// Offset pagination: `skip = (page - 1) * size`, page is 1-based.
    /// A page beyond the available records yields an empty list.
    async fn list_page(&self, page: u64, size: u64) -> Result<Vec<Post>, RepoError>;

    /// Find an active post by ID. Soft-deleted posts are excluded.
    async fn find_active(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Soft-delete an active post, recording `actor` as the last modifier.
    /// Fails with `RepoError::NotFound` when no active post matches.
    async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<(), RepoError>;
}
