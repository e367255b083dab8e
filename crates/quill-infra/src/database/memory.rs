//! In-memory repository implementations - used as the fallback when no
//! database is configured, and as fixtures in handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory user store using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        // Unique email among active users, matching the store-level constraint.
        let duplicate = store
            .values()
            .any(|u| u.status.is_active() && u.email == user.email);
        if duplicate {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .find(|u| u.status.is_active() && u.email == email)
            .cloned())
    }
}

/// In-memory post store using a simple HashMap with async RwLock.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_page(&self, page: u64, size: u64) -> Result<Vec<Post>, RepoError> {
        // Page is 1-based; page 0 is treated as the first page.
        let skip = page.saturating_sub(1).saturating_mul(size) as usize;

        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .values()
            .filter(|p| p.status.is_active())
            .cloned()
            .collect();
        posts.sort_by_key(|p| (p.created_at, p.id));

        Ok(posts.into_iter().skip(skip).take(size as usize).collect())
    }

    async fn find_active(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .get(&id)
            .filter(|p| p.status.is_active())
            .cloned())
    }

    async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        let post = store
            .get_mut(&id)
            .filter(|p| p.status.is_active())
            .ok_or(RepoError::NotFound)?;

        post.mark_deleted(actor);
        Ok(())
    }
}
