//! Ownership policy for post mutation.

use uuid::Uuid;

use crate::domain::Post;

/// A post may only be mutated by the identity that authored it.
///
/// Callers must resolve the post first (missing posts are a not-found
/// condition, checked before this comparison) and reject with a forbidden
/// response when this returns false.
pub fn can_mutate(post: &Post, actor: Uuid) -> bool {
    post.author == actor
}
