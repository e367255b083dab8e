use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecordStatus;
use crate::error::DomainError;

/// Post entity - a blog post.
///
/// `author` is set at creation and never changes; it identifies the only
/// identity allowed to mutate the post. `created_by`/`updated_by` are audit
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Uuid,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new active post authored by `author`.
    pub fn new(author: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created_by: author,
            updated_by: author,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the required fields for a new post.
    pub fn validate_new(title: &str, content: &str) -> Result<(), DomainError> {
        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "title and content are required".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply a partial edit: only supplied, non-empty fields overwrite the
    /// current values.
    pub fn apply_edit(&mut self, actor: Uuid, title: Option<String>, content: Option<String>) {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(content) = content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        self.updated_by = actor;
        self.updated_at = Utc::now();
    }

    /// Soft-delete: flip the status and record who did it.
    pub fn mark_deleted(&mut self, actor: Uuid) {
        self.status = RecordStatus::Deleted;
        self.updated_by = actor;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_audit_fields() {
        let author = Uuid::new_v4();
        let post = Post::new(author, "Title".to_string(), "Content".to_string());

        assert_eq!(post.author, author);
        assert_eq!(post.created_by, author);
        assert_eq!(post.updated_by, author);
        assert!(post.status.is_active());
    }

    #[test]
    fn test_apply_edit_overwrites_only_supplied_fields() {
        let author = Uuid::new_v4();
        let mut post = Post::new(author, "Title".to_string(), "Content".to_string());

        post.apply_edit(author, None, Some("Updated".to_string()));
        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "Updated");
    }

    #[test]
    fn test_apply_edit_ignores_empty_fields() {
        let author = Uuid::new_v4();
        let mut post = Post::new(author, "Title".to_string(), "Content".to_string());

        post.apply_edit(author, Some(String::new()), Some(String::new()));
        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "Content");
    }

    #[test]
    fn test_apply_edit_stamps_actor() {
        let author = Uuid::new_v4();
        let editor = author;
        let mut post = Post::new(author, "Title".to_string(), "Content".to_string());

        post.apply_edit(editor, Some("New title".to_string()), None);
        assert_eq!(post.updated_by, editor);
        assert_eq!(post.title, "New title");
    }

    #[test]
    fn test_mark_deleted() {
        let author = Uuid::new_v4();
        let mut post = Post::new(author, "Title".to_string(), "Content".to_string());

        post.mark_deleted(author);
        assert_eq!(post.status, RecordStatus::Deleted);
        assert_eq!(post.updated_by, author);
    }

    #[test]
    fn test_validate_new_requires_title_and_content() {
        assert!(Post::validate_new("Title", "Content").is_ok());
        assert!(Post::validate_new("", "Content").is_err());
        assert!(Post::validate_new("Title", "").is_err());
    }
}
