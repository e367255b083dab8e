use sea_orm::{DatabaseBackend, MockDatabase};

use quill_core::domain::{Post, RecordStatus};
use quill_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

#[tokio::test]
async fn test_find_active_post() {
    let post_id = uuid::Uuid::new_v4();
    let author = uuid::Uuid::new_v4();
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            author,
            created_by: author,
            updated_by: author,
            status: "active".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_active(post_id).await.unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, "Test Post");
    assert_eq!(found.author, author);
    assert_eq!(found.status, RecordStatus::Active);
}

#[tokio::test]
async fn test_list_page_maps_models() {
    let author = uuid::Uuid::new_v4();
    let now = chrono::Utc::now();

    let models: Vec<post::Model> = (0..2)
        .map(|i| post::Model {
            id: uuid::Uuid::new_v4(),
            title: format!("Post {i}"),
            content: "Content".to_owned(),
            author,
            created_by: author,
            updated_by: author,
            status: "active".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        })
        .collect();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![models])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.list_page(1, 5).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Post 0");
}
