//! Post CRUD handlers.
//!
//! Reads are public; every mutation requires a bearer token, and update and
//! delete additionally require the caller to be the post's author. The
//! not-found check always runs before the ownership check so a missing post
//! never leaks ownership information.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::policy;
use quill_core::ports::{BaseRepository, PostRepository};
use quill_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};
use quill_shared::response::MessageBody;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// An id that doesn't parse can't match any post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

/// GET /api/v1/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();

    let posts = state.posts.list_page(q.page, q.size).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    Post::validate_new(&req.title, &req.content)?;

    let post = Post::new(identity.user_id, req.title, req.content);
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(saved)))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    if !policy::can_mutate(&post, identity.user_id) {
        return Err(AppError::Forbidden);
    }

    post.apply_edit(identity.user_id, req.title, req.content);
    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(saved)))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    if !policy::can_mutate(&post, identity.user_id) {
        return Err(AppError::Forbidden);
    }

    state.posts.soft_delete(id, identity.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageBody::new("Post marked as deleted successfully")))
}
