//! Post handlers. Each issues exactly one store operation.

use actix_web::{HttpResponse, web};

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges, PostId, PostRepresentation};
use quill_shared::MessageResponse;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::json_body::JsonBody;
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostRepresentation> = posts.iter().map(Post::to_external).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
///
/// A missing post is answered like any other store failure.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id: PostId = path.parse()?;
    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or(RepoError::NotFound)?;

    Ok(HttpResponse::Ok().json(post.to_external()))
}

/// POST /posts
///
/// An empty body fails the presence check on `title`.
pub async fn create_post(
    state: web::Data<AppState>,
    body: JsonBody<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::from_fields(req.title, req.content, req.author)?;

    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(post.to_external()))
}

/// PUT /posts/{id}
///
/// No existence check and no field validation: an empty body is a no-op
/// that still answers 201 with the stored post.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id: PostId = path.parse()?;
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let post = state
        .posts
        .update_by_id(&id, changes)
        .await?
        .ok_or(RepoError::NotFound)?;

    Ok(HttpResponse::Created().json(post.to_external()))
}

/// DELETE /posts/{id}
///
/// Answers 204 but still writes a message body.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id: PostId = path.parse().map_err(AppError::delete_failed)?;
    state
        .posts
        .delete_by_id(&id)
        .await
        .map_err(AppError::delete_failed)?;

    Ok(HttpResponse::NoContent().json(MessageResponse::deleted()))
}
