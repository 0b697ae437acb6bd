//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{NewPost, Page, Post, PostId, PostPatch};
use blog_shared::dto::{ListPostsQuery, PostCreateRequest, PostResponse, PostUpdateRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: PostId) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        publication_date: post.publication_date,
    }
}

/// POST /api/v1/posts/
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(req.title, req.content, req.author);

    // Field rules are checked by the repository; `RepoError::Invalid` renders as 422.
    let post = state.posts.create(new_post).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/v1/posts/?skip=&limit=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let ListPostsQuery { skip, limit } = query.into_inner();
    let page = Page::new(skip, limit).map_err(|e| AppError::at("query", e))?;

    let posts = state.posts.list(page).await?;

    Ok(HttpResponse::Ok().json(posts.into_iter().map(to_response).collect::<Vec<_>>()))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostUpdateRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let post = state
        .posts
        .update(id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::NoContent().finish())
}
