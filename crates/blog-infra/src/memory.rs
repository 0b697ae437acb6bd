//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Page, Post, PostId, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<PostId, Post>,
    /// Highest id ever handed out; ids of deleted rows are never reissued.
    last_id: PostId,
}

/// Post repository over a `BTreeMap` behind an async `RwLock`.
///
/// Each write holds the lock for its whole duration, so it is applied entirely or not at all.
/// Note: data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(table.rows.values().skip(skip).take(limit).cloned().collect())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        tracing::info!(title = %new_post.title, "Attempting to create post");
        if let Err(err) = new_post.validate() {
            tracing::warn!(error = %err, "Rejected post creation");
            return Err(err.into());
        }

        let mut table = self.table.write().await;
        let Some(id) = table.last_id.checked_add(1) else {
            tracing::error!("Error creating post: id space exhausted");
            return Err(RepoError::Constraint("post id space exhausted".to_string()));
        };
        let post = new_post.into_post(id, Utc::now());
        table.last_id = id;
        table.rows.insert(id, post.clone());

        tracing::info!(post_id = id, "Post created successfully");
        Ok(post)
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        tracing::info!(post_id = id, ?patch, "Attempting to update post");
        if let Err(err) = patch.validate() {
            tracing::warn!(post_id = id, error = %err, "Rejected post update");
            return Err(err.into());
        }

        let mut table = self.table.write().await;
        let Some(post) = table.rows.get_mut(&id) else {
            tracing::warn!(post_id = id, "Post not found for update");
            return Ok(None);
        };
        patch.apply_to(post);

        tracing::info!(post_id = id, "Post updated successfully");
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::info!(post_id = id, "Attempting to delete post");

        let removed = self.table.write().await.rows.remove(&id);
        match &removed {
            Some(_) => tracing::info!(post_id = id, "Post deleted successfully"),
            None => tracing::warn!(post_id = id, "Post not found for deletion"),
        }
        Ok(removed)
    }
}
