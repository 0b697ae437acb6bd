use async_trait::async_trait;

use crate::domain::{NewPost, Page, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Post repository.
///
/// Every write runs in its own transaction: on failure nothing is persisted and
/// the error is returned. A missing row is `Ok(None)`, never an error.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its id.
    async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// List posts in ascending id order within the given window.
    async fn list(&self, page: Page) -> Result<Vec<Post>, RepoError>;

    /// Validate and persist a new post, returning it with its assigned id and date.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply the fields present in `patch`. `None` if the post does not exist.
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Remove a post, returning it as it was before removal. `None` if it did not exist.
    async fn delete(&self, id: PostId) -> Result<Option<Post>, RepoError>;
}
