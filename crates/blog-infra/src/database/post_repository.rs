//! SeaORM post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
    TransactionTrait,
};

use blog_core::domain::{NewPost, Page, Post, PostId, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::base::{SeaOrmRepository, transaction_error};
use super::entity::post::{self, Entity as PostEntity};

/// Post repository backed by a SeaORM connection pool.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn get(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Finding post by id");
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn list(&self, page: Page) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(skip = page.skip, limit = page.limit, "Listing posts");
        let query = PostEntity::find().order_by_asc(post::Column::Id);
        let models = self.fetch_page(query, page).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        tracing::info!(title = %new_post.title, "Attempting to create post");
        if let Err(err) = new_post.validate() {
            tracing::warn!(error = %err, "Rejected post creation");
            return Err(err.into());
        }

        let active = post::ActiveModel {
            title: Set(new_post.title),
            content: Set(new_post.content),
            author: Set(new_post.author),
            publication_date: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = self
            .db
            .transaction::<_, post::Model, DbErr>(move |txn| {
                Box::pin(async move { active.insert(txn).await })
            })
            .await;

        match result {
            Ok(model) => {
                tracing::info!(post_id = model.id, "Post created successfully");
                Ok(model.into())
            }
            Err(err) => {
                let err = transaction_error(err);
                tracing::error!(error = %err, "Error creating post, rolled back");
                Err(err)
            }
        }
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        tracing::info!(post_id = id, ?patch, "Attempting to update post");
        if let Err(err) = patch.validate() {
            tracing::warn!(post_id = id, error = %err, "Rejected post update");
            return Err(err.into());
        }

        let result = self
            .db
            .transaction::<_, Option<post::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(model) = PostEntity::find_by_id(id).one(txn).await? else {
                        return Ok(None);
                    };
                    if patch.is_empty() {
                        return Ok(Some(model));
                    }

                    let mut active = model.into_active_model();
                    if let Some(title) = patch.title {
                        active.title = Set(title);
                    }
                    if let Some(content) = patch.content {
                        active.content = Set(content);
                    }
                    if let Some(author) = patch.author {
                        active.author = Set(author);
                    }
                    // A concurrent delete between lookup and write leaves nothing to update.
                    match active.update(txn).await {
                        Ok(model) => Ok(Some(model)),
                        Err(DbErr::RecordNotUpdated) => Ok(None),
                        Err(err) => Err(err),
                    }
                })
            })
            .await;

        match result {
            Ok(Some(model)) => {
                tracing::info!(post_id = id, "Post updated successfully");
                Ok(Some(model.into()))
            }
            Ok(None) => {
                tracing::warn!(post_id = id, "Post not found for update");
                Ok(None)
            }
            Err(err) => {
                let err = transaction_error(err);
                tracing::error!(post_id = id, error = %err, "Error updating post, rolled back");
                Err(err)
            }
        }
    }

    async fn delete(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::info!(post_id = id, "Attempting to delete post");

        let result = self
            .db
            .transaction::<_, Option<post::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(model) = PostEntity::find_by_id(id).one(txn).await? else {
                        return Ok(None);
                    };
                    let result = PostEntity::delete_by_id(id).exec(txn).await?;
                    if result.rows_affected == 0 {
                        return Ok(None);
                    }
                    Ok(Some(model))
                })
            })
            .await;

        match result {
            Ok(Some(model)) => {
                tracing::info!(post_id = id, "Post deleted successfully");
                Ok(Some(model.into()))
            }
            Ok(None) => {
                tracing::warn!(post_id = id, "Post not found for deletion");
                Ok(None)
            }
            Err(err) => {
                let err = transaction_error(err);
                tracing::error!(post_id = id, error = %err, "Error deleting post, rolled back");
                Err(err)
            }
        }
    }
}
