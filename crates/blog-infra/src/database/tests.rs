use blog_core::domain::{NewPost, Page, Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use chrono::Utc;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DbConn, MockDatabase,
    MockExecResult, Schema,
};

use crate::database::entity::post::{self, Entity as PostEntity};
use crate::database::post_repository::SeaOrmPostRepository;

async fn sqlite_memory() -> DbConn {
    // A single connection, otherwise every pooled connection sees its own empty database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}

async fn sqlite_repo() -> SeaOrmPostRepository {
    let db = sqlite_memory().await;
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(PostEntity);
    db.execute(backend.build(&stmt)).await.unwrap();
    SeaOrmPostRepository::new(db)
}

/// Same table, but the store refuses one author so writes can be made to fail.
async fn sqlite_repo_with_check() -> SeaOrmPostRepository {
    let db = sqlite_memory().await;
    db.execute_unprepared(
        "CREATE TABLE posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR NOT NULL,
            content TEXT NOT NULL,
            author VARCHAR NOT NULL CHECK (author <> 'forbidden'),
            publication_date TEXT NOT NULL
        )",
    )
    .await
    .unwrap();
    SeaOrmPostRepository::new(db)
}

fn sample(n: usize) -> NewPost {
    NewPost::new(format!("Post {n}"), format!("Content {n}"), format!("Author {n}"))
}

#[tokio::test]
async fn test_find_post_by_id() {
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: 7,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            author: "Test Author".to_owned(),
            publication_date: now.into(),
        }]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result: Option<Post> = repo.get(7).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 7);
    assert_eq!(post.publication_date, now);
}

fn stored_model(id: i32) -> post::Model {
    post::Model {
        id,
        title: "Stored".to_owned(),
        content: "Content".to_owned(),
        author: "Author".to_owned(),
        publication_date: Utc::now().into(),
    }
}

#[tokio::test]
async fn delete_of_row_removed_concurrently_is_none() {
    // The lookup still sees the row, but another transaction deleted it first.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored_model(7)]])
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert_eq!(repo.delete(7).await.unwrap(), None);
}

#[tokio::test]
async fn update_of_row_removed_concurrently_is_none() {
    // UPDATE ... RETURNING comes back empty once the row is gone.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored_model(7)], Vec::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let patch = PostPatch {
        title: Some("N".into()),
        ..Default::default()
    };

    assert_eq!(repo.update(7, patch).await.unwrap(), None);
}

#[tokio::test]
async fn create_then_get_returns_identical_fields() {
    let repo = sqlite_repo().await;

    let created = repo
        .create(NewPost::new(
            "Test Post",
            "This is a test post.",
            "Test Author",
        ))
        .await
        .unwrap();
    let fetched = repo.get(created.id).await.unwrap().unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.title, "Test Post");
    assert_eq!(fetched.content, "This is a test post.");
    assert_eq!(fetched.author, "Test Author");
}

#[tokio::test]
async fn get_missing_post_is_none() {
    let repo = sqlite_repo().await;
    assert!(repo.get(999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_respects_skip_and_limit_in_id_order() {
    let repo = sqlite_repo().await;
    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(repo.create(sample(n)).await.unwrap().id);
    }

    let all = repo.list(Page::default()).await.unwrap();
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), ids);

    let window = repo.list(Page { skip: 1, limit: 3 }).await.unwrap();
    assert_eq!(window.len(), 3);
    assert_eq!(window[0].id, ids[1]);
    assert_eq!(window[2].id, ids[3]);

    let past_end = repo.list(Page { skip: 10, limit: 3 }).await.unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn update_only_touches_supplied_fields() {
    let repo = sqlite_repo().await;
    let created = repo
        .create(NewPost::new(
            "Original Title",
            "Original Content",
            "Original Author",
        ))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            PostPatch {
                title: Some("Updated Title".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.content, "Original Content");
    assert_eq!(updated.author, "Original Author");
    assert_eq!(updated.publication_date, created.publication_date);
    assert_eq!(repo.get(created.id).await.unwrap().unwrap(), updated);
}

#[tokio::test]
async fn empty_patch_returns_post_unchanged() {
    let repo = sqlite_repo().await;
    let created = repo.create(sample(1)).await.unwrap();

    let same = repo
        .update(created.id, PostPatch::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(same, created);
}

#[tokio::test]
async fn update_missing_post_is_none() {
    let repo = sqlite_repo().await;
    let patch = PostPatch {
        title: Some("Nonexistent Update".into()),
        ..Default::default()
    };
    assert!(repo.update(999, patch).await.unwrap().is_none());
    assert!(repo.list(Page::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_returns_prior_state_and_is_terminal() {
    let repo = sqlite_repo().await;
    let created = repo.create(sample(1)).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted, Some(created.clone()));

    assert!(repo.get(created.id).await.unwrap().is_none());
    assert!(repo.delete(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn blank_title_is_rejected_before_touching_the_store() {
    let repo = sqlite_repo().await;

    let err = repo
        .create(NewPost::new(" ", "content", "author"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Invalid(_)));
    assert!(repo.list(Page::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_create_leaves_no_row_behind() {
    let repo = sqlite_repo_with_check().await;

    let err = repo
        .create(NewPost::new("Title", "Content", "forbidden"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Query(_)));
    assert!(repo.list(Page::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_update_is_rolled_back() {
    let repo = sqlite_repo_with_check().await;
    let created = repo
        .create(NewPost::new("Title", "Content", "Author"))
        .await
        .unwrap();

    let patch = PostPatch {
        title: Some("New Title".into()),
        author: Some("forbidden".into()),
        ..Default::default()
    };
    assert!(repo.update(created.id, patch).await.is_err());

    let stored = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Title");
    assert_eq!(stored.author, "Author");
}

#[tokio::test]
async fn failed_delete_is_rolled_back() {
    let repo = sqlite_repo().await;
    repo.db
        .execute_unprepared(
            "CREATE TRIGGER keep_protected_posts BEFORE DELETE ON posts
             WHEN OLD.author = 'protected'
             BEGIN SELECT RAISE(ABORT, 'post is protected'); END",
        )
        .await
        .unwrap();
    let created = repo
        .create(NewPost::new("Title", "Content", "protected"))
        .await
        .unwrap();

    let err = repo.delete(created.id).await.unwrap_err();

    assert!(matches!(err, RepoError::Query(_)));
    assert_eq!(repo.get(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn missing_table_surfaces_as_query_error() {
    let repo = SeaOrmPostRepository::new(sqlite_memory().await);
    assert!(matches!(
        repo.get(1).await.unwrap_err(),
        RepoError::Query(_)
    ));
}
