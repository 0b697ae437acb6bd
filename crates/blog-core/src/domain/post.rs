use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Violation};

/// Store-assigned post identifier.
pub type PostId = i32;

/// Post entity - a persisted blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
}

/// Fields required to create a post. `id` and `publication_date` are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();
        check_title(&self.title, &mut violations);
        DomainError::check(violations)
    }

    /// Materialize the post once the store has assigned its identity.
    pub fn into_post(self, id: PostId, publication_date: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            publication_date,
        }
    }
}

/// Partial update - only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();
        if let Some(title) = &self.title {
            check_title(title, &mut violations);
        }
        DomainError::check(violations)
    }

    /// Overwrite the fields present in the patch, leaving the rest untouched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }
}

fn check_title(title: &str, violations: &mut Vec<Violation>) {
    if title.trim().is_empty() {
        violations.push(Violation::new(
            "title",
            "string_too_short",
            "Title must not be empty",
        ));
    }
}
