use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, RepoError};

/// Store-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A malformed identifier is reported as a store failure, like any other
/// lookup that the store cannot satisfy.
impl FromStr for PostId {
    type Err = RepoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| RepoError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post entity - a blog post as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a post from a validated payload, assigning id and timestamp.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: PostId::new(),
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            created: Utc::now(),
        }
    }

    /// The flattened shape returned to clients.
    pub fn to_external(&self) -> PostRepresentation {
        PostRepresentation {
            id: self.id.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            created: self.created.to_rfc3339(),
        }
    }
}

/// External representation of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRepresentation {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: String,
}

impl From<Post> for PostRepresentation {
    fn from(post: Post) -> Self {
        post.to_external()
    }
}

/// Creation payload with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    /// Fields are checked in order: title, content, author.
    /// The first absent one is reported.
    pub fn from_fields(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = title.ok_or(DomainError::MissingField("title"))?;
        let content = content.ok_or(DomainError::MissingField("content"))?;
        let author = author.ok_or(DomainError::MissingField("author"))?;

        Ok(Self {
            title,
            content,
            author,
        })
    }
}

/// Partial overwrite of a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    pub fn apply(self, post: &mut Post) {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(NewPost {
            title: "A".to_string(),
            content: "B".to_string(),
            author: "C".to_string(),
        })
    }

    #[test]
    fn test_from_fields_success() {
        let new_post = NewPost::from_fields(
            Some("A".to_string()),
            Some("B".to_string()),
            Some("C".to_string()),
        )
        .unwrap();

        assert_eq!(new_post.title, "A");
        assert_eq!(new_post.content, "B");
        assert_eq!(new_post.author, "C");
    }

    #[test]
    fn test_from_fields_reports_first_missing() {
        let result = NewPost::from_fields(None, None, None);
        assert_eq!(result.unwrap_err(), DomainError::MissingField("title"));

        let result = NewPost::from_fields(Some("A".to_string()), None, None);
        assert_eq!(result.unwrap_err(), DomainError::MissingField("content"));

        let result = NewPost::from_fields(Some("A".to_string()), Some("B".to_string()), None);
        assert_eq!(result.unwrap_err(), DomainError::MissingField("author"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = DomainError::MissingField("content");
        assert_eq!(err.to_string(), "Missing `content` in request body");
    }

    #[test]
    fn test_empty_string_counts_as_present() {
        let result = NewPost::from_fields(
            Some(String::new()),
            Some("B".to_string()),
            Some("C".to_string()),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_apply_changes_only_present_fields() {
        let mut post = sample();
        let before = post.clone();

        PostChanges {
            title: Some("New".to_string()),
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.title, "New");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created, before.created);
    }

    #[test]
    fn test_empty_changes_are_noop() {
        let mut post = sample();
        let before = post.clone();

        let changes = PostChanges::default();
        assert!(changes.is_empty());
        changes.apply(&mut post);

        assert_eq!(post, before);
    }

    #[test]
    fn test_external_representation_fields() {
        let post = sample();
        let repr = post.to_external();

        assert_eq!(repr.id, post.id.to_string());
        assert_eq!(repr.title, "A");
        assert_eq!(repr.content, "B");
        assert_eq!(repr.author, "C");
        assert_eq!(repr.created, post.created.to_rfc3339());

        let json = serde_json::to_value(&repr).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_parse_post_id() {
        let id = PostId::new();
        let parsed: PostId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        let result = "not-an-id".parse::<PostId>();
        assert!(matches!(result, Err(RepoError::InvalidId(_))));
    }
}
