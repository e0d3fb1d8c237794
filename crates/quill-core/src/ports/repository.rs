use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Post repository - the store capabilities the router depends on.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError>;

    /// Persist a new post. The store assigns id and creation time.
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite the present fields and return the post as stored afterwards.
    async fn update_by_id(
        &self,
        id: &PostId,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Removing an absent post succeeds.
    async fn delete_by_id(&self, id: &PostId) -> Result<(), RepoError>;
}
