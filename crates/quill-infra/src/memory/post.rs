use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostChanges, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store backed by a vector under an async RwLock.
///
/// Keeps insertion order for listing. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == *id).cloned())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let post = Post::new(new_post);
        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn update_by_id(
        &self,
        id: &PostId,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.iter_mut().find(|p| p.id == *id) else {
            return Ok(None);
        };

        changes.apply(post);
        Ok(Some(post.clone()))
    }

    async fn delete_by_id(&self, id: &PostId) -> Result<(), RepoError> {
        self.store.write().await.retain(|p| p.id != *id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "B".to_string(),
            author: "C".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("A")).await.unwrap();

        let found = repo.find_by_id(&post.id).await.unwrap();
        assert_eq!(found, Some(post));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.insert(new_post("first")).await.unwrap();
        repo.insert(new_post("second")).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_present_fields() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("A")).await.unwrap();

        let changes = PostChanges {
            author: Some("D".to_string()),
            ..Default::default()
        };
        let updated = repo.update_by_id(&post.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.title, "A");
        assert_eq!(updated.author, "D");
        assert_eq!(updated.created, post.created);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update_by_id(&PostId::new(), PostChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("A")).await.unwrap();

        repo.delete_by_id(&post.id).await.unwrap();
        assert_eq!(repo.find_by_id(&post.id).await.unwrap(), None);

        // Deleting again is not an error
        assert!(repo.delete_by_id(&post.id).await.is_ok());
    }
}
