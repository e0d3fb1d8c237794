//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, Set};

use quill_core::domain::{NewPost, Post, PostChanges, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = Post::new(new_post).into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update_by_id(
        &self,
        id: &PostId,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active_model: post::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(content) = changes.content {
            active_model.content = Set(content);
        }
        if let Some(author) = changes.author {
            active_model.author = Set(author);
        }

        let updated = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.into()))
    }

    async fn delete_by_id(&self, id: &PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %id, rows = result.rows_affected, "Deleted post");
        Ok(())
    }
}
