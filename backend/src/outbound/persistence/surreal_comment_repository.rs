//! SurrealDB adapter for the comment collection.
//!
//! Comments are stored under `comment:<uuid>` with the creation instant as
//! an RFC 3339 UTC string in microsecond precision, so lexicographic order
//! on `created_at` is chronological order and `ORDER BY created_at DESC`
//! needs no date parsing in the store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageSlice;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{comment_timestamp, Comment, CommentRepository, CommentStoreError, CommentText, HeroId};

use super::{Db, is_connection_error};

/// Comment repository backed by the document store.
#[derive(Clone)]
pub struct SurrealCommentRepository {
    db: Db,
}

impl SurrealCommentRepository {
    /// Wrap a store handle.
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    fn map_error(err: surrealdb::Error) -> CommentStoreError {
        if is_connection_error(&err) {
            CommentStoreError::connection(err.to_string())
        } else {
            CommentStoreError::query(err.to_string())
        }
    }
}

#[derive(Debug, Serialize)]
struct NewCommentRecord {
    hero: String,
    text: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct CommentRow {
    id: String,
    hero: String,
    text: String,
    created_at: String,
}

impl TryFrom<CommentRow> for Comment {
    type Error = CommentStoreError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|err| CommentStoreError::query(format!("stored comment id is invalid: {err}")))?;
        let hero = HeroId::new(row.hero).map_err(|err| {
            CommentStoreError::query(format!("stored comment hero reference is invalid: {err}"))
        })?;
        let text = CommentText::new(row.text)
            .map_err(|err| CommentStoreError::query(format!("stored comment text is invalid: {err}")))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|err| {
                CommentStoreError::query(format!("stored comment timestamp is invalid: {err}"))
            })?;
        Ok(Self {
            id: id.into(),
            hero,
            text,
            created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for SurrealCommentRepository {
    async fn insert(&self, comment: &Comment) -> Result<(), CommentStoreError> {
        let record = NewCommentRecord {
            hero: comment.hero.as_str().to_owned(),
            text: comment.text.as_str().to_owned(),
            created_at: comment_timestamp(&comment.created_at),
        };
        debug!(comment = %comment.id, hero = %comment.hero, "inserting comment");

        self.db
            .query("CREATE type::thing('comment', $id) CONTENT $record")
            .bind(("id", comment.id.to_string()))
            .bind(("record", record))
            .await
            .map_err(Self::map_error)?
            .check()
            .map_err(Self::map_error)?;
        Ok(())
    }

    async fn find_page_by_hero(
        &self,
        hero: &HeroId,
        slice: PageSlice,
    ) -> Result<Vec<Comment>, CommentStoreError> {
        let rows: Vec<CommentRow> = self
            .db
            .query(
                "SELECT record::id(id) AS id, hero, text, created_at FROM comment \
                 WHERE hero = $hero ORDER BY created_at DESC LIMIT $limit START $offset",
            )
            .bind(("hero", hero.as_str().to_owned()))
            .bind(("limit", slice.limit))
            .bind(("offset", slice.offset))
            .await
            .map_err(Self::map_error)?
            .take(0)
            .map_err(Self::map_error)?;
        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn count_by_hero(&self, hero: &HeroId) -> Result<u64, CommentStoreError> {
        #[derive(Debug, Deserialize)]
        struct CountRow {
            total: u64,
        }

        let rows: Vec<CountRow> = self
            .db
            .query("SELECT count() AS total FROM comment WHERE hero = $hero GROUP ALL")
            .bind(("hero", hero.as_str().to_owned()))
            .await
            .map_err(Self::map_error)?
            .take(0)
            .map_err(Self::map_error)?;
        Ok(rows.first().map_or(0, |row| row.total))
    }
}
