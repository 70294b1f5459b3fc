//! Comment creation and listing service.
//!
//! Implements the driving [`CommentFeed`] port. Creation verifies the
//! referenced hero exists before writing; listing treats the reference as
//! weak and simply returns an empty page for unknown heroes.

use std::num::NonZeroU64;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pagination::{PageEnvelope, PageNumber, PageSize};
use tracing::debug;

use super::comment::{Comment, CommentId, CommentText};
use super::error::Error;
use super::hero::HeroId;
use super::ports::{
    CommentFeed, CommentRepository, CommentStoreError, HeroRepository, HeroStoreError,
};

/// Fixed page size for comment listings.
pub const COMMENTS_PER_PAGE: PageSize = PageSize::new(NonZeroU64::new(3).expect("non-zero"));

/// Service implementing the comment flow over hero and comment stores.
#[derive(Clone)]
pub struct CommentService {
    heroes: Arc<dyn HeroRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    /// Create a new service with the given repositories.
    pub fn new(heroes: Arc<dyn HeroRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { heroes, comments }
    }
}

fn map_hero_store_error(error: HeroStoreError) -> Error {
    match error {
        HeroStoreError::Connection { message } => {
            Error::service_unavailable(format!("hero store unavailable: {message}"))
        }
        HeroStoreError::Query { message } => Error::internal(format!("hero store error: {message}")),
    }
}

fn map_comment_store_error(error: CommentStoreError) -> Error {
    match error {
        CommentStoreError::Connection { message } => {
            Error::service_unavailable(format!("comment store unavailable: {message}"))
        }
        CommentStoreError::Query { message } => {
            Error::internal(format!("comment store error: {message}"))
        }
    }
}

#[async_trait]
impl CommentFeed for CommentService {
    async fn create(&self, hero: HeroId, text: CommentText) -> Result<Comment, Error> {
        let known = self
            .heroes
            .find_by_original_id(&hero)
            .await
            .map_err(map_hero_store_error)?;
        if known.is_none() {
            return Err(Error::not_found(format!("no hero with id `{hero}`")));
        }

        let comment = Comment {
            id: CommentId::random(),
            hero,
            text,
            created_at: Utc::now(),
        };
        self.comments
            .insert(&comment)
            .await
            .map_err(map_comment_store_error)?;
        debug!(hero = %comment.hero, comment = %comment.id, "comment created");
        Ok(comment)
    }

    async fn list_by_hero(
        &self,
        hero: &HeroId,
        page: PageNumber,
    ) -> Result<PageEnvelope<Comment>, Error> {
        let total = self
            .comments
            .count_by_hero(hero)
            .await
            .map_err(map_comment_store_error)?;
        let items = self
            .comments
            .find_page_by_hero(hero, page.slice(COMMENTS_PER_PAGE))
            .await
            .map_err(map_comment_store_error)?;
        Ok(PageEnvelope::new(items, page, COMMENTS_PER_PAGE, total))
    }
}
