//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to reach the document store;
//! driving ports are the use-case surface HTTP handlers depend on. Each
//! driven trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use pagination::{PageEnvelope, PageNumber, PageSlice};
use thiserror::Error;

use super::comment::{Comment, CommentText};
use super::error::Error;
use super::hero::{Hero, HeroId, StatThresholds};

/// Filter applied to hero catalogue queries.
///
/// Centralising the filter here keeps query construction in one place: the
/// service decides *what* to match, the adapter decides *how* the store
/// expresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroFilter {
    /// No filter; the full catalogue.
    All,
    /// Case-insensitive anchored prefix match on `name`. The prefix is
    /// literal text; adapters must not interpret it as a pattern. The empty
    /// prefix matches every hero.
    NamePrefix(String),
    /// Conjunction of minimum-threshold constraints over the stat block.
    MinStats(StatThresholds),
}

/// Errors surfaced by hero store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeroStoreError {
    /// The store is unreachable or the connection failed mid-flight.
    #[error("hero store connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// A query failed during execution or decoding.
    #[error("hero store query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl HeroStoreError {
    /// Helper for connection-oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Errors surfaced by comment store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentStoreError {
    /// The store is unreachable or the connection failed mid-flight.
    #[error("comment store connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// A query or write failed during execution or decoding.
    #[error("comment store query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl CommentStoreError {
    /// Helper for connection-oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port over the hero collection.
///
/// Implementations return windows that are already sorted by `name`
/// ascending and sliced by the supplied [`PageSlice`]; ordering is the
/// adapter's contract, not the caller's.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Fetch one sorted window of heroes matching `filter`.
    async fn find_page(
        &self,
        filter: &HeroFilter,
        slice: PageSlice,
    ) -> Result<Vec<Hero>, HeroStoreError>;

    /// Count every hero matching `filter`.
    async fn count(&self, filter: &HeroFilter) -> Result<u64, HeroStoreError>;

    /// Fetch a single hero by external id.
    async fn find_by_original_id(&self, id: &HeroId) -> Result<Option<Hero>, HeroStoreError>;
}

/// Driven port over the comment collection.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a fully formed comment.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentStoreError>;

    /// Fetch one window of a hero's comments, sorted by creation time
    /// descending (newest first).
    async fn find_page_by_hero(
        &self,
        hero: &HeroId,
        slice: PageSlice,
    ) -> Result<Vec<Comment>, CommentStoreError>;

    /// Count every comment referencing `hero`.
    async fn count_by_hero(&self, hero: &HeroId) -> Result<u64, CommentStoreError>;
}

/// Driving port for hero catalogue queries.
#[async_trait]
pub trait HeroCatalogueQuery: Send + Sync {
    /// List the full catalogue, sorted by name, one page at a time.
    async fn list(&self, page: PageNumber) -> Result<PageEnvelope<Hero>, Error>;

    /// Case-insensitive literal prefix search on hero names.
    async fn search_by_name_prefix(
        &self,
        prefix: &str,
        page: PageNumber,
    ) -> Result<PageEnvelope<Hero>, Error>;

    /// Heroes whose stat block satisfies every supplied threshold.
    async fn search_by_min_stats(
        &self,
        thresholds: StatThresholds,
        page: PageNumber,
    ) -> Result<PageEnvelope<Hero>, Error>;

    /// Fetch a single hero by external id.
    async fn fetch(&self, id: &HeroId) -> Result<Hero, Error>;
}

/// Driving port for the comment flow.
#[async_trait]
pub trait CommentFeed: Send + Sync {
    /// Create a comment against an existing hero and return the stored
    /// record, identifier and timestamp included.
    async fn create(&self, hero: HeroId, text: CommentText) -> Result<Comment, Error>;

    /// A hero's comments, newest first, one page at a time.
    async fn list_by_hero(
        &self,
        hero: &HeroId,
        page: PageNumber,
    ) -> Result<PageEnvelope<Comment>, Error>;
}
