//! Domain primitives, ports, and services.
//!
//! Everything here is transport agnostic: HTTP handlers depend on the
//! driving ports in [`ports`], and the document store is reached only
//! through the driven ports implemented under `outbound::persistence`.

pub mod comment;
pub mod comment_feed;
pub mod error;
pub mod hero;
pub mod hero_queries;
pub mod ports;

pub use self::comment::{
    Comment, CommentId, CommentText, CommentTextValidationError, comment_timestamp,
};
pub use self::comment_feed::{CommentService, COMMENTS_PER_PAGE};
pub use self::error::{Error, ErrorCode};
pub use self::hero::{Hero, HeroId, HeroIdValidationError, Powerstats, StatField, StatThresholds};
pub use self::hero_queries::{HeroQueryService, HEROES_PER_PAGE};
pub use self::ports::{
    CommentFeed, CommentRepository, CommentStoreError, HeroCatalogueQuery, HeroFilter,
    HeroRepository, HeroStoreError,
};
