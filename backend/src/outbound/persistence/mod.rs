//! SurrealDB persistence adapters.
//!
//! The store is reached through the `any` engine, so the protocol is chosen
//! by the URL scheme at runtime: `ws://` or `http://` against a server,
//! `mem://` for an embedded in-memory instance in tests. Record ids stay
//! inside this module; the domain only ever sees external identifiers.

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;
use tracing::info;

mod surreal_comment_repository;
mod surreal_hero_repository;

pub use surreal_comment_repository::SurrealCommentRepository;
pub use surreal_hero_repository::SurrealHeroRepository;

/// Handle to the document store, shared by every adapter.
pub type Db = Surreal<Any>;

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Endpoint URL; the scheme selects the engine (`ws://`, `http://`,
    /// `mem://`).
    pub url: String,
    /// Namespace to select after connecting.
    pub namespace: String,
    /// Database to select after connecting.
    pub database: String,
}

/// Failures while opening the store or applying its schema.
#[derive(Debug, Error)]
pub enum StoreInitError {
    /// The endpoint could not be reached or selected.
    #[error("failed to open document store: {0}")]
    Connect(String),
    /// Schema statements failed to apply.
    #[error("failed to apply document store schema: {0}")]
    Schema(String),
}

/// Open a connection to the document store and select its namespace and
/// database.
pub async fn connect(config: &StoreConfig) -> Result<Db, StoreInitError> {
    let db = surrealdb::engine::any::connect(config.url.as_str())
        .await
        .map_err(|err| StoreInitError::Connect(err.to_string()))?;
    db.use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await
        .map_err(|err| StoreInitError::Connect(err.to_string()))?;
    info!(
        url = %config.url,
        namespace = %config.namespace,
        database = %config.database,
        "document store connected"
    );
    Ok(db)
}

/// Apply the table and index definitions both adapters rely on.
///
/// Idempotent: every statement carries `IF NOT EXISTS`, so this runs safely
/// on every startup against a store that may already hold data.
pub async fn init_schema(db: &Db) -> Result<(), StoreInitError> {
    db.query(
        r"
        DEFINE TABLE IF NOT EXISTS hero SCHEMALESS;
        DEFINE FIELD IF NOT EXISTS original_id ON hero TYPE string;
        DEFINE FIELD IF NOT EXISTS name ON hero TYPE string;
        DEFINE INDEX IF NOT EXISTS idx_hero_original_id ON hero FIELDS original_id UNIQUE;
        DEFINE INDEX IF NOT EXISTS idx_hero_name ON hero FIELDS name;

        DEFINE TABLE IF NOT EXISTS comment SCHEMALESS;
        DEFINE FIELD IF NOT EXISTS hero ON comment TYPE string;
        DEFINE FIELD IF NOT EXISTS text ON comment TYPE string;
        DEFINE FIELD IF NOT EXISTS created_at ON comment TYPE string;
        DEFINE INDEX IF NOT EXISTS idx_comment_hero ON comment FIELDS hero;
        ",
    )
    .await
    .map_err(|err| StoreInitError::Schema(err.to_string()))?
    .check()
    .map_err(|err| StoreInitError::Schema(err.to_string()))?;
    Ok(())
}

/// Whether a driver error looks like a transport failure rather than a bad
/// query. The driver's error enum is not stable across engines, so the
/// message text is the most reliable signal available.
pub(crate) fn is_connection_error(err: &surrealdb::Error) -> bool {
    let message = err.to_string().to_lowercase();
    [
        "connection",
        "websocket",
        "network",
        "timed out",
        "timeout",
        "broken pipe",
        "io error",
    ]
    .iter()
    .any(|needle| message.contains(needle))
}
