//! HTTP inbound adapter exposing the REST endpoints.

pub mod comments;
pub mod error;
pub mod health;
pub mod heroes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;

use actix_web::web;

use crate::domain::Error;

/// JSON extractor configuration producing the standard error envelope for
/// malformed or unknown-shaped request bodies.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(format!("invalid request body: {err}")).into())
}

/// Query extractor configuration producing the standard error envelope.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// Register every REST endpoint plus the extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(heroes::list_heroes)
        .service(heroes::search_heroes_by_name)
        .service(heroes::search_heroes_by_min_stats)
        .service(comments::create_comment)
        .service(comments::list_comments)
        .service(heroes::get_hero);
}
