//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] aggregate that generates the OpenAPI specification
//! for the REST API: every handler path from the inbound layer plus the
//! request, response, and error schemas they reference. The document is
//! consumed by external tooling; no UI is embedded in the binary.

use utoipa::OpenApi;

use crate::domain::Powerstats;
use crate::inbound::http::comments::{
    CommentDto, CommentPageResponse, CommentResponse, CreateCommentRequest,
};
use crate::inbound::http::heroes::{
    HeroDto, HeroPageResponse, HeroResponse, MinStatsRequest, NameSearchRequest,
};
use crate::inbound::http::schemas::ErrorSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Herodex API",
        description = "Paged, sorted access to a hero catalogue with per-hero comments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::heroes::list_heroes,
        crate::inbound::http::heroes::get_hero,
        crate::inbound::http::heroes::search_heroes_by_name,
        crate::inbound::http::heroes::search_heroes_by_min_stats,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::list_comments,
    ),
    components(schemas(
        HeroDto,
        HeroPageResponse,
        HeroResponse,
        NameSearchRequest,
        MinStatsRequest,
        Powerstats,
        CommentDto,
        CommentPageResponse,
        CommentResponse,
        CreateCommentRequest,
        ErrorSchema,
    )),
    tags(
        (name = "heroes", description = "Catalogue listing and search"),
        (name = "comments", description = "Per-hero comment creation and listing")
    )
)]
pub struct ApiDoc;
