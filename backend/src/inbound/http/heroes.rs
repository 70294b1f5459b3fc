//! Hero catalogue HTTP handlers.
//!
//! ```text
//! GET  /heroes
//! GET  /heroes/{id}
//! POST /search/heroes/by-name
//! POST /search/heroes/by-min-stats
//! ```

use actix_web::{get, post, web, HttpResponse};
use pagination::PageEnvelope;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Hero, Powerstats, StatThresholds};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{missing_field_error, parse_hero_id, parse_page};
use crate::inbound::http::ApiResult;

/// Query parameters accepted by every paginated endpoint.
///
/// `page` is kept as a raw string so that non-numeric input surfaces as the
/// standard validation envelope instead of actix's extractor error.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// 1-indexed page number; defaults to the first page when absent.
    pub page: Option<String>,
}

/// One hero as returned over the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroDto {
    /// External hero identifier.
    #[schema(example = "70")]
    pub id: String,
    /// Hero display name.
    #[schema(example = "Flash")]
    pub name: String,
    /// The hero's stat block.
    pub powerstats: Powerstats,
}

impl From<Hero> for HeroDto {
    fn from(value: Hero) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            powerstats: value.powerstats,
        }
    }
}

/// Listing envelope for hero pages.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroPageResponse {
    /// The sorted window for this page.
    pub items: Vec<HeroDto>,
    /// 1-indexed page number.
    pub page: u64,
    /// Fixed page size for hero listings.
    pub page_size: u64,
    /// Size of the full matching set.
    pub total_count: u64,
    /// Number of pages in the full matching set.
    pub total_pages: u64,
}

impl From<PageEnvelope<Hero>> for HeroPageResponse {
    fn from(value: PageEnvelope<Hero>) -> Self {
        let envelope = value.map(HeroDto::from);
        Self {
            items: envelope.items,
            page: envelope.page,
            page_size: envelope.page_size,
            total_count: envelope.total_count,
            total_pages: envelope.total_pages,
        }
    }
}

/// Single-hero envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct HeroResponse {
    /// The requested hero.
    pub hero: HeroDto,
}

/// Request body for prefix search.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NameSearchRequest {
    /// Literal name prefix; the empty string matches every hero.
    #[schema(example = "fla")]
    pub query: Option<String>,
}

/// Request body for minimum-stat search. Absent fields are unconstrained.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MinStatsRequest {
    /// Minimum intelligence.
    pub intelligence: Option<u32>,
    /// Minimum strength.
    pub strength: Option<u32>,
    /// Minimum speed.
    pub speed: Option<u32>,
    /// Minimum durability.
    pub durability: Option<u32>,
    /// Minimum power.
    pub power: Option<u32>,
    /// Minimum combat.
    pub combat: Option<u32>,
}

impl From<MinStatsRequest> for StatThresholds {
    fn from(value: MinStatsRequest) -> Self {
        Self {
            intelligence: value.intelligence,
            strength: value.strength,
            speed: value.speed,
            durability: value.durability,
            power: value.power,
            combat: value.combat,
        }
    }
}

/// List heroes, sorted by name and paginated.
#[utoipa::path(
    get,
    path = "/heroes",
    params(("page" = Option<String>, Query, description = "1-indexed page number")),
    responses(
        (status = 200, description = "One page of heroes", body = HeroPageResponse),
        (status = 400, description = "Invalid page number", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["heroes"],
    operation_id = "listHeroes"
)]
#[get("/heroes")]
pub async fn list_heroes(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<HttpResponse> {
    let page = parse_page(params.page.as_deref())?;
    let envelope = state.heroes.list(page).await?;
    Ok(HttpResponse::Ok().json(HeroPageResponse::from(envelope)))
}

/// Fetch a single hero by external id.
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    params(("id" = String, Path, description = "External hero id")),
    responses(
        (status = 200, description = "The hero", body = HeroResponse),
        (status = 404, description = "Unknown hero", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["heroes"],
    operation_id = "getHero"
)]
#[get("/heroes/{id}")]
pub async fn get_hero(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_hero_id(&path.into_inner())?;
    let hero = state.heroes.fetch(&id).await?;
    Ok(HttpResponse::Ok().json(HeroResponse {
        hero: HeroDto::from(hero),
    }))
}

/// Search heroes whose names start with the supplied literal prefix,
/// case-insensitively.
#[utoipa::path(
    post,
    path = "/search/heroes/by-name",
    params(("page" = Option<String>, Query, description = "1-indexed page number")),
    request_body = NameSearchRequest,
    responses(
        (status = 200, description = "Matching heroes", body = HeroPageResponse),
        (status = 400, description = "Invalid page or body", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["heroes"],
    operation_id = "searchHeroesByName"
)]
#[post("/search/heroes/by-name")]
pub async fn search_heroes_by_name(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
    body: web::Json<NameSearchRequest>,
) -> ApiResult<HttpResponse> {
    let page = parse_page(params.page.as_deref())?;
    let query = body
        .into_inner()
        .query
        .ok_or_else(|| missing_field_error("query"))?;
    let envelope = state.heroes.search_by_name_prefix(&query, page).await?;
    Ok(HttpResponse::Ok().json(HeroPageResponse::from(envelope)))
}

/// Search heroes whose stat block meets every supplied minimum.
#[utoipa::path(
    post,
    path = "/search/heroes/by-min-stats",
    params(("page" = Option<String>, Query, description = "1-indexed page number")),
    request_body = MinStatsRequest,
    responses(
        (status = 200, description = "Matching heroes", body = HeroPageResponse),
        (status = 400, description = "Invalid page or body", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["heroes"],
    operation_id = "searchHeroesByMinStats"
)]
#[post("/search/heroes/by-min-stats")]
pub async fn search_heroes_by_min_stats(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
    body: web::Json<MinStatsRequest>,
) -> ApiResult<HttpResponse> {
    let page = parse_page(params.page.as_deref())?;
    let thresholds = StatThresholds::from(body.into_inner());
    let envelope = state.heroes.search_by_min_stats(thresholds, page).await?;
    Ok(HttpResponse::Ok().json(HeroPageResponse::from(envelope)))
}

#[cfg(test)]
mod tests;
