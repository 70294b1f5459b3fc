//! Per-hero comment HTTP handlers.
//!
//! ```text
//! POST /heroes/{id}/comments
//! GET  /heroes/{id}/comments
//! ```

use actix_web::{get, post, web, HttpResponse};
use pagination::PageEnvelope;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{comment_timestamp, Comment, CommentText, Error};
use crate::inbound::http::heroes::PageParams;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{missing_field_error, parse_hero_id, parse_page};
use crate::inbound::http::ApiResult;

/// One comment as returned over the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    /// Comment identifier assigned at creation.
    pub id: String,
    /// External id of the commented hero.
    #[schema(example = "70")]
    pub hero: String,
    /// The comment body.
    pub text: String,
    /// Creation instant, RFC 3339 UTC.
    pub created_at: String,
}

impl From<Comment> for CommentDto {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id.to_string(),
            hero: value.hero.to_string(),
            text: String::from(value.text),
            created_at: comment_timestamp(&value.created_at),
        }
    }
}

/// Creation envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    /// The stored comment, identifier and timestamp included.
    pub comment: CommentDto,
}

/// Listing envelope for comment pages.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentPageResponse {
    /// Newest-first window for this page.
    pub items: Vec<CommentDto>,
    /// 1-indexed page number.
    pub page: u64,
    /// Fixed page size for comment listings.
    pub page_size: u64,
    /// Size of the hero's full comment set.
    pub total_count: u64,
    /// Number of pages in the hero's full comment set.
    pub total_pages: u64,
}

impl From<PageEnvelope<Comment>> for CommentPageResponse {
    fn from(value: PageEnvelope<Comment>) -> Self {
        let envelope = value.map(CommentDto::from);
        Self {
            items: envelope.items,
            page: envelope.page,
            page_size: envelope.page_size,
            total_count: envelope.total_count,
            total_pages: envelope.total_pages,
        }
    }
}

/// Request body for comment creation.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentRequest {
    /// The comment body; must be non-empty after trimming.
    #[schema(example = "Fastest man alive.")]
    pub text: Option<String>,
}

/// Create a comment against an existing hero.
#[utoipa::path(
    post,
    path = "/heroes/{id}/comments",
    params(("id" = String, Path, description = "External hero id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "The stored comment", body = CommentResponse),
        (status = 400, description = "Missing or empty text", body = ErrorSchema),
        (status = 404, description = "Unknown hero", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "createComment"
)]
#[post("/heroes/{id}/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> ApiResult<HttpResponse> {
    let hero = parse_hero_id(&path.into_inner())?;
    let raw = body
        .into_inner()
        .text
        .ok_or_else(|| missing_field_error("text"))?;
    let text = CommentText::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "text",
            "code": "empty_text",
        }))
    })?;

    let comment = state.comments.create(hero, text).await?;
    Ok(HttpResponse::Created().json(CommentResponse {
        comment: CommentDto::from(comment),
    }))
}

/// List a hero's comments, newest first.
#[utoipa::path(
    get,
    path = "/heroes/{id}/comments",
    params(
        ("id" = String, Path, description = "External hero id"),
        ("page" = Option<String>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "One page of comments", body = CommentPageResponse),
        (status = 400, description = "Invalid page number", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/heroes/{id}/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<PageParams>,
) -> ApiResult<HttpResponse> {
    let hero = parse_hero_id(&path.into_inner())?;
    let page = parse_page(params.page.as_deref())?;
    let envelope = state.comments.list_by_hero(&hero, page).await?;
    Ok(HttpResponse::Ok().json(CommentPageResponse::from(envelope)))
}
