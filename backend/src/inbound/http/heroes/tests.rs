//! Tests for hero catalogue handlers.

use actix_web::{http::StatusCode, test as actix_test};
use rstest::rstest;
use serde_json::{json, Value};

use crate::inbound::http::test_utils::{sample_heroes, test_app};

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("json body")
}

fn item_names(value: &Value) -> Vec<&str> {
    value["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["name"].as_str().expect("name"))
        .collect()
}

#[rstest]
#[actix_rt::test]
async fn list_heroes_returns_sorted_first_page() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::get().uri("/heroes").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = read_json(response).await;
    let names = item_names(&value);
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Ant-Man");
    assert_eq!(value["page"], 1);
    assert_eq!(value["pageSize"], 10);
    assert_eq!(value["totalCount"], 12);
    assert_eq!(value["totalPages"], 2);
}

#[rstest]
#[actix_rt::test]
async fn list_heroes_second_page_holds_the_remainder() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::get()
        .uri("/heroes?page=2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = read_json(response).await;
    assert_eq!(item_names(&value), vec!["Vision", "Zatanna"]);
    assert_eq!(value["page"], 2);
}

#[rstest]
#[case("/heroes?page=0", "GET", None)]
#[case("/heroes?page=-1", "GET", None)]
#[case("/heroes?page=abc", "GET", None)]
#[case("/search/heroes/by-name?page=0", "POST", Some(json!({ "query": "" })))]
#[case("/search/heroes/by-min-stats?page=0", "POST", Some(json!({})))]
#[case("/heroes/70/comments?page=0", "GET", None)]
#[actix_rt::test]
async fn invalid_page_is_rejected_on_every_paginated_endpoint(
    #[case] uri: &str,
    #[case] method: &str,
    #[case] body: Option<Value>,
) {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let mut request = match method {
        "POST" => actix_test::TestRequest::post().uri(uri),
        _ => actix_test::TestRequest::get().uri(uri),
    };
    if let Some(body) = body {
        request = request.set_json(body);
    }

    let response = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = read_json(response).await;
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["details"]["code"], "invalid_page");
}

#[rstest]
#[actix_rt::test]
async fn get_hero_wraps_the_hero_in_its_envelope() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::get().uri("/heroes/70").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = read_json(response).await;
    assert_eq!(value["hero"]["id"], "70");
    assert_eq!(value["hero"]["name"], "Flash");
    assert_eq!(value["hero"]["powerstats"]["speed"], 100);
}

#[rstest]
#[actix_rt::test]
async fn get_unknown_hero_is_not_found() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::get()
        .uri("/heroes/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let value = read_json(response).await;
    assert_eq!(value["code"], "not_found");
}

#[rstest]
#[actix_rt::test]
async fn name_search_is_case_insensitive_and_anchored() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-name")
        .set_json(json!({ "query": "FLA" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = read_json(response).await;
    // Anchored: "Inflammable" contains but does not start with "fla".
    assert_eq!(item_names(&value), vec!["Flash"]);
    assert_eq!(value["totalCount"], 1);
}

#[rstest]
#[actix_rt::test]
async fn name_search_with_empty_query_matches_everything() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-name")
        .set_json(json!({ "query": "" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    let value = read_json(response).await;
    assert_eq!(value["totalCount"], 12);
}

#[rstest]
#[actix_rt::test]
async fn name_search_without_query_field_is_rejected() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-name")
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = read_json(response).await;
    assert_eq!(value["details"]["code"], "missing_field");
    assert_eq!(value["details"]["field"], "query");
}

#[rstest]
#[actix_rt::test]
async fn unknown_body_fields_are_rejected_with_the_envelope() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-name")
        .set_json(json!({ "query": "fla", "fuzzy": true }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = read_json(response).await;
    assert_eq!(value["code"], "invalid_request");
}

#[rstest]
#[actix_rt::test]
async fn min_stats_search_requires_every_threshold() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-min-stats")
        .set_json(json!({ "speed": 100, "intelligence": 95 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = read_json(response).await;
    // Flash has speed 100 but intelligence 63; only Quicksilver clears both.
    assert_eq!(item_names(&value), vec!["Quicksilver"]);
}

#[rstest]
#[actix_rt::test]
async fn min_stats_search_with_empty_body_matches_everything() {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-min-stats")
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    let value = read_json(response).await;
    assert_eq!(value["totalCount"], 12);
}

#[rstest]
#[case(json!({ "speed": "fast" }))]
#[case(json!({ "speed": -3 }))]
#[case(json!({ "speed": 1.5 }))]
#[actix_rt::test]
async fn malformed_thresholds_are_rejected(#[case] body: Value) {
    let app = actix_test::init_service(test_app(sample_heroes())).await;

    let request = actix_test::TestRequest::post()
        .uri("/search/heroes/by-min-stats")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = read_json(response).await;
    assert_eq!(value["code"], "invalid_request");
}
