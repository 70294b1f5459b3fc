//! Shared fixtures for integration suites: an in-memory document store,
//! catalogue seeding, and a fully wired application.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use serde::Serialize;

use backend::domain::{CommentService, HeroQueryService, Powerstats};
use backend::inbound::http;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    self, Db, StoreConfig, SurrealCommentRepository, SurrealHeroRepository,
};

/// Open a fresh in-memory store with the schema applied.
pub async fn mem_db() -> Db {
    let config = StoreConfig {
        url: "mem://".into(),
        namespace: "herodex".into(),
        database: "test".into(),
    };
    let db = persistence::connect(&config).await.expect("open mem store");
    persistence::init_schema(&db).await.expect("apply schema");
    db
}

#[derive(Debug, Serialize)]
struct HeroSeed {
    original_id: String,
    name: String,
    powerstats: Powerstats,
}

/// Insert one hero the way the external import would.
pub async fn seed_hero(db: &Db, original_id: &str, name: &str, powerstats: Powerstats) {
    let seed = HeroSeed {
        original_id: original_id.into(),
        name: name.into(),
        powerstats,
    };
    db.query("CREATE hero CONTENT $hero")
        .bind(("hero", seed))
        .await
        .expect("seed hero")
        .check()
        .expect("seed hero");
}

/// Stat block with only speed and intelligence set.
pub fn stats(speed: u32, intelligence: u32) -> Powerstats {
    Powerstats {
        speed,
        intelligence,
        ..Powerstats::default()
    }
}

/// Twelve heroes chosen to exercise sorting, two-page listings, anchored
/// prefix matching, literal metacharacters, and stat thresholds.
pub async fn seed_catalogue(db: &Db) {
    let heroes = [
        ("1", "Ant-Man", stats(40, 70)),
        ("2", "Batman", stats(27, 100)),
        ("3", "Cyborg", stats(75, 75)),
        ("4", "Dot.Man", stats(20, 30)),
        ("5", "Dotty", stats(25, 35)),
        ("6", "Falcon", stats(60, 55)),
        ("70", "Flash", stats(100, 63)),
        ("8", "Inflammable", stats(45, 40)),
        ("9", "Quicksilver", stats(100, 95)),
        ("10", "Rogue", stats(50, 60)),
        ("11", "Vision", stats(80, 90)),
        ("12", "Zatanna", stats(30, 85)),
    ];
    for (id, name, powerstats) in heroes {
        seed_hero(db, id, name, powerstats).await;
    }
}

/// The full application wired over a real store handle.
pub fn store_backed_app(
    db: Db,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let heroes = Arc::new(SurrealHeroRepository::new(db.clone()));
    let comments = Arc::new(SurrealCommentRepository::new(db));
    let state = web::Data::new(HttpState::new(
        Arc::new(HeroQueryService::new(heroes.clone())),
        Arc::new(CommentService::new(heroes, comments)),
    ));
    App::new().app_data(state).configure(http::configure)
}
