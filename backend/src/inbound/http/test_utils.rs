//! In-memory fixtures shared by HTTP handler tests.
//!
//! The fixtures implement the driven ports over plain vectors so handler
//! tests exercise the real services and the real route configuration
//! without a store.

use std::sync::{Arc, Mutex};

use actix_web::{web, App};
use async_trait::async_trait;
use pagination::PageSlice;

use crate::domain::ports::{
    CommentRepository, CommentStoreError, HeroFilter, HeroRepository, HeroStoreError,
};
use crate::domain::{Comment, CommentService, Hero, HeroId, HeroQueryService, Powerstats};
use crate::inbound::http::state::HttpState;

fn window<T>(items: Vec<T>, slice: PageSlice) -> Vec<T> {
    items
        .into_iter()
        .skip(usize::try_from(slice.offset).expect("offset fits usize"))
        .take(usize::try_from(slice.limit).expect("limit fits usize"))
        .collect()
}

/// Hero store over a fixed seed, honouring the adapter's sort contract.
pub(crate) struct SeedHeroRepository {
    heroes: Vec<Hero>,
}

impl SeedHeroRepository {
    pub(crate) fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    fn matching(&self, filter: &HeroFilter) -> Vec<Hero> {
        let mut matched: Vec<Hero> = self
            .heroes
            .iter()
            .filter(|hero| match filter {
                HeroFilter::All => true,
                HeroFilter::NamePrefix(prefix) => hero
                    .name
                    .to_lowercase()
                    .starts_with(&prefix.to_lowercase()),
                HeroFilter::MinStats(thresholds) => thresholds.matches(&hero.powerstats),
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));
        matched
    }
}

#[async_trait]
impl HeroRepository for SeedHeroRepository {
    async fn find_page(
        &self,
        filter: &HeroFilter,
        slice: PageSlice,
    ) -> Result<Vec<Hero>, HeroStoreError> {
        Ok(window(self.matching(filter), slice))
    }

    async fn count(&self, filter: &HeroFilter) -> Result<u64, HeroStoreError> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn find_by_original_id(&self, id: &HeroId) -> Result<Option<Hero>, HeroStoreError> {
        Ok(self.heroes.iter().find(|hero| &hero.id == id).cloned())
    }
}

/// Comment store over a mutex-guarded vector, newest first.
#[derive(Default)]
pub(crate) struct SeedCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for SeedCommentRepository {
    async fn insert(&self, comment: &Comment) -> Result<(), CommentStoreError> {
        self.comments
            .lock()
            .expect("comments lock")
            .push(comment.clone());
        Ok(())
    }

    async fn find_page_by_hero(
        &self,
        hero: &HeroId,
        slice: PageSlice,
    ) -> Result<Vec<Comment>, CommentStoreError> {
        let mut matching: Vec<Comment> = self
            .comments
            .lock()
            .expect("comments lock")
            .iter()
            .filter(|comment| &comment.hero == hero)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(window(matching, slice))
    }

    async fn count_by_hero(&self, hero: &HeroId) -> Result<u64, CommentStoreError> {
        Ok(self
            .comments
            .lock()
            .expect("comments lock")
            .iter()
            .filter(|comment| &comment.hero == hero)
            .count() as u64)
    }
}

pub(crate) fn hero(id: &str, name: &str, speed: u32, intelligence: u32) -> Hero {
    Hero {
        id: HeroId::new(id).expect("valid id"),
        name: name.to_owned(),
        powerstats: Powerstats {
            speed,
            intelligence,
            ..Powerstats::default()
        },
    }
}

/// Twelve heroes: two pages at the hero page size, with names exercising
/// prefix anchoring and literal matching.
pub(crate) fn sample_heroes() -> Vec<Hero> {
    vec![
        hero("1", "Ant-Man", 30, 90),
        hero("2", "Batman", 27, 100),
        hero("3", "Cyborg", 75, 75),
        hero("4", "Dot.Man", 20, 20),
        hero("5", "Dotty", 21, 21),
        hero("6", "Falcon", 55, 60),
        hero("70", "Flash", 100, 63),
        hero("8", "Inflammable", 40, 40),
        hero("9", "Quicksilver", 100, 95),
        hero("10", "Rogue", 60, 55),
        hero("11", "Vision", 70, 100),
        hero("12", "Zatanna", 35, 80),
    ]
}

pub(crate) fn test_state(heroes: Vec<Hero>) -> web::Data<HttpState> {
    let hero_repo = Arc::new(SeedHeroRepository::new(heroes));
    let comment_repo = Arc::new(SeedCommentRepository::default());
    web::Data::new(HttpState::new(
        Arc::new(HeroQueryService::new(hero_repo.clone())),
        Arc::new(CommentService::new(hero_repo, comment_repo)),
    ))
}

pub(crate) fn test_app(
    heroes: Vec<Hero>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(test_state(heroes))
        .configure(crate::inbound::http::configure)
}
