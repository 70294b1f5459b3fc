//! Hero catalogue query service.
//!
//! Implements the driving [`HeroCatalogueQuery`] port on top of a driven
//! [`HeroRepository`]. The service owns filter construction and page
//! arithmetic; sorting and slicing are delegated to the store adapter.

use std::num::NonZeroU64;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageEnvelope, PageNumber, PageSize};

use super::error::Error;
use super::hero::{Hero, HeroId, StatThresholds};
use super::ports::{HeroCatalogueQuery, HeroFilter, HeroRepository, HeroStoreError};

/// Fixed page size for every hero listing endpoint.
pub const HEROES_PER_PAGE: PageSize = PageSize::new(NonZeroU64::new(10).expect("non-zero"));

/// Query service over the hero catalogue.
#[derive(Clone)]
pub struct HeroQueryService {
    heroes: Arc<dyn HeroRepository>,
}

impl HeroQueryService {
    /// Create a new service backed by the given repository.
    pub fn new(heroes: Arc<dyn HeroRepository>) -> Self {
        Self { heroes }
    }

    /// Fetch one page of heroes matching `filter`: count the matching set,
    /// then fetch the sorted window for `page`.
    async fn page_of(
        &self,
        filter: HeroFilter,
        page: PageNumber,
    ) -> Result<PageEnvelope<Hero>, Error> {
        let total = self
            .heroes
            .count(&filter)
            .await
            .map_err(map_hero_store_error)?;
        let items = self
            .heroes
            .find_page(&filter, page.slice(HEROES_PER_PAGE))
            .await
            .map_err(map_hero_store_error)?;
        Ok(PageEnvelope::new(items, page, HEROES_PER_PAGE, total))
    }
}

fn map_hero_store_error(error: HeroStoreError) -> Error {
    match error {
        HeroStoreError::Connection { message } => {
            Error::service_unavailable(format!("hero store unavailable: {message}"))
        }
        HeroStoreError::Query { message } => {
            Error::internal(format!("hero store error: {message}"))
        }
    }
}

#[async_trait]
impl HeroCatalogueQuery for HeroQueryService {
    async fn list(&self, page: PageNumber) -> Result<PageEnvelope<Hero>, Error> {
        self.page_of(HeroFilter::All, page).await
    }

    async fn search_by_name_prefix(
        &self,
        prefix: &str,
        page: PageNumber,
    ) -> Result<PageEnvelope<Hero>, Error> {
        // The prefix is carried verbatim; matching literal-ness is the
        // adapter's contract.
        self.page_of(HeroFilter::NamePrefix(prefix.to_owned()), page)
            .await
    }

    async fn search_by_min_stats(
        &self,
        thresholds: StatThresholds,
        page: PageNumber,
    ) -> Result<PageEnvelope<Hero>, Error> {
        self.page_of(HeroFilter::MinStats(thresholds), page).await
    }

    async fn fetch(&self, id: &HeroId) -> Result<Hero, Error> {
        self.heroes
            .find_by_original_id(id)
            .await
            .map_err(map_hero_store_error)?
            .ok_or_else(|| Error::not_found(format!("no hero with id `{id}`")))
    }
}
