//! SurrealDB adapter for the hero collection.
//!
//! Queries select scalar fields only, so record ids never cross into the
//! domain. Filters are rendered as `WHERE` fragments with every user-supplied
//! value passed as a bound parameter; nothing from the request is spliced
//! into the query text.

use async_trait::async_trait;
use pagination::PageSlice;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{
    Hero, HeroFilter, HeroId, HeroRepository, HeroStoreError, Powerstats, StatField,
};

use super::{Db, is_connection_error};

/// Hero repository backed by the document store.
#[derive(Clone)]
pub struct SurrealHeroRepository {
    db: Db,
}

impl SurrealHeroRepository {
    /// Wrap a store handle.
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[derive(Debug, Deserialize)]
struct HeroRow {
    original_id: String,
    name: String,
    powerstats: Powerstats,
}

impl TryFrom<HeroRow> for Hero {
    type Error = HeroStoreError;

    fn try_from(row: HeroRow) -> Result<Self, Self::Error> {
        let id = HeroId::new(row.original_id)
            .map_err(|err| HeroStoreError::query(format!("stored hero id is invalid: {err}")))?;
        Ok(Self {
            id,
            name: row.name,
            powerstats: row.powerstats,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: u64,
}

/// Parameter name a stat field's threshold is bound under.
fn threshold_param(field: StatField) -> &'static str {
    match field {
        StatField::Intelligence => "min_intelligence",
        StatField::Strength => "min_strength",
        StatField::Speed => "min_speed",
        StatField::Durability => "min_durability",
        StatField::Power => "min_power",
        StatField::Combat => "min_combat",
    }
}

/// Render a filter as a `WHERE` clause plus its bound parameters.
///
/// The prefix match lowercases both sides, so it is case-insensitive, and
/// compares with `string::starts_with`, so the prefix stays literal text
/// rather than a pattern. An unconstrained filter renders as no clause at
/// all.
fn where_clause(filter: &HeroFilter) -> (String, Vec<(&'static str, serde_json::Value)>) {
    match filter {
        HeroFilter::All => (String::new(), Vec::new()),
        HeroFilter::NamePrefix(prefix) => (
            "WHERE string::starts_with(string::lowercase(name), $prefix)".to_owned(),
            vec![("prefix", serde_json::Value::from(prefix.to_lowercase()))],
        ),
        HeroFilter::MinStats(thresholds) => {
            if thresholds.is_unconstrained() {
                return (String::new(), Vec::new());
            }
            let mut fragments = Vec::new();
            let mut binds = Vec::new();
            for (field, min) in thresholds.constraints() {
                let param = threshold_param(field);
                fragments.push(format!("powerstats.{field} >= ${param}"));
                binds.push((param, serde_json::Value::from(min)));
            }
            (format!("WHERE {}", fragments.join(" AND ")), binds)
        }
    }
}

impl SurrealHeroRepository {
    fn map_error(err: surrealdb::Error) -> HeroStoreError {
        if is_connection_error(&err) {
            HeroStoreError::connection(err.to_string())
        } else {
            HeroStoreError::query(err.to_string())
        }
    }
}

#[async_trait]
impl HeroRepository for SurrealHeroRepository {
    async fn find_page(
        &self,
        filter: &HeroFilter,
        slice: PageSlice,
    ) -> Result<Vec<Hero>, HeroStoreError> {
        let (clause, binds) = where_clause(filter);
        let sql = format!(
            "SELECT original_id, name, powerstats FROM hero {clause} \
             ORDER BY name ASC LIMIT $limit START $offset"
        );
        debug!(%sql, offset = slice.offset, limit = slice.limit, "hero page query");

        let mut query = self
            .db
            .query(sql)
            .bind(("limit", slice.limit))
            .bind(("offset", slice.offset));
        for (name, value) in binds {
            query = query.bind((name, value));
        }

        let rows: Vec<HeroRow> = query
            .await
            .map_err(Self::map_error)?
            .take(0)
            .map_err(Self::map_error)?;
        rows.into_iter().map(Hero::try_from).collect()
    }

    async fn count(&self, filter: &HeroFilter) -> Result<u64, HeroStoreError> {
        let (clause, binds) = where_clause(filter);
        let sql = format!("SELECT count() AS total FROM hero {clause} GROUP ALL");

        let mut query = self.db.query(sql);
        for (name, value) in binds {
            query = query.bind((name, value));
        }

        let rows: Vec<CountRow> = query
            .await
            .map_err(Self::map_error)?
            .take(0)
            .map_err(Self::map_error)?;
        // GROUP ALL over an empty set yields no row at all.
        Ok(rows.first().map_or(0, |row| row.total))
    }

    async fn find_by_original_id(&self, id: &HeroId) -> Result<Option<Hero>, HeroStoreError> {
        let rows: Vec<HeroRow> = self
            .db
            .query(
                "SELECT original_id, name, powerstats FROM hero \
                 WHERE original_id = $id LIMIT 1",
            )
            .bind(("id", id.as_str().to_owned()))
            .await
            .map_err(Self::map_error)?
            .take(0)
            .map_err(Self::map_error)?;
        rows.into_iter().next().map(Hero::try_from).transpose()
    }
}
