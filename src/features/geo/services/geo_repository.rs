use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::geo::filters::ListFilter;
use crate::features::geo::models::{City, Country, Region};
use crate::shared::types::PaginationQuery;

/// One page (or all) of the records matching a filter, with the total
/// number of matches.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Read access to the geographic tables
#[async_trait]
pub trait GeoRepository: Send + Sync {
    async fn list_countries(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Country>>;

    async fn find_country(&self, id: i32) -> Result<Option<Country>>;

    async fn list_regions(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Region>>;

    async fn find_region(&self, id: i32) -> Result<Option<Region>>;

    async fn list_cities(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<City>>;

    async fn find_city(&self, id: i32) -> Result<Option<City>>;
}

struct Table {
    name: &'static str,
    columns: &'static str,
}

const COUNTRY_TABLE: Table = Table {
    name: "cities_light_country",
    columns: "id, name, name_ascii, slug, geoname_id, alternate_names, \
              code2, code3, continent, tld, phone",
};

const REGION_TABLE: Table = Table {
    name: "cities_light_region",
    columns: "id, name, name_ascii, geoname_id, alternate_names, \
              display_name, geoname_code, country_id",
};

const CITY_TABLE: Table = Table {
    name: "cities_light_city",
    columns: "id, name, name_ascii, geoname_id, alternate_names, \
              display_name, search_names, latitude, longitude, population, \
              feature_code, timezone, region_id, country_id",
};

fn count_query(table: &Table, filter: &ListFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", table.name));
    filter.push_where(&mut builder);
    builder
}

fn select_query(
    table: &Table,
    filter: &ListFilter,
    page: Option<PaginationQuery>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new(format!("SELECT {} FROM {}", table.columns, table.name));
    filter.push_where(&mut builder);
    builder.push(" ORDER BY name ASC, id ASC");

    if let Some(page) = page {
        builder
            .push(" LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
    }

    builder
}

/// [`GeoRepository`] backed by PostgreSQL
pub struct PgGeoRepository {
    pool: PgPool,
}

impl PgGeoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_listing<T>(
        &self,
        table: &Table,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let total: i64 = count_query(table, filter)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count rows of {}: {:?}", table.name, e);
                AppError::Database(e)
            })?;

        let items = select_query(table, filter, page)
            .build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch rows of {}: {:?}", table.name, e);
                AppError::Database(e)
            })?;

        Ok(Listing { items, total })
    }

    async fn fetch_by_id<T>(&self, table: &Table, id: i32) -> Result<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", table.columns, table.name);

        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} by id {}: {:?}", table.name, id, e);
                AppError::Database(e)
            })
    }
}

#[async_trait]
impl GeoRepository for PgGeoRepository {
    async fn list_countries(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Country>> {
        self.fetch_listing(&COUNTRY_TABLE, filter, page).await
    }

    async fn find_country(&self, id: i32) -> Result<Option<Country>> {
        self.fetch_by_id(&COUNTRY_TABLE, id).await
    }

    async fn list_regions(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Region>> {
        self.fetch_listing(&REGION_TABLE, filter, page).await
    }

    async fn find_region(&self, id: i32) -> Result<Option<Region>> {
        self.fetch_by_id(&REGION_TABLE, id).await
    }

    async fn list_cities(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<City>> {
        self.fetch_listing(&CITY_TABLE, filter, page).await
    }

    async fn find_city(&self, id: i32) -> Result<Option<City>> {
        self.fetch_by_id(&CITY_TABLE, id).await
    }
}
