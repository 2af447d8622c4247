use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::extractor::RequestOrigin;
use crate::features::geo::filters::ListFilter;
use crate::features::geo::links::{LinkBuilder, LinkSettings};
use crate::features::geo::models::{City, Country, Region};
use crate::features::geo::services::geo_repository::{GeoRepository, Listing};
use crate::shared::types::PaginationQuery;

/// Read-only access to countries, regions and cities
pub struct GeoService {
    repository: Arc<dyn GeoRepository>,
    links: LinkSettings,
}

impl GeoService {
    pub fn new(repository: Arc<dyn GeoRepository>, links: LinkSettings) -> Self {
        Self { repository, links }
    }

    /// Link builder for the origin of the current request
    pub fn links(&self, origin: &RequestOrigin) -> LinkBuilder {
        LinkBuilder::new(&self.links, origin)
    }

    // ==================== Country Methods ====================

    pub async fn list_countries(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Country>> {
        tracing::debug!(?filter, ?page, "Listing countries");
        self.repository.list_countries(filter, page).await
    }

    pub async fn get_country(&self, id: i32) -> Result<Country> {
        self.repository
            .find_country(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Country with id '{}' not found", id)))
    }

    // ==================== Region Methods ====================

    pub async fn list_regions(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Region>> {
        tracing::debug!(?filter, ?page, "Listing regions");
        self.repository.list_regions(filter, page).await
    }

    pub async fn get_region(&self, id: i32) -> Result<Region> {
        self.repository
            .find_region(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Region with id '{}' not found", id)))
    }

    // ==================== City Methods ====================

    pub async fn list_cities(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<City>> {
        tracing::debug!(?filter, ?page, "Listing cities");
        self.repository.list_cities(filter, page).await
    }

    pub async fn get_city(&self, id: i32) -> Result<City> {
        self.repository
            .find_city(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City with id '{}' not found", id)))
    }
}
