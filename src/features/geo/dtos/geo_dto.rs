use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::geo::filters::{ListFilter, COUNTRY_ID, REGION_ID};
use crate::features::geo::links::{LinkBuilder, ResourceKind};
use crate::features::geo::models::{City, Country, Region};
use crate::shared::constants::MAX_PAGE;
use crate::shared::types::{empty_string_as_none, PaginationQuery};

// ==================== Query DTOs ====================

/// Query parameters for listing countries
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct CountryListQuery {
    /// Case-insensitive substring of the ASCII name
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = "fran")]
    pub q: Option<String>,

    /// Page number (1-indexed). Omit both page parameters for the full list
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = MAX_PAGE, message = "page is out of range"))]
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl CountryListQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter::search(self.q.as_deref())
    }

    pub fn pagination(&self) -> Option<PaginationQuery> {
        PaginationQuery::from_params(self.page, self.page_size)
    }
}

/// Query parameters for listing regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct RegionListQuery {
    /// Case-insensitive substring of the ASCII name
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = "provence")]
    pub q: Option<String>,

    /// Only regions of this country
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub country_id: Option<i32>,

    /// Page number (1-indexed). Omit both page parameters for the full list
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = MAX_PAGE, message = "page is out of range"))]
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl RegionListQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter::search(self.q.as_deref()).exact(COUNTRY_ID, self.country_id)
    }

    pub fn pagination(&self) -> Option<PaginationQuery> {
        PaginationQuery::from_params(self.page, self.page_size)
    }
}

/// Query parameters for listing cities
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct CityListQuery {
    /// Case-insensitive substring of the ASCII name
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = "paris")]
    pub q: Option<String>,

    /// Only cities of this region
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub region_id: Option<i32>,

    /// Page number (1-indexed). Omit both page parameters for the full list
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = MAX_PAGE, message = "page is out of range"))]
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl CityListQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter::search(self.q.as_deref()).exact(REGION_ID, self.region_id)
    }

    pub fn pagination(&self) -> Option<PaginationQuery> {
        PaginationQuery::from_params(self.page, self.page_size)
    }
}

// ==================== Response DTOs ====================

/// Country representation. Carries every column of the country table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryResponseDto {
    /// Link to this country
    pub url: String,
    pub id: i32,
    pub name: String,
    pub name_ascii: String,
    pub slug: String,
    pub geoname_id: Option<i32>,
    pub alternate_names: Option<String>,
    pub code2: Option<String>,
    pub code3: Option<String>,
    pub continent: String,
    pub tld: String,
    pub phone: Option<String>,
}

impl CountryResponseDto {
    pub fn from_model(country: Country, links: &LinkBuilder) -> Self {
        Self {
            url: links.detail_url(ResourceKind::Country, country.id),
            id: country.id,
            name: country.name,
            name_ascii: country.name_ascii,
            slug: country.slug,
            geoname_id: country.geoname_id,
            alternate_names: country.alternate_names,
            code2: country.code2,
            code3: country.code3,
            continent: country.continent,
            tld: country.tld,
            phone: country.phone,
        }
    }
}

/// Region representation. The parent country is referenced by URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    /// Link to this region
    pub url: String,
    pub id: i32,
    pub name: String,
    pub name_ascii: String,
    pub geoname_id: Option<i32>,
    pub alternate_names: Option<String>,
    pub display_name: String,
    pub geoname_code: Option<String>,
    /// Link to the parent country
    pub country: String,
}

impl RegionResponseDto {
    pub fn from_model(region: Region, links: &LinkBuilder) -> Self {
        Self {
            url: links.detail_url(ResourceKind::Region, region.id),
            id: region.id,
            name: region.name,
            name_ascii: region.name_ascii,
            geoname_id: region.geoname_id,
            alternate_names: region.alternate_names,
            display_name: region.display_name,
            geoname_code: region.geoname_code,
            country: links.detail_url(ResourceKind::Country, region.country_id),
        }
    }
}

/// City representation. Region and country are referenced by URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityResponseDto {
    /// Link to this city
    pub url: String,
    pub id: i32,
    pub name: String,
    pub name_ascii: String,
    pub geoname_id: Option<i32>,
    pub alternate_names: Option<String>,
    pub display_name: String,
    pub search_names: String,
    #[schema(value_type = Option<String>, example = "48.85341")]
    pub latitude: Option<Decimal>,
    #[schema(value_type = Option<String>, example = "2.34880")]
    pub longitude: Option<Decimal>,
    pub population: Option<i64>,
    pub feature_code: Option<String>,
    pub timezone: Option<String>,
    /// Link to the parent region
    pub region: String,
    /// Link to the country
    pub country: String,
}

impl CityResponseDto {
    pub fn from_model(city: City, links: &LinkBuilder) -> Self {
        Self {
            url: links.detail_url(ResourceKind::City, city.id),
            id: city.id,
            name: city.name,
            name_ascii: city.name_ascii,
            geoname_id: city.geoname_id,
            alternate_names: city.alternate_names,
            display_name: city.display_name,
            search_names: city.search_names,
            latitude: city.latitude,
            longitude: city.longitude,
            population: city.population,
            feature_code: city.feature_code,
            timezone: city.timezone,
            region: links.detail_url(ResourceKind::Region, city.region_id),
            country: links.detail_url(ResourceKind::Country, city.country_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::RequestOrigin;
    use crate::features::geo::links::LinkSettings;
    use crate::shared::test_helpers::{sample_cities, sample_countries, sample_regions};

    fn links() -> LinkBuilder {
        LinkBuilder::new(
            &LinkSettings {
                public_base_url: None,
                trust_forwarded_headers: false,
                mount_path: "/api".to_string(),
            },
            &RequestOrigin::new("http://testserver"),
        )
    }

    #[test]
    fn test_region_query_maps_country_id() {
        let query = RegionListQuery {
            q: Some("pro".to_string()),
            country_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            query.filter(),
            ListFilter::search(Some("pro")).exact(COUNTRY_ID, Some(1))
        );
        assert_eq!(query.pagination(), None);
    }

    #[test]
    fn test_city_query_maps_region_id() {
        let query = CityListQuery {
            region_id: Some(10),
            page_size: Some(5),
            ..Default::default()
        };
        assert_eq!(query.filter(), ListFilter::search(None).exact(REGION_ID, Some(10)));
        assert_eq!(
            query.pagination(),
            Some(PaginationQuery {
                page: 1,
                page_size: 5
            })
        );
    }

    #[test]
    fn test_page_bounds_are_validated() {
        let query = CountryListQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = CityListQuery {
            page_size: Some(101),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = RegionListQuery {
            page: Some(1),
            page_size: Some(100),
            ..Default::default()
        };
        assert!(query.validate().is_ok());

        let query = CountryListQuery {
            page: Some(MAX_PAGE),
            ..Default::default()
        };
        assert!(query.validate().is_ok());

        let query = CountryListQuery {
            page: Some(MAX_PAGE + 1),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_country_keeps_slug() {
        let country = sample_countries().remove(0);
        let dto = serde_json::to_value(CountryResponseDto::from_model(country, &links())).unwrap();
        assert_eq!(dto["slug"], "france");
        assert_eq!(dto["url"], "http://testserver/api/countries/1/");
    }

    #[test]
    fn test_region_links_to_country_without_slug() {
        let region = sample_regions().remove(0);
        let dto = serde_json::to_value(RegionResponseDto::from_model(region, &links())).unwrap();
        assert_eq!(dto["url"], "http://testserver/api/regions/10/");
        assert_eq!(dto["country"], "http://testserver/api/countries/1/");
        assert!(dto.get("slug").is_none());
        assert!(dto.get("country_id").is_none());
    }

    #[test]
    fn test_city_links_to_region_and_country() {
        let city = sample_cities().remove(0);
        let dto = serde_json::to_value(CityResponseDto::from_model(city, &links())).unwrap();
        assert_eq!(dto["url"], "http://testserver/api/cities/100/");
        assert_eq!(dto["region"], "http://testserver/api/regions/10/");
        assert_eq!(dto["country"], "http://testserver/api/countries/1/");
        assert_eq!(dto["latitude"], "48.85341");
        assert!(dto.get("slug").is_none());
    }
}
