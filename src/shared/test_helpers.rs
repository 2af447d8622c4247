use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::features::geo::filters::{ListFilter, COUNTRY_ID, REGION_ID};
use crate::features::geo::links::LinkSettings;
use crate::features::geo::models::{City, Country, Region};
use crate::features::geo::services::{GeoRepository, GeoService, Listing};
use crate::shared::types::PaginationQuery;

fn country(id: i32, name: &str, name_ascii: &str, code2: &str, continent: &str) -> Country {
    Country {
        id,
        name: name.to_string(),
        name_ascii: name_ascii.to_string(),
        slug: name_ascii.to_lowercase().replace(['\'', ' '], "-"),
        geoname_id: Some(id * 1000),
        alternate_names: Some(String::new()),
        code2: Some(code2.to_string()),
        code3: None,
        continent: continent.to_string(),
        tld: code2.to_lowercase(),
        phone: None,
    }
}

fn region(id: i32, name: &str, name_ascii: &str, country_id: i32, country: &str) -> Region {
    Region {
        id,
        name: name.to_string(),
        name_ascii: name_ascii.to_string(),
        geoname_id: Some(id * 1000),
        alternate_names: None,
        display_name: format!("{}, {}", name, country),
        geoname_code: None,
        country_id,
    }
}

fn city(
    id: i32,
    name: &str,
    name_ascii: &str,
    region_id: i32,
    country_id: i32,
    coordinates: (Decimal, Decimal),
) -> City {
    City {
        id,
        name: name.to_string(),
        name_ascii: name_ascii.to_string(),
        geoname_id: Some(id * 1000),
        alternate_names: None,
        display_name: name.to_string(),
        search_names: name_ascii.to_lowercase(),
        latitude: Some(coordinates.0),
        longitude: Some(coordinates.1),
        population: Some(i64::from(id) * 1_000),
        feature_code: Some("PPL".to_string()),
        timezone: Some("Europe/Paris".to_string()),
        region_id,
        country_id,
    }
}

pub fn sample_countries() -> Vec<Country> {
    vec![
        country(1, "France", "France", "FR", "EU"),
        country(2, "Germany", "Germany", "DE", "EU"),
        country(3, "Côte d'Ivoire", "Cote d'Ivoire", "CI", "AF"),
    ]
}

pub fn sample_regions() -> Vec<Region> {
    vec![
        region(10, "Île-de-France", "Ile-de-France", 1, "France"),
        region(
            11,
            "Provence-Alpes-Côte d'Azur",
            "Provence-Alpes-Cote d'Azur",
            1,
            "France",
        ),
        region(20, "Bavaria", "Bavaria", 2, "Germany"),
    ]
}

pub fn sample_cities() -> Vec<City> {
    vec![
        city(
            100,
            "Paris",
            "Paris",
            10,
            1,
            (Decimal::new(4885341, 5), Decimal::new(234880, 5)),
        ),
        city(
            101,
            "Saint-Denis",
            "Saint-Denis",
            10,
            1,
            (Decimal::new(4893564, 5), Decimal::new(235387, 5)),
        ),
        city(
            102,
            "Marseille",
            "Marseille",
            11,
            1,
            (Decimal::new(4329695, 5), Decimal::new(538107, 5)),
        ),
        city(
            103,
            "Parsberg",
            "Parsberg",
            20,
            2,
            (Decimal::new(4916019, 5), Decimal::new(1171667, 5)),
        ),
        city(
            104,
            "München",
            "Munchen",
            20,
            2,
            (Decimal::new(4813743, 5), Decimal::new(1157549, 5)),
        ),
    ]
}

/// Row-level access the in-memory filter needs
trait Record: Clone {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn name_ascii(&self) -> &str;
    fn column(&self, column: &str) -> Option<i32>;
}

impl Record for Country {
    fn id(&self) -> i32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn name_ascii(&self) -> &str {
        &self.name_ascii
    }
    fn column(&self, _column: &str) -> Option<i32> {
        None
    }
}

impl Record for Region {
    fn id(&self) -> i32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn name_ascii(&self) -> &str {
        &self.name_ascii
    }
    fn column(&self, column: &str) -> Option<i32> {
        match column {
            COUNTRY_ID => Some(self.country_id),
            _ => None,
        }
    }
}

impl Record for City {
    fn id(&self) -> i32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn name_ascii(&self) -> &str {
        &self.name_ascii
    }
    fn column(&self, column: &str) -> Option<i32> {
        match column {
            COUNTRY_ID => Some(self.country_id),
            REGION_ID => Some(self.region_id),
            _ => None,
        }
    }
}

fn matches<T: Record>(record: &T, filter: &ListFilter) -> bool {
    let search_ok = filter.search.as_ref().map_or(true, |term| {
        record
            .name_ascii()
            .to_lowercase()
            .contains(&term.to_lowercase())
    });

    search_ok
        && filter
            .exact
            .iter()
            .all(|f| record.column(f.column) == Some(f.value))
}

fn listing<T: Record>(
    records: &[T],
    filter: &ListFilter,
    page: Option<PaginationQuery>,
) -> Listing<T> {
    let mut items: Vec<T> = records
        .iter()
        .filter(|r| matches(*r, filter))
        .cloned()
        .collect();
    items.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));

    let total = items.len() as i64;
    let items = match page {
        Some(page) => items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect(),
        None => items,
    };

    Listing { items, total }
}

fn find<T: Record>(records: &[T], id: i32) -> Option<T> {
    records.iter().find(|r| r.id() == id).cloned()
}

/// [`GeoRepository`] over fixed in-memory fixtures
pub struct InMemoryGeoRepository {
    countries: Vec<Country>,
    regions: Vec<Region>,
    cities: Vec<City>,
}

impl InMemoryGeoRepository {
    pub fn new(countries: Vec<Country>, regions: Vec<Region>, cities: Vec<City>) -> Self {
        Self {
            countries,
            regions,
            cities,
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_countries(), sample_regions(), sample_cities())
    }
}

#[async_trait]
impl GeoRepository for InMemoryGeoRepository {
    async fn list_countries(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Country>> {
        Ok(listing(&self.countries, filter, page))
    }

    async fn find_country(&self, id: i32) -> Result<Option<Country>> {
        Ok(find(&self.countries, id))
    }

    async fn list_regions(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<Region>> {
        Ok(listing(&self.regions, filter, page))
    }

    async fn find_region(&self, id: i32) -> Result<Option<Region>> {
        Ok(find(&self.regions, id))
    }

    async fn list_cities(
        &self,
        filter: &ListFilter,
        page: Option<PaginationQuery>,
    ) -> Result<Listing<City>> {
        Ok(listing(&self.cities, filter, page))
    }

    async fn find_city(&self, id: i32) -> Result<Option<City>> {
        Ok(find(&self.cities, id))
    }
}

pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        public_base_url: None,
        trust_forwarded_headers: false,
        mount_path: "/cities_light/api".to_string(),
    }
}

/// Service over the sample fixtures, linking the way `config` says
pub fn test_geo_service(config: &AppConfig) -> Arc<GeoService> {
    Arc::new(GeoService::new(
        Arc::new(InMemoryGeoRepository::sample()),
        LinkSettings::from(config),
    ))
}
