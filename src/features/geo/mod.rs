//! Countries, regions and cities (cities_light data model).
//!
//! Read-only, hyperlinked access to the geographic tables.
//!
//! ## Data Hierarchy
//!
//! - Country
//! - Region (belongs to one country)
//! - City (belongs to one region, and through it to one country)
//!
//! ## Endpoints
//!
//! Paths are relative to the configured mount point (`/cities_light/api` by
//! default).
//!
//! | Method | Endpoint | Query | Route name |
//! |--------|----------|-------|------------|
//! | GET | `/cities/` | `q`, `region_id` | `cities-light-api-city-list` |
//! | GET | `/cities/{id}/` | | `cities-light-api-city-detail` |
//! | GET | `/countries/` | `q` | `cities-light-api-country-list` |
//! | GET | `/countries/{id}/` | | `cities-light-api-country-detail` |
//! | GET | `/regions/` | `q`, `country_id` | `cities-light-api-region-list` |
//! | GET | `/regions/{id}/` | | `cities-light-api-region-detail` |
//!
//! List endpoints also take `page` and `page_size`; without them the whole
//! filtered list is returned.

pub mod dtos;
pub mod filters;
pub mod handlers;
pub mod links;
pub mod models;
pub mod routes;
pub mod services;

pub use links::LinkSettings;
pub use services::{GeoService, PgGeoRepository};
