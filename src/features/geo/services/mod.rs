mod geo_repository;
mod geo_service;

pub use geo_repository::{GeoRepository, Listing, PgGeoRepository};
pub use geo_service::GeoService;
