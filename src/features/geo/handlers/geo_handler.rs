use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, AppQuery, RequestOrigin};
use crate::features::geo::dtos::{
    CityListQuery, CityResponseDto, CountryListQuery, CountryResponseDto, RegionListQuery,
    RegionResponseDto,
};
use crate::features::geo::services::GeoService;
use crate::shared::types::{ApiResponse, Meta};

// ==================== City Handlers ====================

/// List cities
#[utoipa::path(
    get,
    path = "/cities/",
    operation_id = "cities-light-api-city-list",
    params(CityListQuery),
    responses(
        (status = 200, description = "Cities matching the filters", body = ApiResponse<Vec<CityResponseDto>>),
        (status = 400, description = "Malformed query parameter")
    ),
    tag = "cities"
)]
pub async fn list_cities(
    State(service): State<Arc<GeoService>>,
    origin: RequestOrigin,
    AppQuery(query): AppQuery<CityListQuery>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let listing = service
        .list_cities(&query.filter(), query.pagination())
        .await?;
    let links = service.links(&origin);
    let dtos: Vec<CityResponseDto> = listing
        .items
        .into_iter()
        .map(|city| CityResponseDto::from_model(city, &links))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta {
            total: listing.total,
        }),
    )))
}

/// Get a city by id
#[utoipa::path(
    get,
    path = "/cities/{id}/",
    operation_id = "cities-light-api-city-detail",
    params(
        ("id" = i32, Path, description = "City id")
    ),
    responses(
        (status = 200, description = "City details", body = ApiResponse<CityResponseDto>),
        (status = 404, description = "City not found")
    ),
    tag = "cities"
)]
pub async fn get_city(
    State(service): State<Arc<GeoService>>,
    origin: RequestOrigin,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let city = service.get_city(id).await?;
    let links = service.links(&origin);
    Ok(Json(ApiResponse::success(
        Some(CityResponseDto::from_model(city, &links)),
        None,
        None,
    )))
}

// ==================== Country Handlers ====================

/// List countries
#[utoipa::path(
    get,
    path = "/countries/",
    operation_id = "cities-light-api-country-list",
    params(CountryListQuery),
    responses(
        (status = 200, description = "Countries matching the filters", body = ApiResponse<Vec<CountryResponseDto>>),
        (status = 400, description = "Malformed query parameter")
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<GeoService>>,
    origin: RequestOrigin,
    AppQuery(query): AppQuery<CountryListQuery>,
) -> Result<Json<ApiResponse<Vec<CountryResponseDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let listing = service
        .list_countries(&query.filter(), query.pagination())
        .await?;
    let links = service.links(&origin);
    let dtos: Vec<CountryResponseDto> = listing
        .items
        .into_iter()
        .map(|country| CountryResponseDto::from_model(country, &links))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta {
            total: listing.total,
        }),
    )))
}

/// Get a country by id
#[utoipa::path(
    get,
    path = "/countries/{id}/",
    operation_id = "cities-light-api-country-detail",
    params(
        ("id" = i32, Path, description = "Country id")
    ),
    responses(
        (status = 200, description = "Country details", body = ApiResponse<CountryResponseDto>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<GeoService>>,
    origin: RequestOrigin,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let country = service.get_country(id).await?;
    let links = service.links(&origin);
    Ok(Json(ApiResponse::success(
        Some(CountryResponseDto::from_model(country, &links)),
        None,
        None,
    )))
}

// ==================== Region Handlers ====================

/// List regions
#[utoipa::path(
    get,
    path = "/regions/",
    operation_id = "cities-light-api-region-list",
    params(RegionListQuery),
    responses(
        (status = 200, description = "Regions matching the filters", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Malformed query parameter")
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<GeoService>>,
    origin: RequestOrigin,
    AppQuery(query): AppQuery<RegionListQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let listing = service
        .list_regions(&query.filter(), query.pagination())
        .await?;
    let links = service.links(&origin);
    let dtos: Vec<RegionResponseDto> = listing
        .items
        .into_iter()
        .map(|region| RegionResponseDto::from_model(region, &links))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta {
            total: listing.total,
        }),
    )))
}

/// Get a region by id
#[utoipa::path(
    get,
    path = "/regions/{id}/",
    operation_id = "cities-light-api-region-detail",
    params(
        ("id" = i32, Path, description = "Region id")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<GeoService>>,
    origin: RequestOrigin,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.get_region(id).await?;
    let links = service.links(&origin);
    Ok(Json(ApiResponse::success(
        Some(RegionResponseDto::from_model(region, &links)),
        None,
        None,
    )))
}
