use utoipa::{Modify, OpenApi};

use crate::features::geo::{dtos as geo_dtos, handlers as geo_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cities
        geo_handlers::list_cities,
        geo_handlers::get_city,
        // Countries
        geo_handlers::list_countries,
        geo_handlers::get_country,
        // Regions
        geo_handlers::list_regions,
        geo_handlers::get_region,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Geo
            geo_dtos::CityResponseDto,
            geo_dtos::CountryResponseDto,
            geo_dtos::RegionResponseDto,
            ApiResponse<Vec<geo_dtos::CityResponseDto>>,
            ApiResponse<geo_dtos::CityResponseDto>,
            ApiResponse<Vec<geo_dtos::CountryResponseDto>>,
            ApiResponse<geo_dtos::CountryResponseDto>,
            ApiResponse<Vec<geo_dtos::RegionResponseDto>>,
            ApiResponse<geo_dtos::RegionResponseDto>,
        )
    ),
    tags(
        (name = "cities", description = "Cities, linked to their region and country"),
        (name = "countries", description = "Countries"),
        (name = "regions", description = "Regions, linked to their country"),
    ),
    info(
        title = "Cities Light API",
        version = "0.1.0",
        description = "Read-only access to countries, regions and cities",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Prefixes every documented path with the configured mount point
pub struct MountPathModifier {
    pub mount_path: String,
}

impl Modify for MountPathModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if self.mount_path.is_empty() {
            return;
        }

        let paths = std::mem::take(&mut openapi.paths.paths);
        openapi.paths.paths = paths
            .into_iter()
            .map(|(path, item)| (format!("{}{}", self.mount_path, path), item))
            .collect();
    }
}

/// OpenAPI document with config overrides applied
pub fn build_openapi(
    info: SwaggerInfoModifier,
    mount: MountPathModifier,
) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    info.modify(&mut openapi);
    mount.modify(&mut openapi);
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(mount_path: &str) -> utoipa::openapi::OpenApi {
        build_openapi(
            SwaggerInfoModifier {
                title: "Geo".to_string(),
                version: "9.9.9".to_string(),
                description: "docs".to_string(),
            },
            MountPathModifier {
                mount_path: mount_path.to_string(),
            },
        )
    }

    #[test]
    fn test_paths_are_mounted() {
        let openapi = document("/cities_light/api");
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();
        assert_eq!(
            paths,
            vec![
                "/cities_light/api/cities/",
                "/cities_light/api/cities/{id}/",
                "/cities_light/api/countries/",
                "/cities_light/api/countries/{id}/",
                "/cities_light/api/regions/",
                "/cities_light/api/regions/{id}/",
            ]
        );
    }

    #[test]
    fn test_root_mount_keeps_paths() {
        let openapi = document("");
        assert!(openapi.paths.paths.contains_key("/cities/"));
    }

    #[test]
    fn test_info_override() {
        let openapi = document("");
        assert_eq!(openapi.info.title, "Geo");
        assert_eq!(openapi.info.version, "9.9.9");
    }
}
