use serde::Serialize;
use sqlx::FromRow;

/// Region row from `cities_light_region`, always attached to one country
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Region {
    pub id: i32,
    pub name: String,
    pub name_ascii: String,
    pub geoname_id: Option<i32>,
    pub alternate_names: Option<String>,
    pub display_name: String,
    pub geoname_code: Option<String>,
    pub country_id: i32,
}
