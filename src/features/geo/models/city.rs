use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// City row from `cities_light_city`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub name_ascii: String,
    pub geoname_id: Option<i32>,
    pub alternate_names: Option<String>,
    pub display_name: String,
    pub search_names: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub population: Option<i64>,
    pub feature_code: Option<String>,
    pub timezone: Option<String>,
    pub region_id: i32,
    pub country_id: i32,
}
