use serde::Serialize;
use sqlx::FromRow;

/// Country row from `cities_light_country`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
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
