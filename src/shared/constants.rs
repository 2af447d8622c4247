/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Highest page number whose row offset still fits in an i64
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

/// Prefix shared by every route name, e.g. `cities-light-api-city-list`
pub const ROUTE_NAME_PREFIX: &str = "cities-light-api";
