use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating the API mount path
    /// One or more `/`-prefixed segments of letters, digits, `_` or `-`
    /// - Valid: "/cities_light/api", "/geo", "/api/v1"
    /// - Invalid: "api", "/api/", "/api//v1", "/a b"
    pub static ref MOUNT_PATH_REGEX: Regex = Regex::new(r"^(?:/[A-Za-z0-9_-]+)+$").unwrap();
}
