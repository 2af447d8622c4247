//! Route registry and hyperlink construction.
//!
//! Every resource registers a list route and a detail route. Both carry a
//! stable name (`cities-light-api-city-list`, `cities-light-api-city-detail`,
//! ...) and detail routes are what record representations link to.

use std::fmt;

use crate::core::config::AppConfig;
use crate::core::extractor::RequestOrigin;
use crate::shared::constants::ROUTE_NAME_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    City,
    Country,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAction {
    List,
    Detail,
}

impl ResourceKind {
    /// Registration order of the resources
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::City,
        ResourceKind::Country,
        ResourceKind::Region,
    ];

    /// URL segment of the resource collection
    pub fn prefix(self) -> &'static str {
        match self {
            ResourceKind::City => "cities",
            ResourceKind::Country => "countries",
            ResourceKind::Region => "regions",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::City => "city",
            ResourceKind::Country => "country",
            ResourceKind::Region => "region",
        }
    }

    /// e.g. `cities-light-api-city`
    pub fn basename(self) -> String {
        format!("{}-{}", ROUTE_NAME_PREFIX, self.singular())
    }

    pub fn route_name(self, action: RouteAction) -> String {
        format!("{}-{}", self.basename(), action)
    }

    /// Route path relative to the mount point, in axum syntax
    pub fn path(self, action: RouteAction) -> String {
        match action {
            RouteAction::List => format!("/{}/", self.prefix()),
            RouteAction::Detail => format!("/{}/{{id}}/", self.prefix()),
        }
    }
}

impl fmt::Display for RouteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteAction::List => f.write_str("list"),
            RouteAction::Detail => f.write_str("detail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRoute {
    pub name: String,
    pub kind: ResourceKind,
    pub action: RouteAction,
    pub path: String,
}

/// All six routes, list before detail for each resource
pub fn named_routes() -> Vec<NamedRoute> {
    ResourceKind::ALL
        .iter()
        .flat_map(|&kind| {
            [RouteAction::List, RouteAction::Detail]
                .into_iter()
                .map(move |action| NamedRoute {
                    name: kind.route_name(action),
                    kind,
                    action,
                    path: kind.path(action),
                })
        })
        .collect()
}

/// Link configuration taken from the application config
#[derive(Debug, Clone, Default)]
pub struct LinkSettings {
    pub public_base_url: Option<String>,
    pub trust_forwarded_headers: bool,
    pub mount_path: String,
}

impl From<&AppConfig> for LinkSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            public_base_url: config.public_base_url.clone(),
            trust_forwarded_headers: config.trust_forwarded_headers,
            mount_path: config.mount_path.clone(),
        }
    }
}

/// Builds absolute URLs for one request
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(settings: &LinkSettings, origin: &RequestOrigin) -> Self {
        let origin = settings
            .public_base_url
            .as_deref()
            .unwrap_or_else(|| origin.resolve(settings.trust_forwarded_headers))
            .trim_end_matches('/');

        Self {
            base: format!("{}{}", origin, settings.mount_path),
        }
    }

    pub fn detail_url(&self, kind: ResourceKind, id: i32) -> String {
        let path = kind
            .path(RouteAction::Detail)
            .replace("{id}", &id.to_string());
        format!("{}{}", self.base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(public: Option<&str>, mount: &str) -> LinkBuilder {
        let settings = LinkSettings {
            public_base_url: public.map(str::to_string),
            trust_forwarded_headers: false,
            mount_path: mount.to_string(),
        };
        LinkBuilder::new(&settings, &RequestOrigin::new("http://request.host:3000"))
    }

    #[test]
    fn test_route_names() {
        let names: Vec<String> = named_routes().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "cities-light-api-city-list",
                "cities-light-api-city-detail",
                "cities-light-api-country-list",
                "cities-light-api-country-detail",
                "cities-light-api-region-list",
                "cities-light-api-region-detail",
            ]
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(ResourceKind::City.path(RouteAction::List), "/cities/");
        assert_eq!(
            ResourceKind::Country.path(RouteAction::Detail),
            "/countries/{id}/"
        );
    }

    #[test]
    fn test_detail_url_uses_request_origin() {
        let links = builder(None, "/cities_light/api");
        assert_eq!(
            links.detail_url(ResourceKind::Region, 7),
            "http://request.host:3000/cities_light/api/regions/7/"
        );
    }

    #[test]
    fn test_detail_url_prefers_public_base_url() {
        let links = builder(Some("https://geo.example.com/"), "");
        assert_eq!(
            links.detail_url(ResourceKind::City, 12),
            "https://geo.example.com/cities/12/"
        );
    }
}
