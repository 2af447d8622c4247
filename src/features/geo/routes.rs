use std::sync::Arc;

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::features::geo::handlers;
use crate::features::geo::links::{named_routes, ResourceKind, RouteAction};
use crate::features::geo::services::GeoService;

fn handler_for(kind: ResourceKind, action: RouteAction) -> MethodRouter<Arc<GeoService>> {
    match (kind, action) {
        (ResourceKind::City, RouteAction::List) => get(handlers::list_cities),
        (ResourceKind::City, RouteAction::Detail) => get(handlers::get_city),
        (ResourceKind::Country, RouteAction::List) => get(handlers::list_countries),
        (ResourceKind::Country, RouteAction::Detail) => get(handlers::get_country),
        (ResourceKind::Region, RouteAction::List) => get(handlers::list_regions),
        (ResourceKind::Region, RouteAction::Detail) => get(handlers::get_region),
    }
}

/// Create routes for the geo feature, relative to the mount point
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<GeoService>) -> Router {
    named_routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::debug!(name = %route.name, path = %route.path, "Registering route");
            router.route(&route.path, handler_for(route.kind, route.action))
        })
        .with_state(service)
}
