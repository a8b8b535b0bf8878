//! Engine-wide configuration.

/// Tuning knobs for a [`Traveler`][crate::Traveler] instance.
///
/// Per-call overrides for the first three exist on
/// [`TravelOptions`][crate::TravelOptions]; the rest apply to every call.
///
/// | Field                     | Default | Effect                                        |
/// |---------------------------|---------|-----------------------------------------------|
/// | `default_max_ops`         | 20 000  | tile-search operation budget                  |
/// | `stuck_threshold`         | 2       | unmoved steps before stuck recovery           |
/// | `route_distance_threshold`| 2       | room distance above which room-graph          |
/// |                           |         | filtering is attempted by default             |
/// | `max_route_distance`      | 30      | room distance beyond which room-graph         |
/// |                           |         | filtering is not attempted at all             |
/// | `retry_ops_ceiling`       | 2 000   | "ops stayed low" bound for the unfiltered     |
/// |                           |         | full-search fallback                          |
/// | `detour_max_ops`          | 500     | operation budget for detour searches          |
/// | `road_cost`               | 1       | structure-grid cost of a road cell            |
/// | `container_cost`          | 5       | structure-grid cost of a container cell       |
/// | `report_cpu_threshold_ms` | 50.0    | average plan time that triggers a diagnostic  |
/// | `report_min_samples`      | 25      | plans recorded before averages are reported   |
/// | `cache_routes_default`    | false   | route cacheability when no predicate is given |
#[derive(Clone, Debug)]
pub struct TravelConfig {
    pub default_max_ops:          u32,
    pub stuck_threshold:          u32,
    pub route_distance_threshold: u32,
    pub max_route_distance:       u32,
    pub retry_ops_ceiling:        u32,
    pub detour_max_ops:           u32,
    pub road_cost:                u8,
    pub container_cost:           u8,
    pub report_cpu_threshold_ms:  f64,
    pub report_min_samples:       u32,
    pub cache_routes_default:     bool,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            default_max_ops:          20_000,
            stuck_threshold:          2,
            route_distance_threshold: 2,
            max_route_distance:       30,
            retry_ops_ceiling:        2_000,
            detour_max_ops:           500,
            road_cost:                1,
            container_cost:           5,
            report_cpu_threshold_ms:  50.0,
            report_min_samples:       25,
            cache_routes_default:     false,
        }
    }
}
