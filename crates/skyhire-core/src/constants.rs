/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const AVAILABILITY_ROUTE_COMPONENT: &str = "availability";
pub const AVAILABILITY_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", AVAILABILITY_ROUTE_COMPONENT);

pub const RANKING_ROUTE_COMPONENT: &str = "ranking";
pub const RANKING_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RANKING_ROUTE_COMPONENT);

/// Timezone used when neither configuration nor request names one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Minutes in a calendar day, the upper bound for slot lengths.
pub const MINUTES_PER_DAY: u32 = 1440;
