//! Centralized constants for the default service address and endpoint paths.

pub(crate) const USER_AGENT: &str = concat!("ns-api-rs/", env!("CARGO_PKG_VERSION"));

/// Production base address of the NS webservices. Endpoint paths are joined
/// onto this, so it must keep its trailing slash.
pub(crate) const DEFAULT_BASE_URL: &str = "https://webservices.ns.nl/";

/// Fare information (prijzen v3).
pub(crate) const PATH_PRICES: &str = "ns-api-prijzen-v3";

/// Live departure times (actuele vertrektijden).
pub(crate) const PATH_DEPARTURES: &str = "ns-api-avt";

/// Disruptions and engineering work (storingen).
pub(crate) const PATH_DISRUPTIONS: &str = "ns-api-storingen";

/// Full station list.
pub(crate) const PATH_STATIONS: &str = "ns-api-stations-v2";

/// Trip planner (treinplanner).
pub(crate) const PATH_TRAVEL_ADVICE: &str = "ns-api-treinplanner";
