//! Disruptions and planned engineering work.

mod api;

use crate::core::{Document, NsClient, NsError};

/// A builder for fetching disruption and engineering-work notices.
///
/// With no filters set, the service returns all current notices.
pub struct DisruptionsBuilder<'a> {
    client: &'a NsClient,
    station: Option<String>,
    actual: Option<bool>,
    unplanned: Option<bool>,
}

impl<'a> DisruptionsBuilder<'a> {
    /// Creates a new `DisruptionsBuilder` with no filters.
    pub fn new(client: &'a NsClient) -> Self {
        Self {
            client,
            station: None,
            actual: None,
            unplanned: None,
        }
    }

    /// Restrict the notices to a single station.
    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    /// Restrict to notices that are in effect right now.
    pub fn actual(mut self, actual: bool) -> Self {
        self.actual = Some(actual);
        self
    }

    /// Select unplanned disruptions (`true`) or planned engineering work
    /// (`false`).
    pub fn unplanned(mut self, unplanned: bool) -> Self {
        self.unplanned = Some(unplanned);
        self
    }

    /// Fetches the disruption document.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Document, NsError> {
        api::fetch_disruptions(self.client, self.station, self.actual, self.unplanned).await
    }
}

impl NsClient {
    /// Disruption and engineering-work notices.
    pub fn disruptions(&self) -> DisruptionsBuilder<'_> {
        DisruptionsBuilder::new(self)
    }
}
