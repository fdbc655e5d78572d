//! Live departure times for a single station.

use crate::core::{
    Document, NsClient, NsError, client::constants::PATH_DEPARTURES, net,
};

impl NsClient {
    /// Trains currently departing from `station` (name or code).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn departures(&self, station: &str) -> Result<Document, NsError> {
        let params = [("station", station.to_string())];
        net::get_document(self, PATH_DEPARTURES, &params).await
    }
}
