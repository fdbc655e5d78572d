//! Fare information between two stations.

use chrono::NaiveDateTime;

use crate::core::{
    Document, NsClient, NsError, client::constants::PATH_PRICES, net,
};

/// A builder for fetching fare information for a journey.
///
/// `from` and `to` are required; a via station and a travel date/time are
/// optional and omitted from the request when unset.
pub struct PricesBuilder<'a> {
    client: &'a NsClient,
    from: String,
    to: String,
    via: Option<String>,
    date_time: Option<NaiveDateTime>,
}

impl<'a> PricesBuilder<'a> {
    /// Creates a new `PricesBuilder` for a journey between two stations.
    pub fn new(
        client: &'a NsClient,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            client,
            from: from.into(),
            to: to.into(),
            via: None,
            date_time: None,
        }
    }

    /// Route the journey via an intermediate station.
    pub fn via(mut self, station: impl Into<String>) -> Self {
        self.via = Some(station.into());
        self
    }

    /// Look up fares for a specific travel date/time.
    pub fn date_time(mut self, at: NaiveDateTime) -> Self {
        self.date_time = Some(at);
        self
    }

    /// Fetches the fare document.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(from = %self.from, to = %self.to))
    )]
    pub async fn fetch(self) -> Result<Document, NsError> {
        let mut params = vec![("from", self.from), ("to", self.to)];
        if let Some(via) = self.via {
            params.push(("via", via));
        }
        if let Some(at) = self.date_time {
            params.push(("dateTime", net::format_date_time(at)));
        }
        net::get_document(self.client, PATH_PRICES, &params).await
    }
}

impl NsClient {
    /// Fare information for a journey between two stations.
    pub fn prices(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> PricesBuilder<'_> {
        PricesBuilder::new(self, from, to)
    }
}
