//! Trip planning between two stations.

mod api;

use chrono::NaiveDateTime;

use crate::core::{Document, NsClient, NsError};

/// A builder for fetching travel advice between two stations.
///
/// `from` and `to` are required. The remaining parameters have server-side
/// defaults that are always transmitted: five earlier and five later
/// journeys, the given time treated as a departure time, high-speed trains
/// allowed, no year card.
pub struct TravelAdviceBuilder<'a> {
    client: &'a NsClient,
    from: String,
    to: String,
    via: Option<String>,
    previous_advices: u32,
    next_advices: u32,
    date_time: Option<NaiveDateTime>,
    departure: bool,
    high_speed_allowed: bool,
    year_card: bool,
}

impl<'a> TravelAdviceBuilder<'a> {
    /// Creates a new `TravelAdviceBuilder` for a journey between two
    /// stations.
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
            previous_advices: 5,
            next_advices: 5,
            date_time: None,
            departure: true,
            high_speed_allowed: true,
            year_card: false,
        }
    }

    /// Route the journey via an intermediate station.
    pub fn via(mut self, station: impl Into<String>) -> Self {
        self.via = Some(station.into());
        self
    }

    /// Number of journeys before the requested time. The service documents
    /// 5 as its default and maximum; the value is passed through unvalidated.
    pub fn previous_advices(mut self, count: u32) -> Self {
        self.previous_advices = count;
        self
    }

    /// Number of journeys after the requested time. See
    /// [`previous_advices`](Self::previous_advices).
    pub fn next_advices(mut self, count: u32) -> Self {
        self.next_advices = count;
        self
    }

    /// Plan around a specific date/time instead of now.
    pub fn date_time(mut self, at: NaiveDateTime) -> Self {
        self.date_time = Some(at);
        self
    }

    /// Whether the requested time is a departure time (`true`, the default)
    /// or an arrival time (`false`).
    pub fn departure(mut self, departure: bool) -> Self {
        self.departure = departure;
        self
    }

    /// Whether journeys may include high-speed trains.
    pub fn high_speed_allowed(mut self, allowed: bool) -> Self {
        self.high_speed_allowed = allowed;
        self
    }

    /// Whether the traveller holds a year card, which changes some advice.
    pub fn year_card(mut self, year_card: bool) -> Self {
        self.year_card = year_card;
        self
    }

    /// Fetches the travel advice document.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(from = %self.from, to = %self.to))
    )]
    pub async fn fetch(self) -> Result<Document, NsError> {
        api::fetch_travel_advice(self).await
    }
}

impl NsClient {
    /// Travel advice for a journey between two stations.
    pub fn travel_advice(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> TravelAdviceBuilder<'_> {
        TravelAdviceBuilder::new(self, from, to)
    }
}
