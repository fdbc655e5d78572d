use super::TravelAdviceBuilder;
use crate::core::{
    Document, NsError, client::constants::PATH_TRAVEL_ADVICE, net,
};

pub(super) async fn fetch_travel_advice(
    builder: TravelAdviceBuilder<'_>,
) -> Result<Document, NsError> {
    let params = query(&builder);
    net::get_document(builder.client, PATH_TRAVEL_ADVICE, &params).await
}

fn query(b: &TravelAdviceBuilder<'_>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("fromStation", b.from.clone()),
        ("toStation", b.to.clone()),
    ];
    if let Some(via) = &b.via {
        params.push(("viaStation", via.clone()));
    }
    params.push(("previous_advices", b.previous_advices.to_string()));
    params.push(("next_advices", b.next_advices.to_string()));
    if let Some(at) = b.date_time {
        params.push(("dateTime", net::format_date_time(at)));
    }
    params.push(("departure", b.departure.to_string()));
    params.push(("hslAllowed", b.high_speed_allowed.to_string()));
    // The stray capital in `yearCArd` is the service's spelling.
    params.push(("yearCArd", b.year_card.to_string()));
    params
}
