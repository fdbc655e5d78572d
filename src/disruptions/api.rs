use crate::core::{
    Document, NsClient, NsError, client::constants::PATH_DISRUPTIONS, net,
};

pub(super) async fn fetch_disruptions(
    client: &NsClient,
    station: Option<String>,
    actual: Option<bool>,
    unplanned: Option<bool>,
) -> Result<Document, NsError> {
    let params = query(station, actual, unplanned);
    net::get_document(client, PATH_DISRUPTIONS, &params).await
}

fn query(
    station: Option<String>,
    actual: Option<bool>,
    unplanned: Option<bool>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(station) = station {
        params.push(("station", station));
    }
    if let Some(actual) = actual {
        params.push(("actual", actual.to_string()));
    }
    if let Some(unplanned) = unplanned {
        // The service's `unplanned` parameter actually selects planned
        // engineering work when true. Flip the caller's flag here, in one
        // place, so the public name keeps its plain meaning.
        params.push(("unplanned", (!unplanned).to_string()));
    }
    params
}
