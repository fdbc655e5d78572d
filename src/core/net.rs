use chrono::NaiveDateTime;

use crate::core::{Document, NsClient, NsError};

/// Issue an authenticated GET against `base/path` and parse the XML body.
///
/// Every endpoint funnels through here. Query values are pre-stringified by
/// the caller; a key that the caller did not supply is simply absent from
/// `params`. Non-200 responses fail before the body is read.
pub(crate) async fn get_document(
    client: &NsClient,
    path: &str,
    params: &[(&str, String)],
) -> Result<Document, NsError> {
    let mut url = client.base().join(path)?;
    if !params.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (key, value) in params {
            qp.append_pair(key, value);
        }
    }

    let credentials = client.credentials();
    let resp = client
        .http()
        .get(url.clone())
        .basic_auth(credentials.username(), Some(credentials.password()))
        .send()
        .await?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(NsError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    Ok(Document::parse(body.as_bytes())?)
}

/// Wire rendering for `dateTime` query values (ISO 8601, minute precision).
pub(crate) fn format_date_time(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M").to_string()
}
