mod common;

use httpmock::Method::GET;

#[tokio::test]
async fn every_request_carries_the_basic_auth_header() {
    let server = common::setup_server();
    let header = common::basic_auth_header();

    let stations = server.mock(|when, then| {
        when.method(GET)
            .path("/ns-api-stations-v2")
            .header("authorization", &header);
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("stations"));
    });
    let departures = server.mock(|when, then| {
        when.method(GET)
            .path("/ns-api-avt")
            .header("authorization", &header);
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("departures"));
    });

    let client = common::client_for(&server);
    client.stations().await.unwrap();
    client.departures("Zwolle").await.unwrap();

    stations.assert();
    departures.assert();
}

#[tokio::test]
async fn credentials_never_appear_in_the_query_string() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/ns-api-avt").is_true(|req| {
            req.query_params().iter().all(|(k, v)| {
                !k.contains(common::USERNAME)
                    && !v.contains(common::USERNAME)
                    && !v.contains(common::PASSWORD)
            })
        });
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("departures"));
    });

    let client = common::client_for(&server);
    client.departures("Zwolle").await.unwrap();

    mock.assert();
}
