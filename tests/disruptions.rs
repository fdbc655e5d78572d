mod common;

use httpmock::Method::GET;
use ns_api_rs::NsError;

#[tokio::test]
async fn unplanned_true_is_sent_as_false() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ns-api-storingen")
            .query_param("unplanned", "false");
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("disruptions"));
    });

    let client = common::client_for(&server);
    client.disruptions().unplanned(true).fetch().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn unplanned_false_is_sent_as_true() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ns-api-storingen")
            .query_param("unplanned", "true");
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("disruptions"));
    });

    let client = common::client_for(&server);
    client.disruptions().unplanned(false).fetch().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn unset_filters_send_no_query_at_all() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ns-api-storingen")
            .is_true(|req| req.query_params().is_empty());
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("disruptions"));
    });

    let client = common::client_for(&server);
    let doc = client.disruptions().fetch().await.unwrap();

    mock.assert();
    assert_eq!(doc.name, "Storingen");
    assert!(doc.get_child("Ongepland").is_some());
    assert!(doc.get_child("Gepland").is_some());
}

#[tokio::test]
async fn station_and_actual_pass_through_unchanged() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ns-api-storingen")
            .query_param("station", "Zwolle")
            .query_param("actual", "true");
        then.status(200)
            .header("content-type", "text/xml")
            .body(common::fixture("disruptions"));
    });

    let client = common::client_for(&server);
    client
        .disruptions()
        .station("Zwolle")
        .actual(true)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn disruptions_fail_on_a_non_200_status() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/ns-api-storingen");
        then.status(401).body("Unauthorized");
    });

    let client = common::client_for(&server);
    let err = client.disruptions().fetch().await.unwrap_err();

    match err {
        NsError::Status { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Status error, got {other:?}"),
    }
}
