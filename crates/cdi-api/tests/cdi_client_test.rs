#![allow(clippy::unwrap_used)]
// Integration tests for `CdiClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cdi_api::{CdiClient, Error, LightId, LightLevel, RoomId, SessionKey};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CdiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = CdiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn session() -> SessionKey {
    SessionKey::new("sess-42")
}

async fn last_query(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    let last = requests.last().expect("no request received");
    last.url.query().unwrap_or_default().to_owned()
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/user/login"))
        .and(query_param("userName", "operator"))
        .and(query_param("userPWD", "hunter2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "callStatus": "SUCCEED", "sessionKey": "sess-42" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    let key = client.login("operator", &secret).await.unwrap();

    assert_eq!(key.expose(), "sess-42");
}

#[tokio::test]
async fn test_login_failure_carries_body() {
    let (server, client) = setup().await;

    let body = json!({ "callStatus": "FAILED", "message": "bad password" });
    Mock::given(method("GET"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "nope".to_string().into();
    let result = client.login("operator", &secret).await;

    match result {
        Err(Error::Login { body: got }) => assert_eq!(got, body),
        other => panic!("expected Login error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_non_json_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "pw".to_string().into();
    let result = client.login("operator", &secret).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Space tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_spaces() {
    let (server, client) = setup().await;

    let body = json!({
        "callStatus": "SUCCEED",
        "data": [
            { "roomId": 101, "name": "Board Room", "position": { "x": 1, "y": 2 }, "capacity": 12 },
            { "roomId": "102", "name": "Quiet Room", "position": null }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/space/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let spaces = client.list_spaces().await.unwrap();

    assert_eq!(spaces.len(), 2);
    assert_eq!(spaces[0].room_id, RoomId::new("101"));
    assert_eq!(spaces[0].name, "Board Room");
    assert_eq!(spaces[0].position, json!({ "x": 1, "y": 2 }));
    assert_eq!(spaces[0].extra.get("capacity"), Some(&json!(12)));
    assert_eq!(spaces[1].room_id.as_str(), "102");
    assert!(spaces[1].position.is_null());
}

#[tokio::test]
async fn test_list_spaces_failure_is_request_error() {
    let (server, client) = setup().await;

    let body = json!({ "callStatus": "NOT_AUTHORIZED" });
    Mock::given(method("GET"))
        .and(path("/api/space/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let err = client.list_spaces().await.unwrap_err();
    assert!(matches!(err, Error::Request { .. }));
    assert_eq!(err.response_body(), Some(&body));
}

// ── Area control tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_set_lights_level_emits_parallel_lists() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/areaControl/setLightsLevel"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "callStatus": "SUCCEED", "data": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let assignments = [
        LightLevel { light: LightId::new("L1"), level: 70 },
        LightLevel { light: LightId::new("L2"), level: 0 },
        LightLevel { light: LightId::new("L3"), level: 0 },
    ];
    let data = client
        .set_lights_level(&session(), &assignments)
        .await
        .unwrap();

    assert_eq!(data, json!(true));
    assert_eq!(
        last_query(&server).await,
        "levels=70&levels=0&levels=0&lights=L1&lights=L2&lights=L3&sessionKey=sess-42"
    );
}

#[tokio::test]
async fn test_open_door() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/areaControl/openDoor"))
        .and(query_param("doorId", "D-7"))
        .and(query_param("floor", "3"))
        .and(query_param("sessionKey", "sess-42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "callStatus": "SUCCEED", "data": "opened" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = client.open_door(&session(), "D-7", "3").await.unwrap();
    assert_eq!(data, json!("opened"));
}

#[tokio::test]
async fn test_set_temperature_without_data_field() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/areaControl/setACTargetTemperature"))
        .and(query_param("roomId", "101"))
        .and(query_param("temperature", "21.5"))
        .and(query_param("sessionKey", "sess-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "callStatus": "SUCCEED" })))
        .mount(&server)
        .await;

    let data = client
        .set_ac_target_temperature(&session(), &RoomId::new("101"), 21.5)
        .await
        .unwrap();
    assert!(data.is_null());
}

#[tokio::test]
async fn test_control_failure_carries_body() {
    let (server, client) = setup().await;

    let body = json!({ "callStatus": "DEVICE_OFFLINE", "data": null, "detail": "door controller unreachable" });
    Mock::given(method("PUT"))
        .and(path("/api/areaControl/openDoor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = client.open_door(&session(), "D-7", "3").await;

    match result {
        Err(Error::Request { body: got }) => assert_eq!(got, body),
        other => panic!("expected Request error, got: {other:?}"),
    }
}
