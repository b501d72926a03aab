//! End-to-end tests against a running server bound to a local port.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::net::SocketAddr;

use serde_json::{Value, json};

use toilet_ratings::api::{self, GRAPHQL_PATH};
use toilet_ratings::app_state::AppState;
use toilet_ratings::persistence::SqliteStore;
use toilet_ratings::service::ToiletService;

async fn spawn_server() -> SocketAddr {
    let Ok(store) = SqliteStore::in_memory().await else {
        panic!("in-memory store");
    };
    if let Err(e) = store.init_schema().await {
        panic!("schema init failed: {e}");
    }
    let app = api::build_router(true).with_state(AppState::new(ToiletService::new(store)));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn graphql(client: &reqwest::Client, addr: SocketAddr, query: &str) -> Value {
    let url = format!("http://{addr}{GRAPHQL_PATH}");
    let resp = match client.post(&url).json(&json!({ "query": query })).send().await {
        Ok(r) => r,
        Err(e) => panic!("request failed: {e}"),
    };
    assert!(resp.status().is_success());
    match resp.json::<Value>().await {
        Ok(v) => v,
        Err(e) => panic!("response not json: {e}"),
    }
}

#[tokio::test]
async fn create_rate_and_query() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let created = graphql(
        &client,
        addr,
        r#"mutation { createToilet(name: "Lobby", location: "1F") { uid name } }"#,
    )
    .await;
    assert_eq!(
        created["data"]["createToilet"],
        json!({ "uid": "1", "name": "Lobby" })
    );

    for (rating, comment) in [(4, "fine"), (5, "spotless")] {
        let rated = graphql(
            &client,
            addr,
            &format!(
                r#"mutation {{ rateToilet(uid: "1", rating: {rating}, comment: "{comment}") {{ rating comment }} }}"#
            ),
        )
        .await;
        assert_eq!(
            rated["data"]["rateToilet"],
            json!({ "rating": rating, "comment": comment })
        );
    }

    let body = graphql(
        &client,
        addr,
        r#"{ toilet(uid: "1") { name avgRating ratings { rating } } }"#,
    )
    .await;
    assert_eq!(
        body["data"]["toilet"],
        json!({
            "name": "Lobby",
            "avgRating": 4.5,
            "ratings": [{ "rating": 4 }, { "rating": 5 }]
        })
    );
}

#[tokio::test]
async fn not_found_is_a_field_error() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let body = graphql(&client, addr, r#"{ toilets { uid } toilet(uid: "5") { uid } }"#).await;
    assert_eq!(body["data"]["toilets"], json!([]));
    assert_eq!(body["data"]["toilet"], Value::Null);
    assert_eq!(
        body["errors"][0]["extensions"]["code"],
        json!("TOILET_NOT_FOUND")
    );
}

#[tokio::test]
async fn explorer_and_health_are_served() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let Ok(page) = client
        .get(format!("http://{addr}{GRAPHQL_PATH}"))
        .send()
        .await
    else {
        panic!("explorer request failed");
    };
    assert!(page.status().is_success());

    let Ok(health) = client.get(format!("http://{addr}/health")).send().await else {
        panic!("health request failed");
    };
    assert!(health.status().is_success());
    let Ok(json) = health.json::<Value>().await else {
        panic!("health not json");
    };
    assert_eq!(json["status"], json!("healthy"));
    assert_eq!(json["database"], json!("ok"));
}
