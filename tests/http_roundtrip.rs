//! End-to-end test over a real socket with the in-memory store.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{Value, json};

use group_split_gateway::api;
use group_split_gateway::app_state::AppState;
use group_split_gateway::persistence::MemoryStore;
use group_split_gateway::service::GroupService;

async fn spawn_server() -> SocketAddr {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    let state = AppState::new(GroupService::new(Arc::new(MemoryStore::new())));
    tokio::spawn(async move {
        let _ = api::serve(listener, state).await;
    });
    addr
}

async fn send(req: reqwest::RequestBuilder) -> (reqwest::StatusCode, Value) {
    let Ok(resp) = req.send().await else {
        panic!("request failed");
    };
    let status = resp.status();
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn weights_round_trip_over_http() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}/api/group");
    let client = reqwest::Client::new();

    let (status, group) = send(client.post(&base).json(&json!({"name": "Ski", "currency": "CHF"}))).await;
    assert_eq!(status, reqwest::StatusCode::CREATED);
    let Some(group_id) = group["id"].as_str() else {
        panic!("missing group id");
    };

    let (_, member) = send(
        client
            .post(format!("{base}/{group_id}/member"))
            .json(&json!({"name": "Ann"})),
    )
    .await;
    let Some(member_id) = member["id"].as_str() else {
        panic!("missing member id");
    };

    let inputs = [
        json!(null),
        json!([]),
        json!([{"memberId": member_id, "share": 2}]),
        json!("[1,2]"),
        json!("{bad"),
    ];
    for weights in &inputs {
        let (status, _) = send(client.post(format!("{base}/{group_id}/expense")).json(&json!({
            "desc": "Lift pass",
            "amount": "12.50",
            "payerId": member_id,
            "splitType": "custom",
            "weights": weights,
        })))
        .await;
        assert_eq!(status, reqwest::StatusCode::CREATED);
    }

    let (status, doc) = send(client.get(format!("{base}/{group_id}"))).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(doc["currency"], "CHF");

    let Some(expenses) = doc["expenses"].as_array() else {
        panic!("expenses must be a list");
    };
    let weights: Vec<&Value> = expenses.iter().map(|e| &e["weights"]).collect();
    assert_eq!(
        weights,
        [
            &json!([]),
            &json!([]),
            &json!([{"memberId": member_id, "share": 2}]),
            &json!([1, 2]),
            &json!([]),
        ]
    );
    assert!(expenses.iter().all(|e| e["amount"] == json!(12.5)));
}

#[tokio::test]
async fn missing_group_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let Ok(resp) = client
        .get(format!("http://{addr}/api/group/missing"))
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
