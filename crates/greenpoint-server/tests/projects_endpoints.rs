mod support;

use greenpoint_server::{ApiConfig, AppState, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;
use support::{fixture_projects, get, send_raw, spawn_app};

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|p| p["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn list_defaults_to_first_page_of_six() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(13)));
    let addr = spawn_app(AppState::new(store)).await;

    let resp = get(addr, "/api/projects").await;
    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        body["meta"],
        json!({"total": 13, "currentPage": 1, "totalPages": 3, "hasMore": true})
    );
    assert_eq!(
        body["data"][0],
        json!({
            "id": 1,
            "title": "Garden 1",
            "subtitle": "Subtitle 1",
            "location": "Hangzhou",
            "year": 2011,
            "category": "Residential",
            "coverImage": "/uploads/1.jpg"
        })
    );
}

#[tokio::test]
async fn third_page_of_thirteen_has_one_item() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(13)));
    let addr = spawn_app(AppState::new(store)).await;

    let body = get(addr, "/api/projects?page=3&limit=6").await.json();
    assert_eq!(ids(&body), vec![13]);
    assert_eq!(
        body["meta"],
        json!({"total": 13, "currentPage": 3, "totalPages": 3, "hasMore": false})
    );

    let body = get(addr, "/api/projects?page=7&limit=6").await.json();
    assert!(ids(&body).is_empty());
    assert_eq!(body["meta"]["currentPage"], 7);
    assert_eq!(body["meta"]["totalPages"], 3);
}

#[tokio::test]
async fn category_filter_applies_before_pagination() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(13)));
    let addr = spawn_app(AppState::new(store)).await;

    let body = get(addr, "/api/projects?category=Public&limit=3").await.json();
    assert_eq!(ids(&body), vec![3, 6, 9]);
    assert_eq!(
        body["meta"],
        json!({"total": 4, "currentPage": 1, "totalPages": 2, "hasMore": true})
    );

    let body = get(addr, "/api/projects?category=All&limit=100").await.json();
    assert_eq!(body["meta"]["total"], 13);

    let resp = get(addr, "/api/projects?category=Commercial").await;
    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert!(ids(&body).is_empty());
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["meta"]["totalPages"], 0);
}

#[tokio::test]
async fn invalid_pagination_values_fall_back_to_defaults() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(13)));
    let addr = spawn_app(AppState::new(store)).await;

    let resp = get(addr, "/api/projects?page=zero&limit=-4").await;
    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(body["meta"]["currentPage"], 1);
}

#[tokio::test]
async fn detail_returns_full_record_with_cyclic_neighbors() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(13)));
    let addr = spawn_app(AppState::new(store)).await;

    let resp = get(addr, "/api/projects/13").await;
    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert_eq!(body["id"], 13);
    assert_eq!(body["description"], "Full description 13");
    assert_eq!(body["gallery"], json!(["/uploads/13-a.jpg"]));
    assert_eq!(
        body["nextProject"],
        json!({"id": 1, "title": "Garden 1", "slug": "garden-1"})
    );
    assert_eq!(
        body["prevProject"],
        json!({"id": 12, "title": "Garden 12", "slug": "garden-12"})
    );

    let body = get(addr, "/api/projects/1").await.json();
    assert_eq!(body["prevProject"]["id"], 13);
    assert_eq!(body["nextProject"]["id"], 2);
}

#[tokio::test]
async fn unknown_or_non_numeric_id_is_not_found() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(3)));
    let addr = spawn_app(AppState::new(store)).await;

    for path in ["/api/projects/99", "/api/projects/abc", "/api/projects/roof-2"] {
        let resp = get(addr, path).await;
        assert_eq!(resp.status, 404, "{path}");
        let body = resp.json();
        assert_eq!(body["error"]["code"], "ProjectNotFound");
        assert_eq!(body["error"]["message"], "project not found");
    }
}

#[tokio::test]
async fn id_segment_resolves_by_its_leading_integer() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(3)));
    let addr = spawn_app(AppState::new(store)).await;

    for path in ["/api/projects/3-roof-terrace", "/api/projects/3.5"] {
        let resp = get(addr, path).await;
        assert_eq!(resp.status, 200, "{path}");
        let body = resp.json();
        assert_eq!(body["id"], 3);
        assert_eq!(body["nextProject"]["id"], 1);
        assert_eq!(body["prevProject"]["id"], 2);
    }
}

#[tokio::test]
async fn storage_failure_is_a_generic_server_error() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(3)));
    store.set_fail_reads(true);
    let addr = spawn_app(AppState::new(store)).await;

    for path in ["/api/projects", "/api/projects/1"] {
        let resp = get(addr, path).await;
        assert_eq!(resp.status, 500, "{path}");
        let body = resp.json();
        assert_eq!(body["error"]["code"], "StorageUnavailable");
        assert_eq!(body["error"]["message"], "failed to load projects");
        assert!(!String::from_utf8_lossy(&resp.body).contains("memory store"));
    }
}

#[tokio::test]
async fn legacy_mode_returns_full_records_only_without_pagination_params() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(7)));
    let api = ApiConfig {
        legacy_unpaginated_list: true,
        ..ApiConfig::default()
    };
    let addr = spawn_app(AppState::with_config(store, api)).await;

    let body = get(addr, "/api/projects?category=Public").await.json();
    let records = body.as_array().expect("bare array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["description"], "Full description 3");
    assert!(records[0].get("coverImage").is_none());

    let body = get(addr, "/api/projects?limit=2").await.json();
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(body["meta"]["total"], 7);
}

#[tokio::test]
async fn request_id_is_propagated_or_generated() {
    let store = Arc::new(MemoryStore::with_projects(fixture_projects(1)));
    let addr = spawn_app(AppState::new(store)).await;

    let resp = send_raw(
        addr,
        "GET",
        "/api/projects/404",
        &[("x-request-id", "trace-abc")],
        None,
    )
    .await;
    assert_eq!(resp.header("x-request-id").as_deref(), Some("trace-abc"));
    assert_eq!(resp.json()["error"]["request_id"], "trace-abc");

    let resp = get(addr, "/healthz").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.json(), json!({"status": "ok"}));
    let generated = resp.header("x-request-id").expect("generated id");
    assert!(generated.starts_with("req-"));
}
