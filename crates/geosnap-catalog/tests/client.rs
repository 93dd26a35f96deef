//! Integration tests for `CatalogClient` and the pool builder using wiremock.

use geosnap_catalog::{build_candidate_pool, CatalogClient, CatalogError, SearchQuery};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::with_base_url(base_url, "test-key")
        .expect("client construction should not fail")
}

/// A fully valid asset record for day `2024-03-<day>` near the given point.
fn asset(id: &str, lat: f64, lon: f64, day: u32) -> Value {
    json!({
        "id": id,
        "exifInfo": {
            "latitude": lat,
            "longitude": lon,
            "dateTimeOriginal": format!("2024-03-{day:02}T10:00:00.000Z"),
            "city": "Porto",
            "country": "Portugal"
        }
    })
}

fn page_body(items: &[Value]) -> Value {
    json!({ "assets": { "items": items } })
}

async fn mount_page(server: &MockServer, page: u32, items: &[Value]) {
    Mock::given(method("POST"))
        .and(path("/search/metadata"))
        .and(header("x-api-key", "test-key"))
        .and(body_partial_json(json!({ "page": page })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(items)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_page_returns_raw_records() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &[asset("a", 41.15, -8.61, 1)]).await;

    let client = test_client(&server.uri());
    let items = client
        .search_metadata_page(1, &SearchQuery::default())
        .await
        .expect("should fetch page");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_deref(), Some("a"));
    let exif = items[0].exif_info.as_ref().expect("exif present");
    assert_eq!(exif.city.as_deref(), Some("Porto"));
}

#[tokio::test]
async fn search_page_sends_date_window() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/metadata"))
        .and(body_partial_json(json!({
            "takenAfter": "2024-01-01T00:00:00.000Z",
            "takenBefore": "2024-06-30T23:59:59.999Z",
            "withExif": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery {
        taken_after: Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        taken_before: Some(chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
        ..SearchQuery::default()
    };
    let client = test_client(&server.uri());
    let items = client
        .search_metadata_page(1, &query)
        .await
        .expect("should fetch page");
    assert!(items.is_empty());
}

#[tokio::test]
async fn pool_builder_filters_invalid_records() {
    let server = MockServer::start().await;
    let items = vec![
        asset("good-1", 41.15, -8.61, 1),
        // no GPS
        json!({ "id": "no-gps", "exifInfo": { "dateTimeOriginal": "2024-03-01T10:00:00Z" } }),
        // zero coordinates mean a missing fix, on either axis
        json!({ "id": "null-island", "exifInfo": {
            "latitude": 0.0, "longitude": 0.0,
            "dateTimeOriginal": "2024-03-02T10:00:00Z"
        } }),
        json!({ "id": "zero-lon", "exifInfo": {
            "latitude": 40.0, "longitude": 0.0,
            "dateTimeOriginal": "2024-03-03T10:00:00Z"
        } }),
        // no exif block at all
        json!({ "id": "bare" }),
        // no timestamp
        json!({ "id": "undated", "exifInfo": { "latitude": 40.0, "longitude": -8.0 } }),
        asset("good-2", 38.72, -9.14, 2),
    ];
    mount_page(&server, 1, &items).await;
    mount_page(&server, 2, &[]).await;

    let client = test_client(&server.uri());
    let pool = build_candidate_pool(&client, &SearchQuery::default(), 2, 20)
        .await
        .expect("two valid candidates should satisfy required=2");

    let ids: Vec<&str> = pool.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["good-1", "good-2"]);
}

#[tokio::test]
async fn pool_builder_deduplicates_across_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        &[asset("dup", 41.0, -8.0, 1), asset("a", 42.0, -8.0, 2)],
    )
    .await;
    mount_page(
        &server,
        2,
        &[asset("dup", 41.0, -8.0, 1), asset("b", 43.0, -8.0, 3)],
    )
    .await;
    mount_page(&server, 3, &[]).await;

    let client = test_client(&server.uri());
    let pool = build_candidate_pool(&client, &SearchQuery::default(), 3, 20)
        .await
        .expect("should build pool");

    assert_eq!(pool.len(), 3);
    let ids: Vec<&str> = pool.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["dup", "a", "b"]);
}

#[tokio::test]
async fn pool_builder_stops_at_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &[asset("a", 41.0, -8.0, 1)]).await;
    mount_page(&server, 2, &[]).await;
    // Page 3 would fail the test if requested.
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "page": 3 })))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let pool = build_candidate_pool(&client, &SearchQuery::default(), 1, 20)
        .await
        .expect("should stop at the empty page");
    assert_eq!(pool.len(), 1);
}

#[tokio::test]
async fn pool_builder_honors_page_ceiling() {
    let server = MockServer::start().await;
    // Every page is full; the builder must stop at max_pages anyway.
    for page in 1..=3u32 {
        let id = format!("p{page}");
        mount_page(&server, page, &[asset(&id, 40.0 + f64::from(page), -8.0, page)]).await;
    }
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "page": 4 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let pool = build_candidate_pool(&client, &SearchQuery::default(), 1, 3)
        .await
        .expect("should build pool within the ceiling");
    assert_eq!(pool.len(), 3);
}

#[tokio::test]
async fn pool_builder_reports_insufficient_candidates() {
    let server = MockServer::start().await;
    mount_page(&server, 1, &[asset("only", 41.0, -8.0, 1)]).await;
    mount_page(&server, 2, &[]).await;

    let client = test_client(&server.uri());
    let result = build_candidate_pool(&client, &SearchQuery::default(), 5, 20).await;

    match result {
        Err(CatalogError::InsufficientCandidates { found, required }) => {
            assert_eq!(found, 1);
            assert_eq!(required, 5);
        }
        other => panic!("expected InsufficientCandidates, got: {other:?}"),
    }
}

#[tokio::test]
async fn upstream_error_status_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search/metadata"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = build_candidate_pool(&client, &SearchQuery::default(), 5, 20).await;

    match result {
        Err(CatalogError::Upstream { status, .. }) => assert_eq!(status, 502),
        other => panic!("expected Upstream, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_metadata_page(1, &SearchQuery::default()).await;

    assert!(
        matches!(result, Err(CatalogError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}
