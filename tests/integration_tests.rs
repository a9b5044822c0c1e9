use httpmock::prelude::*;
use quake_feed::{ApiConfig, EarthquakeService, ReqwestApiClient};
use std::sync::Arc;

fn service_for(base_url: &str) -> EarthquakeService<ReqwestApiClient> {
    let client = ReqwestApiClient::new(&ApiConfig::new(base_url)).unwrap();
    EarthquakeService::new(client)
}

#[tokio::test]
async fn test_fetch_single_earthquake() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/earthquakes");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(
                r#"[{"id":"us1","magnitude":5.2,"place":"Tokyo","latitude":35.6,"longitude":139.7,"kmDepth":10,"earthquakeTime":"2024-01-01T00:00:00Z","code":"us1","url":"http://x/us1"}]"#,
            );
    });

    let result = service_for(&server.base_url())
        .get_earthquakes()
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.len(), 1);

    let quake = &result[0];
    assert_eq!(quake.id, "us1");
    assert_eq!(quake.magnitude, 5.2);
    assert_eq!(quake.place, "Tokyo");
    assert_eq!(quake.latitude, 35.6);
    assert_eq!(quake.longitude, 139.7);
    assert_eq!(quake.km_depth, 10.0);
    assert_eq!(quake.earthquake_time, "2024-01-01T00:00:00Z");
    assert_eq!(quake.code, "us1");
    assert_eq!(quake.url, "http://x/us1");
}

#[tokio::test]
async fn test_fetch_empty_list() -> anyhow::Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/earthquakes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let client = ReqwestApiClient::new(&ApiConfig::new(server.base_url()))?;
    let result = EarthquakeService::new(client).get_earthquakes().await?;

    api_mock.assert();
    assert!(result.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_fetch_preserves_length_and_order() {
    let server = MockServer::start();
    let codes = ["ci40", "nc73", "us7000", "ak024", "hv74"];
    let body: Vec<serde_json::Value> = codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            serde_json::json!({
                "id": code,
                "magnitude": i as f64 + 0.5,
                "place": format!("{} km N of Somewhere", i),
                "latitude": 10.0 * i as f64,
                "longitude": -20.0 * i as f64,
                "kmDepth": 7.25,
                "earthquakeTime": "2024-03-05T10:11:12Z",
                "code": code,
                "url": format!("https://quakes.example/{}", code)
            })
        })
        .collect();

    server.mock(|when, then| {
        when.method(GET).path("/earthquakes");
        then.status(200).json_body(serde_json::Value::Array(body));
    });

    let result = service_for(&server.base_url())
        .get_earthquakes()
        .await
        .unwrap();

    let got: Vec<&str> = result.iter().map(|q| q.code.as_str()).collect();
    assert_eq!(got, codes);
    assert_eq!(result[3].magnitude, 3.5);
}

#[tokio::test]
async fn test_fetch_resolves_under_base_path() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/earthquakes");
        then.status(200).json_body(serde_json::json!([]));
    });

    service_for(&server.url("/api/v2"))
        .get_earthquakes()
        .await
        .unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/earthquakes")
            .header("user-agent", "quake-feed-test/1.0");
        then.status(200).json_body(serde_json::json!([]));
    });

    let config = ApiConfig::new(server.base_url()).with_user_agent("quake-feed-test/1.0");
    let service = EarthquakeService::new(ReqwestApiClient::new(&config).unwrap());

    service.get_earthquakes().await.unwrap();
    api_mock.assert();
}

#[tokio::test]
async fn test_legacy_feature_id_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/earthquakes");
        then.status(200).json_body(serde_json::json!([{
            "id": "nc1",
            "magnitude": 3.1,
            "place": "Gilroy",
            "latitude": 37.0,
            "longitude": -121.5,
            "kmDepth": 8.2,
            "earthquakeTime": "2024-02-02T02:02:02Z",
            "featureId": "nc1-feature",
            "url": "http://x/nc1"
        }]));
    });

    let result = service_for(&server.base_url())
        .get_earthquakes()
        .await
        .unwrap();

    assert_eq!(result[0].code, "nc1-feature");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_fetches() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/earthquakes");
        then.status(200).json_body(serde_json::json!([
            {"id": "a", "magnitude": 1.0, "place": "A", "latitude": 1.0, "longitude": 1.0,
             "kmDepth": 1.0, "earthquakeTime": "2024-01-01T00:00:00Z", "code": "a", "url": "http://x/a"},
            {"id": "b", "magnitude": 2.0, "place": "B", "latitude": 2.0, "longitude": 2.0,
             "kmDepth": 2.0, "earthquakeTime": "2024-01-01T00:00:00Z", "code": "b", "url": "http://x/b"}
        ]));
    });

    let service = Arc::new(service_for(&server.base_url()));
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..10 {
        let service = Arc::clone(&service);
        tasks.spawn(async move { service.get_earthquakes().await });
    }

    let mut completed = 0;
    while let Some(joined) = tasks.join_next().await {
        let quakes = joined.unwrap().unwrap();
        assert_eq!(quakes.len(), 2);
        assert_eq!(quakes[0].code, "a");
        assert_eq!(quakes[1].code, "b");
        completed += 1;
    }

    assert_eq!(completed, 10);
    api_mock.assert_hits(10);
}
