pub mod dto;
mod extractors;
pub mod handlers;
pub mod openapi;
pub mod response;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::{Config, DatabaseConfig, SchedulerConfig, ServerConfig, WeatherConfig};
    use crate::weather::WeatherClient;

    const RAIN_BODY: &str = r#"{"main":{"temp":280.5},"weather":[{"main":"Rain","icon":"10d"}]}"#;

    async fn test_state(weather_base_url: Option<String>) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: ":memory:".to_string(),
                auth_token: None,
                local_path: None,
            },
            weather: WeatherConfig {
                api_key: weather_base_url.as_ref().map(|_| "test-key".to_string()),
                base_url: weather_base_url.unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
                ..WeatherConfig::default()
            },
            scheduler: SchedulerConfig::default(),
        };

        let raw_db = crate::db::Database::new(&config.database).await.unwrap();
        let db_backend = crate::db::LibSqlBackend::new(raw_db);
        let db: std::sync::Arc<dyn crate::db::DatabaseBackend> = std::sync::Arc::new(db_backend);
        let weather = WeatherClient::new(&config.weather).unwrap();

        AppState::new(config, db, weather)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "text/plain")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn weather_server(body: &str, expected_calls: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(expected_calls)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn create_then_read_returns_entry_with_weather() {
        let server = weather_server(RAIN_BODY, 1).await;
        let app = create_router(test_state(Some(server.uri())).await);

        let response = app
            .clone()
            .oneshot(request("POST", "/create/diary?date=2020-01-02", "rainy day"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["date"], "2020-01-02");
        assert_eq!(json["data"]["text"], "rainy day");
        assert_eq!(json["data"]["weather"], "Rain");
        assert_eq!(json["data"]["icon"], "10d");
        assert_eq!(json["data"]["temperature"], 280.5);
        assert!(json["data"].get("createdAt").is_some());

        let response = app
            .oneshot(request("GET", "/read/diary?date=2020-01-02", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["data"][0]["text"], "rainy day");
    }

    #[tokio::test]
    async fn invalid_date_is_bad_request() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(request("POST", "/create/diary?date=2020-13-45", "text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn missing_range_parameter_is_named() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(request("GET", "/read/diaries?startDate=2020-01-01", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"]["message"].as_str().unwrap();
        assert!(message.contains("endDate"), "unexpected message: {message}");
    }

    #[tokio::test]
    async fn reversed_range_is_empty_list() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(request(
                "GET",
                "/read/diaries?startDate=2020-02-01&endDate=2020-01-01",
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let server = weather_server(RAIN_BODY, 0).await;
        let app = create_router(test_state(Some(server.uri())).await);

        let response = app
            .oneshot(request("POST", "/create/diary?date=2020-01-02", "   "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_utf8_body_is_rejected_in_envelope() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/update/diary?date=2020-01-02")
                    .header("content-type", "text/plain")
                    .body(Body::from(vec![0xffu8, 0xfe, 0x41]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
        assert_eq!(json["error"]["message"], "Diary text must be valid UTF-8");
    }

    #[tokio::test]
    async fn update_without_entry_is_not_found() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(request("PUT", "/update/diary?date=2020-01-02", "new text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let server = weather_server(RAIN_BODY, 1).await;
        let app = create_router(test_state(Some(server.uri())).await);

        for text in ["first", "second"] {
            let response = app
                .clone()
                .oneshot(request("POST", "/create/diary?date=2020-01-02", text))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(request("PUT", "/update/diary?date=2020-01-02", "edited"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["text"], "edited");

        let response = app
            .clone()
            .oneshot(request("DELETE", "/delete/diary?date=2020-01-02", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["deleted"], 2);

        let response = app
            .oneshot(request("GET", "/read/diary?date=2020-01-02", ""))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn missing_api_key_is_service_unavailable() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(request("POST", "/create/diary?date=2020-01-02", "text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "service_unavailable");
    }

    #[tokio::test]
    async fn malformed_weather_is_bad_gateway() {
        let server = weather_server(r#"{"main":{}}"#, 1).await;
        let app = create_router(test_state(Some(server.uri())).await);

        let response = app
            .clone()
            .oneshot(request("POST", "/create/diary?date=2020-01-02", "text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "upstream_error");

        let response = app
            .oneshot(request("GET", "/read/diary?date=2020-01-02", ""))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn health_reports_weather_configuration() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["database"]["status"], "ok");
        assert_eq!(json["data"]["weather"]["status"], "unconfigured");
        assert_eq!(json["data"]["weather"]["location"], "seoul");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn openapi_json_is_valid() {
        let app = create_router(test_state(None).await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with("3"),
            "OpenAPI version should start with 3, got: {version}"
        );
        assert!(json["paths"].get("/read/diaries").is_some());
    }
}
