//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use tvbridge_app::ports::{AccessoryCache, CommandTransport};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api` and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<T, C>(state: AppState<T, C>) -> Router
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use tvbridge_app::services::platform::PlatformService;
    use tvbridge_domain::accessory::AccessoryRecord;
    use tvbridge_domain::command::CommandRequest;
    use tvbridge_domain::device::{DeviceDescriptor, PowerCommands, SourceDescriptor, SourceType};
    use tvbridge_domain::error::{BridgeError, HttpError};
    use tvbridge_domain::id::AccessoryUuid;

    /// Transport stub whose outcome is fixed at construction.
    #[derive(Clone, Default)]
    struct StubTransport {
        failure: Option<HttpError>,
    }

    impl CommandTransport for StubTransport {
        async fn execute(&self, _request: &CommandRequest) -> Result<(), HttpError> {
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    /// Cache stub that holds nothing and accepts everything.
    struct StubCache;

    impl AccessoryCache for StubCache {
        async fn load(&self) -> Result<Vec<AccessoryRecord>, BridgeError> {
            Ok(Vec::new())
        }
        async fn register(&self, _records: &[AccessoryRecord]) -> Result<(), BridgeError> {
            Ok(())
        }
        async fn update_context(&self, _records: &[AccessoryRecord]) -> Result<(), BridgeError> {
            Ok(())
        }
        async fn unregister(&self, _records: &[AccessoryRecord]) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    fn catalog() -> Vec<DeviceDescriptor> {
        vec![DeviceDescriptor {
            name: "Living Room TV".to_string(),
            serial_number: Some("TV1".to_string()),
            model: "TV".to_string(),
            manufacturer: "Generic".to_string(),
            method: None,
            headers: std::collections::HashMap::new(),
            power: PowerCommands {
                on_url: Some("http://dev/on".to_string()),
                off_url: Some("http://dev/off".to_string()),
                ..PowerCommands::default()
            },
            sources: vec![SourceDescriptor {
                name: "HDMI1".to_string(),
                source_type: SourceType::Hdmi,
                url: Some("http://dev/hdmi1".to_string()),
                method: None,
                headers: std::collections::HashMap::new(),
                body: None,
            }],
        }]
    }

    async fn app(transport: StubTransport) -> Router {
        let mut platform = PlatformService::new(transport, StubCache);
        platform.reload(&catalog()).await.unwrap();
        build(AppState::new(platform))
    }

    fn uuid() -> AccessoryUuid {
        AccessoryUuid::from_serial("TV1")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let resp = app(StubTransport::default())
            .await
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_registered_accessories() {
        let resp = app(StubTransport::default())
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/accessories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json[0]["display_name"], "Living Room TV");
        assert_eq!(json[0]["active"], false);
        assert_eq!(json[0]["active_identifier"], 1);
        assert_eq!(json[0]["sources"][0]["identifier"], 1);
        assert_eq!(json[0]["sources"][0]["name"], "HDMI1");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_accessory() {
        let resp = app(StubTransport::default())
            .await
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/api/accessories/{}",
                        AccessoryUuid::from_serial("NOPE")
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_malformed_uuid() {
        let resp = app(StubTransport::default())
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/accessories/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_commit_power_state_on_successful_set() {
        let app = app(StubTransport::default()).await;

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/accessories/{}/active", uuid()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"active": true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["active"], true);

        // The committed state is visible on a subsequent read.
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/accessories/{}", uuid()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["active"], true);
    }

    #[tokio::test]
    async fn should_answer_bad_gateway_and_keep_state_when_device_rejects() {
        let app = app(StubTransport {
            failure: Some(HttpError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        })
        .await;

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/accessories/{}/active", uuid()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"active": true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/accessories/{}", uuid()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["active"], false);
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_out_of_range_identifier() {
        let resp = app(StubTransport::default())
            .await
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/accessories/{}/active-identifier", uuid()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"identifier": 9}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
