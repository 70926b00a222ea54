use crate::burrow::BurrowClient;
use crate::collector::BurrowCollector;
use crate::error::{ExporterError, Result};
use crate::export::prometheus::{CONTENT_TYPE, PrometheusEncoder};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

#[derive(Clone)]
struct AppState {
    collector: Arc<BurrowCollector>,
    burrow: BurrowClient,
    telemetry_path: Arc<str>,
}

pub struct HttpServer {
    addr: SocketAddr,
    state: AppState,
}

impl HttpServer {
    pub fn new(
        addr: SocketAddr,
        telemetry_path: &str,
        collector: Arc<BurrowCollector>,
        burrow: BurrowClient,
    ) -> Self {
        Self {
            addr,
            state: AppState {
                collector,
                burrow,
                telemetry_path: Arc::from(telemetry_path),
            },
        }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let app = router(self.state);

        info!(addr = %self.addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| ExporterError::Http(e.to_string()))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                info!("HTTP server shutting down");
            })
            .await
            .map_err(|e| ExporterError::Http(e.to_string()))?;

        Ok(())
    }
}

fn router(state: AppState) -> Router {
    let telemetry_path = state.telemetry_path.to_string();
    Router::new()
        .route(&telemetry_path, get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/", get(root_handler))
        .with_state(state)
}

/// Every request runs a fresh collection cycle.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    let mut encoder = PrometheusEncoder::new();
    let report = state.collector.collect(&mut encoder).await;
    debug!(
        clusters = report.clusters,
        samples = report.samples,
        "Rendering metrics"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        encoder.render(&report),
    )
        .into_response()
}

async fn health_handler() -> Response {
    (StatusCode::OK, "OK").into_response()
}

async fn ready_handler(State(state): State<AppState>) -> Response {
    match state.burrow.health_check().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!(error = %e, "Burrow health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Not ready - burrow unreachable: {e}"),
            )
                .into_response()
        }
    }
}

async fn root_handler(State(state): State<AppState>) -> Html<String> {
    let path = &state.telemetry_path;
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Burrow Exporter</title></head>
<body>
<h1>Burrow Exporter</h1>
<p><a href="{path}">Metrics</a></p>
<p><a href="/health">Health</a></p>
<p><a href="/ready">Ready</a></p>
</body>
</html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burrow::fake::{FakeStatusSource, group_status, partition};
    use crate::config::BurrowConfig;
    use crate::metrics::families::MetricFilter;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    fn burrow_client(address: &str) -> BurrowClient {
        BurrowClient::new(&BurrowConfig {
            address: address.to_string(),
            api_version: 3,
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    fn unreachable_address() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn make_app(source: FakeStatusSource, burrow: BurrowClient) -> Router {
        let collector = Arc::new(BurrowCollector::new(
            Arc::new(source),
            MetricFilter::default(),
            1,
        ));
        router(AppState {
            collector,
            burrow,
            telemetry_path: Arc::from("/metrics"),
        })
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_metrics_endpoint_runs_cycle() {
        let source = FakeStatusSource::new()
            .with_clusters(&["prod"])
            .with_groups("prod", &["g1"])
            .with_topics("prod", &[])
            .with_group_status(group_status(
                "prod",
                "g1",
                "OK",
                5,
                vec![partition("t1", 0, "OK", 10, 15, 5)],
            ));
        let app = make_app(source, burrow_client(&unreachable_address()));

        let (status, body) = get_body(app, "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("kafka_burrow_total_lag{cluster=\"prod\",group=\"g1\"} 5"));
        assert!(body.contains("kafka_burrow_up 1"));
        assert!(body.contains("kafka_burrow_scrape_clusters 1"));
    }

    #[tokio::test]
    async fn test_metrics_endpoint_when_cluster_list_fails() {
        let app = make_app(FakeStatusSource::new(), burrow_client(&unreachable_address()));

        let (status, body) = get_body(app, "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("kafka_burrow_up 0"));
        assert!(!body.contains("kafka_burrow_partition_lag"));
    }

    #[tokio::test]
    async fn test_run_fails_when_port_is_taken() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = occupied.local_addr().unwrap();
        let collector = Arc::new(BurrowCollector::new(
            Arc::new(FakeStatusSource::new()),
            MetricFilter::default(),
            1,
        ));
        let server = HttpServer::new(
            addr,
            "/metrics",
            collector,
            burrow_client(&unreachable_address()),
        );
        let (_shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

        let result = tokio::time::timeout(Duration::from_secs(5), server.run(shutdown_rx))
            .await
            .expect("run should return instead of serving");

        assert!(matches!(result, Err(ExporterError::Http(_))));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = make_app(FakeStatusSource::new(), burrow_client(&unreachable_address()));
        let (status, _) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_endpoint_burrow_unreachable() {
        let app = make_app(FakeStatusSource::new(), burrow_client(&unreachable_address()));
        let (status, _) = get_body(app, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_ready_endpoint_burrow_healthy() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let admin = Router::new().route("/burrow/admin", get(|| async { "GOOD" }));
            axum::serve(listener, admin).await.unwrap();
        });

        let app = make_app(FakeStatusSource::new(), burrow_client(&format!("http://{addr}")));
        let (status, body) = get_body(app, "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Ready");
    }

    #[tokio::test]
    async fn test_root_links_telemetry_path() {
        let app = make_app(FakeStatusSource::new(), burrow_client(&unreachable_address()));
        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<a href="/metrics">Metrics</a>"#));
    }
}
