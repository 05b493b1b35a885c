use tracing::debug;

pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}
