use reqwest::Client;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared client for backend calls.
///
/// Only the connect phase is bounded unless a whole-request timeout is
/// configured; a generation call otherwise runs until the server settles it.
pub fn build_backend_client(request_timeout_secs: Option<u64>) -> Client {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(secs) = request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default HTTP client: {err}");
        Client::new()
    })
}
