use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent with every outbound webhook request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Global HTTP client instance
///
/// Initialized lazily on first access and shared by every webhook provider,
/// so connections to the same webhook host are pooled across events.
///
/// # Features
/// - **Timeouts**: 10s connect timeout; request timeouts are set per request
/// - **Redirects**: reqwest defaults
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```ignore
/// use media_notification::external::client::HTTP_CLIENT;
///
/// let response = HTTP_CLIENT
///     .post("https://example.com/webhook")
///     .json(&serde_json::json!({"title": "Inception"}))
///     .send()
///     .await?;
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});
