use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

const USER_AGENT: &str = concat!("IslandwindClient/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by every client in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Remove trailing slash if present
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `ISLANDWIND_API_URL` and `ISLANDWIND_API_TIMEOUT` (milliseconds).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ISLANDWIND_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let config = Self::new(base_url);
        match std::env::var("ISLANDWIND_API_TIMEOUT") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => config.with_timeout(Duration::from_millis(ms)),
                Err(e) => {
                    tracing::warn!(
                        "Ignoring invalid ISLANDWIND_API_TIMEOUT {:?}: {}. Using {:?}",
                        raw,
                        e,
                        DEFAULT_TIMEOUT
                    );
                    config
                }
            },
            Err(_) => config,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins an absolute API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn build_http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
