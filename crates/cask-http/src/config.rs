//! Transport configuration

use std::time::Duration;

/// Default host of the hosted base service.
pub const DEFAULT_HOST: &str = "database.cask.sh";

/// Default request timeout for base operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Immutable configuration for one base collection.
///
/// Captured once at client construction; there is no process-wide
/// mutable state.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// API key used to sign every request
    pub project_key: String,

    /// Project the collection belongs to
    pub project_id: String,

    /// Name of the collection
    pub name: String,

    /// Service host. A bare hostname is reached over HTTPS; a value with
    /// an explicit `http://` or `https://` scheme is used as-is.
    pub host: String,

    /// Total request timeout
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Create a config for the given collection with default host and timeout.
    pub fn new(
        name: impl Into<String>,
        project_key: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            project_id: project_id.into(),
            name: name.into(),
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the service host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Root URL for the collection: `{host}/v1/{project_id}/{name}`.
    pub fn root_url(&self) -> String {
        let origin = if self.host.starts_with("http://") || self.host.starts_with("https://") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        };
        format!(
            "{}/v1/{}/{}",
            origin.trim_end_matches('/'),
            self.project_id,
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::new("books", "secret", "proj1");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.root_url(), "https://database.cask.sh/v1/proj1/books");
    }

    #[test]
    fn test_explicit_scheme_kept() {
        let config =
            ServiceConfig::new("books", "secret", "proj1").host("http://127.0.0.1:8080");
        assert_eq!(config.root_url(), "http://127.0.0.1:8080/v1/proj1/books");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ServiceConfig::new("books", "secret", "proj1").host("https://db.local/");
        assert_eq!(config.root_url(), "https://db.local/v1/proj1/books");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServiceConfig::new("books", "secret", "proj1")
            .host("db.example.com")
            .timeout(Duration::from_secs(60));
        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }
}
