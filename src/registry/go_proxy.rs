//! Go Module Proxy source
//!
//! Fetches the published version list of a module.
//! API endpoint:
//! - List versions: {proxy}/{module}/@v/list

use crate::error::{ConfigError, RegistryError};
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;

/// Go Module Proxy base URL
pub const DEFAULT_PROXY_URL: &str = "https://proxy.golang.org";

/// Go Module Proxy source
pub struct GoProxySource {
    client: HttpClient,
    base_url: String,
}

impl GoProxySource {
    /// Create a source backed by the given proxy
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build the URL for listing versions
    fn build_list_url(&self, module: &str) -> String {
        format!("{}/{}/@v/list", self.base_url, encode_module_path(module))
    }
}

/// Case-encode a module path: uppercase letters become `!` plus lowercase
pub fn encode_module_path(module: &str) -> String {
    let mut encoded = String::with_capacity(module.len());

    for ch in module.chars() {
        if ch.is_uppercase() {
            encoded.push('!');
            encoded.extend(ch.to_lowercase());
        } else {
            encoded.push(ch);
        }
    }

    encoded
}

/// Pick the proxy URL from a `--proxy` / `GOPROXY` value
///
/// The value may be a GOPROXY-style list separated by `,` or `|`. The first
/// http(s) entry wins; an entry without a scheme is taken as `https://`.
/// `direct` and `off` are skipped, and a list without any proxy entry falls
/// back to the public proxy.
pub fn resolve_proxy_url(value: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_PROXY_URL.to_string());
    };

    for entry in value.split([',', '|']).map(str::trim) {
        match entry {
            "" | "direct" | "off" => continue,
            url if url.starts_with("http://") || url.starts_with("https://") => {
                return Ok(url.trim_end_matches('/').to_string());
            }
            host if !host.contains(":/") => {
                return Ok(format!("https://{}", host.trim_end_matches('/')));
            }
            _ => {
                return Err(ConfigError::InvalidProxy {
                    value: entry.to_string(),
                })
            }
        }
    }

    Ok(DEFAULT_PROXY_URL.to_string())
}

#[async_trait]
impl VersionSource for GoProxySource {
    fn name(&self) -> &'static str {
        "Go Proxy"
    }

    async fn fetch_version_list(&self, module: &str) -> Result<String, RegistryError> {
        let url = self.build_list_url(module);
        self.client.get_text(&url, module, self.name()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn source(base_url: &str) -> GoProxySource {
        GoProxySource::with_base_url(HttpClient::new().unwrap().with_max_retries(0), base_url)
    }

    #[test]
    fn test_go_proxy_source_name() {
        assert_eq!(source(DEFAULT_PROXY_URL).name(), "Go Proxy");
    }

    #[test]
    fn test_encode_module_path_simple() {
        assert_eq!(
            encode_module_path("github.com/gin-gonic/gin"),
            "github.com/gin-gonic/gin"
        );
    }

    #[test]
    fn test_encode_module_path_with_uppercase() {
        assert_eq!(
            encode_module_path("github.com/Azure/azure-sdk-for-go"),
            "github.com/!azure/azure-sdk-for-go"
        );
        assert_eq!(
            encode_module_path("github.com/BurntSushi/toml"),
            "github.com/!burnt!sushi/toml"
        );
    }

    #[test]
    fn test_build_list_url() {
        assert_eq!(
            source("https://proxy.example.com/").build_list_url("github.com/gin-gonic/gin"),
            "https://proxy.example.com/github.com/gin-gonic/gin/@v/list"
        );
    }

    #[test]
    fn test_resolve_proxy_url() {
        assert_eq!(resolve_proxy_url(None).unwrap(), DEFAULT_PROXY_URL);
        assert_eq!(resolve_proxy_url(Some("")).unwrap(), DEFAULT_PROXY_URL);
        assert_eq!(resolve_proxy_url(Some("direct")).unwrap(), DEFAULT_PROXY_URL);
        assert_eq!(resolve_proxy_url(Some("off")).unwrap(), DEFAULT_PROXY_URL);
        assert_eq!(
            resolve_proxy_url(Some("https://goproxy.io,direct")).unwrap(),
            "https://goproxy.io"
        );
        assert_eq!(
            resolve_proxy_url(Some("direct|http://localhost:3000/")).unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_resolve_proxy_url_without_scheme() {
        assert_eq!(
            resolve_proxy_url(Some("goproxy.cn,direct")).unwrap(),
            "https://goproxy.cn"
        );
        assert_eq!(
            resolve_proxy_url(Some("off|corp.example.com/go/")).unwrap(),
            "https://corp.example.com/go"
        );
    }

    #[test]
    fn test_resolve_proxy_url_rejects_unknown_scheme() {
        let err = resolve_proxy_url(Some("file:///tmp/cache,direct")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProxy { value } if value == "file:///tmp/cache"));
    }

    #[tokio::test]
    async fn test_fetch_version_list() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/golang.org/x/text/@v/list")
            .with_status(200)
            .with_body("v0.13.0\nv0.14.0\nv0.15.0\n")
            .create_async()
            .await;

        let body = source(&server.url())
            .fetch_version_list("golang.org/x/text")
            .await
            .unwrap();

        assert_eq!(body, "v0.13.0\nv0.14.0\nv0.15.0\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_version_list_escapes_uppercase() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/github.com/!burnt!sushi/toml/@v/list")
            .with_status(200)
            .with_body("v1.3.2\n")
            .create_async()
            .await;

        let body = source(&server.url())
            .fetch_version_list("github.com/BurntSushi/toml")
            .await
            .unwrap();

        assert_eq!(body, "v1.3.2\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_version_list_empty_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/example.com/fresh/@v/list")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let body = source(&server.url())
            .fetch_version_list("example.com/fresh")
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_version_list_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/github.com/nonexistent/module/@v/list")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let err = source(&server.url())
            .fetch_version_list("github.com/nonexistent/module")
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::PackageNotFound { .. }));
    }
}
