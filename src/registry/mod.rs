//! Module proxy access for fetching published version lists
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - Go Module Proxy source
//! - Proxy URL resolution from `--proxy` / `GOPROXY`

mod client;
mod go_proxy;

pub use client::HttpClient;
pub use go_proxy::{resolve_proxy_url, GoProxySource, DEFAULT_PROXY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for sources of published module versions
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Human-readable source name used in error messages
    fn name(&self) -> &'static str;

    /// Fetch the raw newline-separated version list for a module
    ///
    /// The body is returned verbatim; tokenizing and validation happen later.
    async fn fetch_version_list(&self, module: &str) -> Result<String, RegistryError>;
}
