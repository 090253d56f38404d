//! Shared blocking HTTP client used by [`UrlResource`](crate::UrlResource).

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A lazily-built HTTP client shared by every URL resource of one loader.
///
/// Building a client is deferred to the first network request, so creating
/// URL handles stays free of I/O. Clones share the same underlying client.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<Inner>,
}

struct Inner {
    timeout: Duration,
    client: OnceLock<Result<reqwest::blocking::Client, String>>,
}

impl HttpClient {
    /// Create a client handle with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                timeout,
                client: OnceLock::new(),
            }),
        }
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Get the underlying client, building it on first use.
    ///
    /// A failed build is remembered; later calls report the same failure
    /// instead of retrying.
    pub(crate) fn client(&self) -> Result<&reqwest::blocking::Client, String> {
        self.inner
            .client
            .get_or_init(|| {
                reqwest::blocking::Client::builder()
                    .timeout(self.inner.timeout)
                    .build()
                    .map_err(|e| {
                        tracing::warn!(error = %e, "failed to build HTTP client");
                        e.to_string()
                    })
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns `true` if both handles share one client.
    pub fn same_client(&self, other: &HttpClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.inner.timeout)
            .field("built", &self.inner.client.get().is_some())
            .finish()
    }
}
