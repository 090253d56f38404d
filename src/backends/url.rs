//! Resources addressed by URL.

use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::SystemTime;

use reqwest::StatusCode;
use reqwest::blocking::Response;
use reqwest::header::{CONTENT_LENGTH, HeaderName, LAST_MODIFIED};

use crate::path_utils::SEPARATOR;
use crate::{ByteStream, HttpClient, Resource, ResourceError, ResourceHandle, ResourceKind, Url};

/// A resource at a URL.
///
/// `http` and `https` URLs are fetched with a blocking client shared through
/// [`HttpClient`]; `file` URLs are served from the local file system. Other
/// schemes are accepted as descriptors, report `exists() == false`, and fail
/// to open.
///
/// # Example
///
/// ```rust
/// use resource_loader::{Resource, UrlResource};
///
/// let doc = UrlResource::parse("https://example.com/docs/a.json")?;
/// assert_eq!(doc.filename().as_deref(), Some("a.json"));
///
/// let up = doc.create_relative("../b.json")?;
/// assert_eq!(up.url()?.as_str(), "https://example.com/b.json");
/// # Ok::<(), resource_loader::ResourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UrlResource {
    url: Url,
    http: HttpClient,
}

impl UrlResource {
    /// Create a handle for `url` with its own lazily-built HTTP client.
    pub fn new(url: Url) -> Self {
        Self::with_client(url, HttpClient::default())
    }

    /// Create a handle for `url` sharing `http` with other handles.
    pub fn with_client(url: Url, http: HttpClient) -> Self {
        Self { url, http }
    }

    /// Parse `location` as a URL.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Resolution`] if `location` is not a valid URL
    pub fn parse(location: &str) -> Result<Self, ResourceError> {
        Url::parse(location).map(Self::new).map_err(|e| {
            ResourceError::resolution(format!("URL [{location}]"), e.to_string())
        })
    }

    /// The URL of this resource.
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    fn is_http(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }

    fn local_path(&self) -> Option<PathBuf> {
        if self.url.scheme() == "file" {
            self.url.to_file_path().ok()
        } else {
            None
        }
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, ResourceError> {
        self.http.client().map_err(|reason| ResourceError::Io {
            operation: "http client",
            description: self.description(),
            source: std::io::Error::other(reason),
        })
    }

    fn head(&self) -> Result<Response, ResourceError> {
        tracing::trace!(url = %self.url, "HEAD");
        self.client()?
            .head(self.url.clone())
            .send()
            .map_err(|source| ResourceError::Http {
                description: self.description(),
                source,
            })
    }

    fn get(&self) -> Result<Response, ResourceError> {
        tracing::trace!(url = %self.url, "GET");
        let response = self
            .client()?
            .get(self.url.clone())
            .send()
            .map_err(|source| ResourceError::Http {
                description: self.description(),
                source,
            })?;
        self.check_status(response)
    }

    fn check_status(&self, response: Response) -> Result<Response, ResourceError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            Err(ResourceError::NotFound {
                description: self.description(),
            })
        } else {
            Err(ResourceError::Io {
                operation: "fetch",
                description: self.description(),
                source: std::io::Error::other(format!("HTTP status {status}")),
            })
        }
    }

    fn header(&self, name: HeaderName) -> Result<String, ResourceError> {
        let response = self.check_status(self.head()?)?;
        response
            .headers()
            .get(&name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ResourceError::resolution(self.description(), format!("no {name} header"))
            })
    }

    fn unsupported_scheme(&self, operation: &'static str) -> ResourceError {
        ResourceError::Io {
            operation,
            description: self.description(),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                format!("unsupported URL scheme '{}'", self.url.scheme()),
            ),
        }
    }
}

impl Resource for UrlResource {
    fn exists(&self) -> bool {
        if self.is_http() {
            match self.head() {
                Ok(response) if response.status() == StatusCode::METHOD_NOT_ALLOWED => {
                    self.get().is_ok()
                }
                Ok(response) => response.status().is_success(),
                Err(_) => false,
            }
        } else if let Some(path) = self.local_path() {
            path.try_exists().unwrap_or(false)
        } else {
            false
        }
    }

    fn is_readable(&self) -> bool {
        match self.local_path() {
            Some(path) => std::fs::metadata(path)
                .map(|m| !m.is_dir())
                .unwrap_or(false),
            None => self.exists(),
        }
    }

    fn is_file(&self) -> bool {
        self.url.scheme() == "file"
    }

    fn url(&self) -> Result<Url, ResourceError> {
        Ok(self.url.clone())
    }

    fn file(&self) -> Result<PathBuf, ResourceError> {
        if self.url.scheme() != "file" {
            return Err(ResourceError::UnresolvableLocator {
                description: self.description(),
                form: "file path",
            });
        }
        self.local_path().ok_or_else(|| {
            ResourceError::resolution(self.description(), "file URL has no local path")
        })
    }

    fn open_stream(&self) -> Result<ByteStream, ResourceError> {
        if self.is_http() {
            return Ok(Box::new(self.get()?));
        }
        match self.local_path() {
            Some(path) => {
                let file =
                    File::open(path).map_err(|e| ResourceError::io("open", self.description(), e))?;
                Ok(Box::new(file))
            }
            None => Err(self.unsupported_scheme("open")),
        }
    }

    fn content_length(&self) -> Result<u64, ResourceError> {
        if self.is_http() {
            let value = self.header(CONTENT_LENGTH)?;
            return value.trim().parse().map_err(|_| {
                ResourceError::resolution(
                    self.description(),
                    format!("invalid content-length '{value}'"),
                )
            });
        }
        match self.local_path() {
            Some(path) => std::fs::metadata(path)
                .map(|m| m.len())
                .map_err(|e| ResourceError::io("content_length", self.description(), e)),
            None => Err(ResourceError::resolution(
                self.description(),
                "content length unavailable for this scheme",
            )),
        }
    }

    fn last_modified(&self) -> Result<SystemTime, ResourceError> {
        if self.is_http() {
            let value = self.header(LAST_MODIFIED)?;
            return chrono::DateTime::parse_from_rfc2822(&value)
                .map(SystemTime::from)
                .map_err(|e| {
                    ResourceError::resolution(
                        self.description(),
                        format!("invalid last-modified '{value}': {e}"),
                    )
                });
        }
        match self.local_path() {
            Some(path) => std::fs::metadata(path)
                .map_err(|e| ResourceError::io("last_modified", self.description(), e))?
                .modified()
                .map_err(|e| ResourceError::resolution(self.description(), e.to_string())),
            None => Err(ResourceError::resolution(
                self.description(),
                "modification time unavailable for this scheme",
            )),
        }
    }

    fn create_relative(&self, relative_path: &str) -> Result<ResourceHandle, ResourceError> {
        if relative_path.is_empty() {
            return Err(ResourceError::resolution(
                self.description(),
                "empty relative path",
            ));
        }
        let relative = relative_path.replace('\\', "/");
        let joined = self.url.join(&relative).map_err(|e| {
            ResourceError::resolution(
                self.description(),
                format!("cannot apply '{relative_path}': {e}"),
            )
        })?;
        Ok(UrlResource::with_client(joined, self.http.clone()).into())
    }

    fn filename(&self) -> Option<String> {
        self.url
            .path()
            .rsplit(SEPARATOR)
            .find(|segment| !segment.is_empty())
            .map(str::to_string)
    }

    fn description(&self) -> String {
        format!("URL [{}]", self.url)
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::Url
    }
}

impl PartialEq for UrlResource {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for UrlResource {}

impl Hash for UrlResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl fmt::Display for UrlResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;

    const LAST_MODIFIED_HTTP: &str = "Sun, 06 Nov 1994 08:49:37 GMT";

    fn resource_at(server: &mockito::Server, path: &str) -> UrlResource {
        UrlResource::parse(&format!("{}{path}", server.url())).unwrap()
    }

    #[test]
    fn http_resource_reads_and_reports_metadata() {
        let mut server = mockito::Server::new();
        let _head = server
            .mock("HEAD", "/files/data.txt")
            .with_status(200)
            .with_header("content-length", "11")
            .with_header("last-modified", LAST_MODIFIED_HTTP)
            .with_body("remote body")
            .create();
        let _get = server
            .mock("GET", "/files/data.txt")
            .with_status(200)
            .with_body("remote body")
            .create();

        let r = resource_at(&server, "/files/data.txt");
        assert!(r.exists());
        assert!(r.is_readable());

        let mut body = String::new();
        r.open_stream().unwrap().read_to_string(&mut body).unwrap();
        assert_eq!(body, "remote body");
        assert_eq!(r.content_length().unwrap(), 11);

        let modified = r.last_modified().unwrap();
        let secs = modified
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(secs, 784_111_777);
    }

    #[test]
    fn http_not_found_maps_to_not_found() {
        let mut server = mockito::Server::new();
        let head = server
            .mock("HEAD", "/missing.txt")
            .with_status(404)
            .create();
        let get = server
            .mock("GET", "/missing.txt")
            .with_status(404)
            .create();

        let r = resource_at(&server, "/missing.txt");
        assert!(!r.exists());
        assert!(matches!(r.open_stream(), Err(ResourceError::NotFound { .. })));
        head.assert();
        get.assert();
    }

    #[test]
    fn http_gone_maps_to_not_found() {
        let mut server = mockito::Server::new();
        let _get = server.mock("GET", "/old.txt").with_status(410).create();

        let r = resource_at(&server, "/old.txt");
        let err = r.open_stream().err().unwrap();
        assert_eq!(err.kind(), crate::ErrorKind::NotFound);
    }

    #[test]
    fn http_server_error_maps_to_io() {
        let mut server = mockito::Server::new();
        let _get = server.mock("GET", "/broken").with_status(500).create();

        let r = resource_at(&server, "/broken");
        assert!(matches!(r.open_stream(), Err(ResourceError::Io { .. })));
    }

    #[test]
    fn head_not_allowed_falls_back_to_get() {
        let mut server = mockito::Server::new();
        let head = server
            .mock("HEAD", "/no-head.txt")
            .with_status(405)
            .create();
        let get = server
            .mock("GET", "/no-head.txt")
            .with_status(200)
            .with_body("ok")
            .create();

        let r = resource_at(&server, "/no-head.txt");
        assert!(r.exists());
        head.assert();
        get.assert();
    }

    #[test]
    fn http_missing_header_is_resolution_error() {
        let mut server = mockito::Server::new();
        let _head = server
            .mock("HEAD", "/plain.txt")
            .with_status(200)
            .create();

        let r = resource_at(&server, "/plain.txt");
        assert!(matches!(
            r.last_modified(),
            Err(ResourceError::Resolution { .. })
        ));
    }

    #[test]
    fn unreachable_host_does_not_exist() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let r = UrlResource::parse(&format!("http://{addr}/gone")).unwrap();
        assert!(!r.exists());
        assert!(!r.is_readable());
    }

    #[test]
    fn remote_url_has_no_file() {
        let r = UrlResource::parse("https://example.com/a.json").unwrap();
        assert!(r.url().is_ok());
        assert!(!r.is_file());
        assert!(matches!(
            r.file(),
            Err(ResourceError::UnresolvableLocator { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn file_url_serves_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.txt");
        std::fs::write(&path, "local").unwrap();

        let r = UrlResource::new(Url::from_file_path(&path).unwrap());
        assert!(r.exists());
        assert!(r.is_file());
        assert_eq!(r.file().unwrap(), path);
        assert_eq!(r.content_length().unwrap(), 5);
    }

    #[test]
    fn unknown_scheme_is_inert() {
        let r = UrlResource::parse("ftp://example.com/pub/file.bin").unwrap();
        assert!(!r.exists());
        assert!(matches!(r.open_stream(), Err(ResourceError::Io { .. })));
        assert!(matches!(
            r.content_length(),
            Err(ResourceError::Resolution { .. })
        ));
    }

    #[test]
    fn create_relative_joins_urls() {
        let r = UrlResource::parse("https://example.com/a/b/c.json").unwrap();
        let sibling = r.create_relative("../d.json").unwrap();
        assert_eq!(sibling.url().unwrap().as_str(), "https://example.com/a/d.json");

        let rooted = r.create_relative("/root.json").unwrap();
        assert_eq!(rooted.url().unwrap().as_str(), "https://example.com/root.json");

        assert!(r.create_relative("").is_err());
    }

    #[test]
    fn create_relative_shares_client() {
        let r = UrlResource::parse("https://example.com/a/b.json").unwrap();
        match r.create_relative("c.json").unwrap() {
            ResourceHandle::Url(child) => assert!(child.http.same_client(&r.http)),
            other => panic!("unexpected handle: {other:?}"),
        }
    }

    #[test]
    fn filename_skips_trailing_slash() {
        let r = UrlResource::parse("https://example.com/docs/").unwrap();
        assert_eq!(r.filename().as_deref(), Some("docs"));
        let root = UrlResource::parse("https://example.com/").unwrap();
        assert_eq!(root.filename(), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            UrlResource::parse("not a url"),
            Err(ResourceError::Resolution { .. })
        ));
    }
}
