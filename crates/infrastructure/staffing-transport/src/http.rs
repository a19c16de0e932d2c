use crate::request::decode_body;
use crate::{ApiPath, ApiRequest, ApiResponse, Transport, TransportError};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::{debug, warn};

/// HTTP client with the fixed JSON content type every backend call uses.
pub fn default_http_client() -> Result<Client, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| TransportError::Request(format!("failed to build http client: {e}")))
}

/// reqwest-backed transport addressing a single base URL.
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(default_http_client()?, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let base = Url::parse(base_url)
            .map_err(|e| TransportError::Request(format!("invalid base url {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::Request(format!(
                "base url {base_url} cannot carry a path"
            )));
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append `path` below the base address, one encoded segment per entry.
    pub fn url_for(&self, path: &ApiPath) -> Result<Url, TransportError> {
        let mut url = self.base.clone();
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|_| TransportError::Request("cannot mutate url segments".into()))?;
            segs.pop_if_empty();
            segs.extend(path.segments());
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_builder() {
                TransportError::Request(format!("{} {url}: {e}", request.method))
            } else {
                warn!("{} {} failed without a response: {}", request.method, url, e);
                TransportError::NoResponse(format!("{} {url}: {e}", request.method))
            }
        })?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| {
            warn!("reading response body from {} failed: {}", url, e);
            TransportError::NoResponse(format!("reading response from {url}: {e}"))
        })?;
        let body = decode_body(&bytes);

        if status.is_success() {
            Ok(ApiResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            warn!("{} {} answered {}", request.method, url, status);
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_appends_below_base_path() {
        let t = HttpTransport::new("http://localhost:8080/api/").unwrap();
        let url = t.url_for(&ApiPath::new(["employees", "7", "terminate"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/employees/7/terminate");

        let t = HttpTransport::new("http://localhost:8080").unwrap();
        let url = t.url_for(&ApiPath::new(["employees"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/employees");
    }

    #[test]
    fn id_segments_are_encoded() {
        let t = HttpTransport::new("http://localhost:8080").unwrap();
        let url = t.url_for(&ApiPath::new(["projects", "a/b c"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/projects/a%2Fb%20c");
    }

    #[test]
    fn invalid_base_is_a_request_error() {
        assert!(matches!(
            HttpTransport::new("not a url"),
            Err(TransportError::Request(_))
        ));
        assert!(matches!(
            HttpTransport::new("mailto:ops@example.com"),
            Err(TransportError::Request(_))
        ));
    }
}
