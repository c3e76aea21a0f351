// HTTP client for the public game-data endpoints.
// Handles request setup, status checking and JSON decoding.

use std::path::Path;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, RiftdexError};

/// Read-only client for Data Dragon and Community Dragon.
#[derive(Debug, Clone)]
pub struct DataClient {
    client: Client,
}

impl DataClient {
    /// Create a client using the timeout from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("riftdex/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(RiftdexError::Api)?;

        Ok(Self { client })
    }

    /// GET a URL and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "fetching");
        let response = self.client.get(url).send().await.map_err(RiftdexError::Api)?;
        let response = check_response(response)?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Read and decode a local JSON file.
    pub async fn read_json_file<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        debug!(path = %path.display(), "reading local dataset");
        let contents = tokio::fs::read(path).await?;
        let body = serde_json::from_slice(&contents)?;
        Ok(body)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(RiftdexError::NotFound(response.url().to_string())),
        status => Err(RiftdexError::Http {
            status,
            url: response.url().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
    }

    fn client() -> DataClient {
        DataClient::new(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "Ahri"})))
            .mount(&server)
            .await;

        let payload: Payload = client()
            .get_json(&format!("{}/data.json", server.uri()))
            .await
            .unwrap();
        assert_eq!(payload.name, "Ahri");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result: Result<Payload> = client().get_json(&format!("{}/missing.json", server.uri())).await;
        assert!(matches!(result, Err(RiftdexError::NotFound(url)) if url.ends_with("/missing.json")));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result: Result<Payload> = client().get_json(&server.uri()).await;
        assert!(matches!(
            result,
            Err(RiftdexError::Http { status, .. }) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_bad_json_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result: Result<Payload> = client().get_json(&server.uri()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "Lux"}"#).unwrap();

        let payload: Payload = client().read_json_file(file.path()).await.unwrap();
        assert_eq!(payload, Payload { name: "Lux".to_string() });
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result: Result<Payload> = client().read_json_file(&dir.path().join("nope.json")).await;
        assert!(matches!(result, Err(RiftdexError::Io(_))));
    }
}
