// Users API HTTP client.
// Issues the single GET that populates the snapshot and checks the response status.

use std::future::Future;
use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::FetchError;

/// Source of raw snapshot bytes.
pub trait Fetch {
    /// Fetch the body at `url`. Any transport failure or non-success status is an error.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// HTTP client for the users endpoint.
pub struct UsersClient {
    client: Client,
}

impl UsersClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("employee-export/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Check response status and convert errors.
    fn check_response(response: Response) -> Result<Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            })
        }
    }
}

impl Fetch for UsersClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_response(response)?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
