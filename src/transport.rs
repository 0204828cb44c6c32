//! HTTP access used by the client.
//!
//! The client only needs one capability: send a `GET` to a URL and get back
//! the status and the body. [`Transport`] is implemented for
//! [`reqwest::Client`]; tests plug in their own implementation.
use bytes::Bytes;
use std::future::Future;
use url::Url;

/// Status and body of an HTTP answer.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Is the status in the `2xx` range ?
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// Send a `GET` request and collect the answer.
pub trait Transport: Sync {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request can't be sent or the body can't be read.
    /// Non-success statuses are not errors at this level.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, reqwest::Error>> + Send;
}

impl Transport for reqwest::Client {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, reqwest::Error>> + Send {
        let request = self.get(url.clone());
        async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok(HttpResponse { status, body })
        }
    }
}
