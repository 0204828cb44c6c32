//! Client of the subtitle search API.
use bytes::Bytes;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::{self, Config},
    errors::WyzieError,
    models::{SourcesResponse, SubtitleData},
    query::{self, SearchQuery},
    transport::Transport,
    webvtt::{self, VttDocument},
    Result,
};

/// Client of the Wyzie Subs API.
///
/// The transport defaults to [`reqwest::Client`]; any [`Transport`] can be
/// used with [`SubtitleClient::with_transport`].
///
/// ```no_run
/// use wyzie_subs::{Config, SearchQuery, SubtitleClient};
///
/// # async fn example() -> wyzie_subs::Result<()> {
/// let client = SubtitleClient::new(Config::default());
/// let subtitles = client
///     .search(&SearchQuery::imdb("tt0111161").with_language("en"))
///     .await?;
/// if let Some(subtitle) = subtitles.first() {
///     let vtt = client.fetch_vtt(&subtitle.url).await?;
///     println!("{vtt}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SubtitleClient<T = reqwest::Client> {
    transport: T,
    config: Config,
}

impl SubtitleClient {
    /// Create a client using `reqwest` and `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_transport(reqwest::Client::new(), config)
    }
}

impl Default for SubtitleClient {
    /// Create a client from the process-wide configuration, see [`config::configure`].
    fn default() -> Self {
        Self::new(config::current())
    }
}

impl<T: Transport> SubtitleClient<T> {
    /// Create a client sending its requests through `transport`.
    #[must_use]
    pub const fn with_transport(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Search URL for `query`, without sending anything.
    ///
    /// # Errors
    ///
    /// Will return [`WyzieError::Query`] if the query is invalid.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        Ok(query::build_search_url(query, self.config.base_url())?)
    }

    /// Search subtitles.
    ///
    /// # Errors
    ///
    /// Will return [`WyzieError::Query`] if the query is invalid, before any
    /// request. Otherwise forward request, status and decoding errors.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SubtitleData>> {
        let url = self.search_url(query)?;
        let subtitles: Vec<SubtitleData> = self.get_json(&url).await?;
        debug!("Found {} subtitle(s)", subtitles.len());
        Ok(subtitles)
    }

    /// List the sources enabled on the server.
    ///
    /// # Errors
    ///
    /// Will return `Err` on request, status or decoding failure.
    pub async fn sources(&self) -> Result<SourcesResponse> {
        let url = self.endpoint("/sources")?;
        self.get_json(&url).await
    }

    /// Download a SubRip file and convert it to `WebVTT`.
    ///
    /// # Errors
    ///
    /// Will return [`WyzieError::Url`] if `url` is not valid, request and
    /// status errors, and [`WyzieError::Srt`] if the body is not SubRip.
    pub async fn fetch_vtt(&self, url: &str) -> Result<VttDocument> {
        let url = Url::parse(url).map_err(|source| WyzieError::Url {
            source,
            url: url.to_owned(),
        })?;
        let body = self.get(&url).await?;
        Ok(webvtt::convert_to_vtt(&String::from_utf8_lossy(&body))?)
    }

    /// Transport of this client.
    #[cfg(test)]
    pub(crate) const fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of `path` on the configured server.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(query::endpoint(self.config.base_url(), path)?)
    }

    /// Fetch `url` and decode its JSON body.
    pub(crate) async fn get_json<D: DeserializeOwned>(&self, url: &Url) -> Result<D> {
        let body = self.get(url).await?;
        serde_json::from_slice(&body).map_err(|source| WyzieError::Decode {
            source,
            url: url.to_string(),
        })
    }

    /// Fetch `url`, failing on non-success status.
    async fn get(&self, url: &Url) -> Result<Bytes> {
        debug!("GET {url}");
        let response = self
            .transport
            .fetch(url)
            .await
            .map_err(|source| WyzieError::Request {
                source,
                url: url.to_string(),
            })?;
        if !response.is_success() {
            warn!("GET {url} returned {}", response.status);
            return Err(WyzieError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }
        debug!("GET {url}: {} bytes", response.body.len());
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{query::QueryError, transport::mock::MockTransport, webvtt::SrtError};
    use serde_json::json;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn client(transport: MockTransport) -> SubtitleClient<MockTransport> {
        SubtitleClient::with_transport(transport, Config::new("https://sub.wyzie.ru/"))
    }

    fn sample_response() -> serde_json::Value {
        json!([{
            "id": "12345",
            "url": "https://sub.wyzie.ru/c/vrf-abc/id/54321",
            "format": "srt",
            "encoding": "utf-8",
            "isHearingImpaired": false,
            "flagUrl": "https://flags.example/en.png",
            "media": "Sample Media",
            "display": "English",
            "language": "en",
            "source": "opensubtitles",
            "release": "Sample Release",
            "releases": ["Sample Release"],
            "fileName": "sample.srt",
            "origin": "WEB-DL"
        }])
    }

    #[tokio::test]
    async fn search_sends_query() {
        init_logger();
        let client = client(MockTransport::json(&sample_response()));
        let query = SearchQuery::tmdb(2190)
            .with_episode(1, 1)
            .with_language(["en", "es"])
            .with_format(["srt", "ass"])
            .with_encoding("utf-8")
            .with_source(["subdl", "subf2m"])
            .with_hearing_impaired(true);

        let subtitles = client.search(&query).await.unwrap();

        assert_eq!(
            client.transport.requests(),
            ["https://sub.wyzie.ru/search?id=2190&season=1&episode=1&encoding=utf-8\
              &language=en,es&format=srt,ass&source=subdl,subf2m&hi=true"]
        );
        assert_eq!(subtitles.len(), 1);
        assert_eq!(subtitles[0].media, "Sample Media");
        assert_eq!(subtitles[0].origin.as_deref(), Some("WEB-DL"));
    }

    #[tokio::test]
    async fn invalid_query_sends_nothing() {
        init_logger();
        let client = client(MockTransport::json(&sample_response()));

        let err = client
            .search(&SearchQuery::default().with_language("en"))
            .await
            .unwrap_err();
        assert!(matches!(err, WyzieError::Query(QueryError::MissingId)));

        let mut query = SearchQuery::tmdb(2190);
        query.episode = Some(1);
        let err = client.search(&query).await.unwrap_err();
        assert!(matches!(
            err,
            WyzieError::Query(QueryError::UnpairedSeasonEpisode)
        ));

        assert!(client.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn http_error_status() {
        init_logger();
        let client = client(MockTransport::new(503, "unavailable"));
        let err = client
            .search(&SearchQuery::imdb("tt0111161"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn invalid_json() {
        init_logger();
        let client = client(MockTransport::new(200, "<html>oops</html>"));
        let err = client
            .search(&SearchQuery::imdb("tt0111161"))
            .await
            .unwrap_err();
        assert!(matches!(err, WyzieError::Decode { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn sources() {
        init_logger();
        let client = client(MockTransport::json(&json!({
            "sources": ["opensubtitles", "subdl"]
        })));
        let sources = client.sources().await.unwrap();
        assert_eq!(sources.sources, ["opensubtitles", "subdl"]);
        assert_eq!(client.transport.requests(), ["https://sub.wyzie.ru/sources"]);
    }

    #[tokio::test]
    async fn fetch_vtt() {
        init_logger();
        let client = client(MockTransport::new(
            200,
            "1\n00:00:01,000 --> 00:00:03,000\nHello there!\n\n2\n00:00:04,000 --> 00:00:05,500\nGeneral Kenobi!\n",
        ));
        let vtt = client
            .fetch_vtt("https://sub.wyzie.ru/c/vrf/id/file")
            .await
            .unwrap();

        assert_eq!(
            client.transport.requests(),
            ["https://sub.wyzie.ru/c/vrf/id/file"]
        );
        assert!(vtt.as_str().starts_with("WEBVTT"));
        assert!(vtt.as_str().contains("00:00:01.000 --> 00:00:03.000"));
        assert!(vtt.as_str().contains("Hello there!"));
        assert!(vtt.as_str().contains("General Kenobi!"));
    }

    #[tokio::test]
    async fn fetch_vtt_not_srt() {
        init_logger();
        let client = client(MockTransport::new(200, "This is not a valid subtitle file"));
        let err = client
            .fetch_vtt("https://example.com/bad-subtitle")
            .await
            .unwrap_err();
        assert!(matches!(err, WyzieError::Srt(SrtError::NotSrt)));
    }

    #[tokio::test]
    async fn fetch_vtt_errors() {
        init_logger();
        let client = client(MockTransport::new(404, ""));
        let err = client.fetch_vtt("not a url").await.unwrap_err();
        assert!(matches!(err, WyzieError::Url { .. }));
        assert!(client.transport.requests().is_empty());

        let err = client
            .fetch_vtt("https://example.com/missing")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
