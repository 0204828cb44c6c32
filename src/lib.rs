//! Client for the [Wyzie Subs](https://sub.wyzie.ru) subtitle search API.
//!
//! The crate builds search URLs from a [`SearchQuery`], fetches the matching
//! subtitles as [`SubtitleData`], and converts a downloaded SubRip file to
//! `WebVTT` with [`convert_to_vtt`]. It also forwards a few TMDB lookups,
//! useful to find the id, season and episode of a title.
//!
//! ```no_run
//! use wyzie_subs::SearchQuery;
//!
//! # async fn example() -> wyzie_subs::Result<()> {
//! let query = SearchQuery::tmdb(1399).with_episode(1, 1).with_language(["en", "fr"]);
//! for subtitle in wyzie_subs::search_subtitles(&query).await? {
//!     println!("{} ({}): {}", subtitle.display, subtitle.format, subtitle.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The free functions use a client built from the process-wide
//! configuration (see [`configure`]); create a [`SubtitleClient`] to hold
//! your own [`Config`] or to plug another [`Transport`].
//!
//! Logging goes through the [`log`] facade.

mod client;
pub mod config;
mod errors;
pub mod models;
pub mod query;
pub mod srt;
mod tmdb;
pub mod transport;
pub mod webvtt;

pub use client::SubtitleClient;
pub use config::{configure, Config};
pub use errors::WyzieError;
pub use models::{
    EpisodeDetails, SeasonDetails, SeasonSummary, SourcesResponse, SubtitleData,
    TmdbSearchResult, TvDetails,
};
pub use query::{build_search_url, MediaId, ParamValue, QueryError, SearchQuery};
pub use tmdb::DEFAULT_LANGUAGE;
pub use transport::{HttpResponse, Transport};
pub use webvtt::{convert_to_vtt, SrtError, VttDocument};

/// A short alias for `Result<T, WyzieError>`.
pub type Result<T> = std::result::Result<T, WyzieError>;

/// Search subtitles with the process-wide configuration.
///
/// # Errors
///
/// See [`SubtitleClient::search`].
pub async fn search_subtitles(query: &SearchQuery) -> Result<Vec<SubtitleData>> {
    SubtitleClient::default().search(query).await
}

/// Download a SubRip file and convert it to `WebVTT`.
///
/// # Errors
///
/// See [`SubtitleClient::fetch_vtt`].
pub async fn parse_to_vtt(url: &str) -> Result<VttDocument> {
    SubtitleClient::default().fetch_vtt(url).await
}

/// Search movies and shows on TMDB, in `language` or [`DEFAULT_LANGUAGE`].
///
/// # Errors
///
/// See [`SubtitleClient::search_tmdb`].
pub async fn search_tmdb(query: &str, language: Option<&str>) -> Result<Vec<TmdbSearchResult>> {
    SubtitleClient::default().search_tmdb(query, language).await
}

/// Details of a TV show.
///
/// # Errors
///
/// See [`SubtitleClient::tv_details`].
pub async fn get_tv_details(tv_id: u64) -> Result<TvDetails> {
    SubtitleClient::default().tv_details(tv_id).await
}

/// Details of a season of a TV show.
///
/// # Errors
///
/// See [`SubtitleClient::season_details`].
pub async fn get_season_details(tv_id: u64, season: u32) -> Result<SeasonDetails> {
    SubtitleClient::default().season_details(tv_id, season).await
}
