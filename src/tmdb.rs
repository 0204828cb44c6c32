//! Lookups on the TMDB proxy of the API, to find the id, season and episode
//! of a title before searching its subtitles.
use std::borrow::Cow;

use crate::{
    client::SubtitleClient,
    models::{SeasonDetails, TmdbSearchResult, TvDetails},
    query::encode_pairs,
    transport::Transport,
    Result,
};

/// Language of TMDB results when none is given.
pub const DEFAULT_LANGUAGE: &str = "en-US";

impl<T: Transport> SubtitleClient<T> {
    /// Search movies and shows by title.
    ///
    /// # Errors
    ///
    /// Will return `Err` on request, status or decoding failure.
    pub async fn search_tmdb(
        &self,
        query: &str,
        language: Option<&str>,
    ) -> Result<Vec<TmdbSearchResult>> {
        let mut url = self.endpoint("/api/tmdb/search")?;
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        url.set_query(Some(&encode_pairs([
            ("q", Cow::Borrowed(query)),
            ("language", Cow::Borrowed(language)),
        ])));
        self.get_json(&url).await
    }

    /// Details of a TV show, with its seasons.
    ///
    /// # Errors
    ///
    /// Will return `Err` on request, status or decoding failure.
    pub async fn tv_details(&self, tv_id: u64) -> Result<TvDetails> {
        let url = self.endpoint(&format!("/api/tmdb/tv/{tv_id}"))?;
        self.get_json(&url).await
    }

    /// Details of a season of a TV show, with its episodes.
    ///
    /// # Errors
    ///
    /// Will return `Err` on request, status or decoding failure.
    pub async fn season_details(&self, tv_id: u64, season: u32) -> Result<SeasonDetails> {
        let url = self.endpoint(&format!("/api/tmdb/tv/{tv_id}/{season}"))?;
        self.get_json(&url).await
    }
}
