//! Search parameters for the subtitle search endpoint.
//!
//! A [`SearchQuery`] addresses one media title through a [`MediaId`] and
//! narrows the results with optional filters. Every filter accepts either a
//! single value or a list (see [`ParamValue`]); lists are sent comma-joined,
//! in the order given.
//!
//! ```
//! use wyzie_subs::{build_search_url, SearchQuery};
//!
//! let query = SearchQuery::tmdb(2190)
//!     .with_episode(1, 1)
//!     .with_language(["en", "es"])
//!     .with_hearing_impaired(true);
//! let url = build_search_url(&query, "https://sub.wyzie.ru").unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://sub.wyzie.ru/search?id=2190&season=1&episode=1&language=en,es&hi=true"
//! );
//! ```
mod builder;

pub use builder::build_search_url;
pub(crate) use builder::{encode_pairs, endpoint};

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};
use thiserror::Error;

/// Error for an invalid [`SearchQuery`] or base URL. Always raised before
/// any request is sent.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Neither a TMDB nor an IMDB id was given.
    #[error("Either tmdb_id or imdb_id must be provided.")]
    MissingId,

    /// Only one of season and episode was given.
    #[error("Season and episode must be provided together or omitted together.")]
    UnpairedSeasonEpisode,

    /// The configured base URL can't be turned into an endpoint URL.
    #[error("Invalid base URL '{url}'")]
    InvalidBaseUrl {
        /// Source error
        source: url::ParseError,
        /// URL we tried to parse
        url: String,
    },
}

/// Identifier of a media title, in one of the two supported catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaId {
    /// Numeric The Movie Database id.
    Tmdb(u64),
    /// IMDB id, like `tt0111161`.
    Imdb(String),
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tmdb(id) => write!(f, "{id}"),
            Self::Imdb(id) => f.write_str(id),
        }
    }
}

/// A parameter value that is either a single string or an ordered list.
///
/// The same shape is used by the API in responses (the `source` of a
/// subtitle), hence the untagged serde representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single value.
    One(String),
    /// A list of values, sent comma-joined.
    Many(Vec<String>),
}

impl ParamValue {
    /// Wildcard accepted by the `source` filter to search every provider.
    pub const ALL: &'static str = "all";

    /// Build the `all` wildcard value.
    #[must_use]
    pub fn all() -> Self {
        Self::One(Self::ALL.to_owned())
    }

    /// Values in their given order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// The serialized form: the value itself, or the list joined by `,`.
    #[must_use]
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::One(value) => Cow::Borrowed(value),
            Self::Many(values) => Cow::Owned(values.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().copied().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

/// Parameters of a subtitle search.
///
/// Fields are public so callers can fill them directly; the `with_*`
/// methods are a shorthand. [`SearchQuery::validate`] (called by
/// [`build_search_url`]) checks that an id is present and that season and
/// episode come together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Title to search subtitles for.
    pub id: Option<MediaId>,
    /// Season number, paired with `episode`.
    pub season: Option<u32>,
    /// Episode number, paired with `season`.
    pub episode: Option<u32>,
    /// ISO 639-1 language code(s).
    pub language: Option<ParamValue>,
    /// Character encoding(s) of the subtitle file.
    pub encoding: Option<ParamValue>,
    /// Subtitle file format(s), like `srt` or `ass`.
    pub format: Option<ParamValue>,
    /// Ask for hearing impaired subtitles, or exclude them.
    pub hi: Option<bool>,
    /// Provider(s) to scrape, or [`ParamValue::all`].
    pub source: Option<ParamValue>,
    /// Release group or name filter.
    pub release: Option<ParamValue>,
    /// Filename filter, sent as `filename`.
    pub filename: Option<ParamValue>,
    /// Filename filter, sent as `file`.
    pub file: Option<ParamValue>,
    /// Filename filter, sent as `fileName`.
    pub file_name: Option<ParamValue>,
    /// Content origin filter (`WEB`, `BluRay`, ...).
    pub origin: Option<ParamValue>,
    /// Bypass the service cache.
    pub refresh: Option<bool>,
    /// Additional filters, sent after every known key in insertion order.
    pub extra: Vec<(String, ParamValue)>,
}

impl SearchQuery {
    /// Search by TMDB id.
    #[must_use]
    pub fn tmdb(id: u64) -> Self {
        Self {
            id: Some(MediaId::Tmdb(id)),
            ..Self::default()
        }
    }

    /// Search by IMDB id.
    #[must_use]
    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            id: Some(MediaId::Imdb(id.into())),
            ..Self::default()
        }
    }

    /// Build a query from two optional ids. The TMDB id wins when both are
    /// given; with none, [`SearchQuery::validate`] will fail.
    #[must_use]
    pub fn from_ids(tmdb_id: Option<u64>, imdb_id: Option<String>) -> Self {
        let id = tmdb_id.map(MediaId::Tmdb).or_else(|| imdb_id.map(MediaId::Imdb));
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the season and episode together.
    #[must_use]
    pub const fn with_episode(mut self, season: u32, episode: u32) -> Self {
        self.season = Some(season);
        self.episode = Some(episode);
        self
    }

    /// Set the language filter.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<ParamValue>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the encoding filter.
    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<ParamValue>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Set the format filter.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<ParamValue>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the hearing impaired flag.
    #[must_use]
    pub const fn with_hearing_impaired(mut self, hi: bool) -> Self {
        self.hi = Some(hi);
        self
    }

    /// Set the source filter.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<ParamValue>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Search every source.
    #[must_use]
    pub fn all_sources(mut self) -> Self {
        self.source = Some(ParamValue::all());
        self
    }

    /// Set the release filter.
    #[must_use]
    pub fn with_release(mut self, release: impl Into<ParamValue>) -> Self {
        self.release = Some(release.into());
        self
    }

    /// Set the `filename` filter.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<ParamValue>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the `file` filter.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<ParamValue>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the `fileName` filter.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<ParamValue>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the origin filter.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<ParamValue>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Ask the service to bypass its cache.
    #[must_use]
    pub const fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = Some(refresh);
        self
    }

    /// Append an extra filter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Check the query invariants and return the id to search for.
    ///
    /// # Errors
    ///
    /// Will return [`QueryError::MissingId`] if no id is set, and
    /// [`QueryError::UnpairedSeasonEpisode`] if only one of season and
    /// episode is set.
    pub fn validate(&self) -> Result<&MediaId, QueryError> {
        let id = self.id.as_ref().ok_or(QueryError::MissingId)?;
        if self.season.is_some() != self.episode.is_some() {
            return Err(QueryError::UnpairedSeasonEpisode);
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id() {
        let query = SearchQuery::default().with_language("en");
        assert!(matches!(query.validate(), Err(QueryError::MissingId)));
    }

    #[test]
    fn unpaired_season_episode() {
        let mut query = SearchQuery::tmdb(2190);
        query.season = Some(1);
        assert!(matches!(
            query.validate(),
            Err(QueryError::UnpairedSeasonEpisode)
        ));

        let mut query = SearchQuery::tmdb(2190);
        query.episode = Some(1);
        assert!(matches!(
            query.validate(),
            Err(QueryError::UnpairedSeasonEpisode)
        ));
    }

    #[test]
    fn missing_id_reported_first() {
        let query = SearchQuery {
            season: Some(1),
            ..SearchQuery::default()
        };
        assert!(matches!(query.validate(), Err(QueryError::MissingId)));
    }

    #[test]
    fn paired_or_absent_is_valid() {
        let query = SearchQuery::imdb("tt0111161");
        assert_eq!(
            query.validate().unwrap(),
            &MediaId::Imdb("tt0111161".to_owned())
        );
        let query = SearchQuery::tmdb(2190).with_episode(2, 5);
        assert_eq!(query.validate().unwrap(), &MediaId::Tmdb(2190));
    }

    #[test]
    fn tmdb_id_takes_precedence() {
        let query = SearchQuery::from_ids(Some(550), Some("tt0137523".to_owned()));
        assert_eq!(query.id, Some(MediaId::Tmdb(550)));

        let query = SearchQuery::from_ids(None, Some("tt0137523".to_owned()));
        assert_eq!(query.id, Some(MediaId::Imdb("tt0137523".to_owned())));

        assert!(SearchQuery::from_ids(None, None).id.is_none());
    }

    #[test]
    fn param_value_joined() {
        assert_eq!(ParamValue::from("en").joined(), "en");
        assert_eq!(ParamValue::from(["en", "es", "fr"]).joined(), "en,es,fr");
        assert_eq!(ParamValue::from(vec!["subdl"]).values(), ["subdl"]);
        assert_eq!(ParamValue::all().joined(), "all");
    }

    #[test]
    fn param_value_from_json() {
        let one: ParamValue = serde_json::from_str(r#""opensubtitles""#).unwrap();
        assert_eq!(one, ParamValue::One("opensubtitles".to_owned()));
        let many: ParamValue = serde_json::from_str(r#"["subdl","subf2m"]"#).unwrap();
        assert_eq!(many.joined(), "subdl,subf2m");
    }
}
