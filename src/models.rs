//! Data returned by the API.
//!
//! These types only mirror the JSON answers; they are never built or
//! checked by the crate beyond decoding.
use serde::{Deserialize, Serialize};

use crate::query::ParamValue;

/// A subtitle found by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleData {
    /// Id of the subtitle.
    pub id: String,
    /// URL of the subtitle file.
    pub url: String,
    /// Format of the subtitle file.
    pub format: String,
    /// Character encoding of the file (`UTF-8`, `ASCII`, ...).
    pub encoding: String,
    /// Is the subtitle for hearing impaired ?
    pub is_hearing_impaired: bool,
    /// URL to a PNG of the flag of the subtitle language.
    pub flag_url: String,
    /// Name of the media.
    pub media: String,
    /// Display name of the language, like `English`.
    pub display: String,
    /// Two letters language code, like `en`.
    pub language: String,
    /// Provider(s) the subtitle comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ParamValue>,
    /// Release name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Releases this subtitle is compatible with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub releases: Option<Vec<String>>,
    /// Original filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Download count on the provider, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
    /// Origin of the content (`DVD`, `WEB`, `BluRay`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Release value that matched the `release` filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_release: Option<String>,
    /// Filter value that matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_filter: Option<String>,
}

/// Answer of the `/sources` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesResponse {
    /// Sources currently enabled on the server.
    pub sources: Vec<String>,
}

/// A movie or show found by a TMDB search.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbSearchResult {
    pub id: u64,
    /// `movie` or `tv`.
    pub media_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl TmdbSearchResult {
    /// Title of a movie, or name of a show.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

/// Summary of a TV season, as listed in [`TvDetails`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub id: u64,
    pub name: String,
    pub season_number: u32,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub episode_count: Option<u32>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Details of a TV show.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub seasons: Vec<SeasonSummary>,
}

/// Details of a TV episode. Keys not listed here are kept in `extra`.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetails {
    pub id: u64,
    pub name: String,
    pub episode_number: u32,
    pub season_number: u32,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub production_code: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub show_id: Option<u64>,
    #[serde(default)]
    pub still_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Details of a TV season.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDetails {
    pub id: String,
    pub season_number: u32,
    pub episodes: Vec<EpisodeDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_subtitle() {
        let json = r#"[{
            "id": "12345",
            "url": "https://sub.wyzie.ru/c/vrf-abc/id/54321",
            "format": "srt",
            "encoding": "utf-8",
            "isHearingImpaired": false,
            "flagUrl": "https://flags.example/en.png",
            "media": "Sample Media",
            "display": "English",
            "language": "en",
            "source": ["subdl", "opensubtitles"],
            "release": null,
            "releases": ["Sample Release"],
            "fileName": "sample.srt",
            "downloadCount": 42,
            "origin": "WEB-DL"
        }]"#;
        let subs: Vec<SubtitleData> = serde_json::from_str(json).unwrap();
        let sub = &subs[0];
        assert_eq!(sub.id, "12345");
        assert!(!sub.is_hearing_impaired);
        assert_eq!(sub.flag_url, "https://flags.example/en.png");
        assert_eq!(sub.source.as_ref().unwrap().joined(), "subdl,opensubtitles");
        assert_eq!(sub.release, None);
        assert_eq!(sub.file_name.as_deref(), Some("sample.srt"));
        assert_eq!(sub.download_count, Some(42));
        assert_eq!(sub.matched_filter, None);
    }

    #[test]
    fn decode_minimal_subtitle() {
        let json = r#"{
            "id": "1", "url": "u", "format": "srt", "encoding": "utf-8",
            "isHearingImpaired": true, "flagUrl": "f", "media": "m",
            "display": "French", "language": "fr", "source": "subf2m"
        }"#;
        let sub: SubtitleData = serde_json::from_str(json).unwrap();
        assert_eq!(sub.source, Some(ParamValue::One("subf2m".to_owned())));
        assert!(sub.releases.is_none());
    }

    #[test]
    fn decode_episode_with_extra_keys() {
        let json = r#"{
            "id": 63056, "name": "Winter Is Coming", "episode_number": 1,
            "season_number": 1, "runtime": null, "crew": []
        }"#;
        let episode: EpisodeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(episode.runtime, None);
        assert!(episode.extra.contains_key("crew"));
    }

    #[test]
    fn search_result_name() {
        let json = r#"[
            {"id": 123, "name": "Test Show", "media_type": "tv"},
            {"id": 550, "title": "Fight Club", "media_type": "movie", "poster_path": null}
        ]"#;
        let results: Vec<TmdbSearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results[0].display_name(), Some("Test Show"));
        assert_eq!(results[1].display_name(), Some("Fight Club"));
    }
}
