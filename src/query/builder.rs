//! Serialize a [`SearchQuery`] into the search endpoint URL.
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use url::Url;

use super::{ParamValue, QueryError, SearchQuery};

/// Characters left as-is in query keys and values. `,` is kept so lists stay
/// readable (`language=en,es`).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',');

const SEARCH_PATH: &str = "/search";

/// Join `path` to `base_url`, ignoring trailing slashes of the base.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, QueryError> {
    let url = format!("{}{path}", base_url.trim_end_matches('/'));
    Url::parse(&url).map_err(|source| QueryError::InvalidBaseUrl { source, url })
}

/// Percent-encode `key=value` pairs and join them with `&`.
pub(crate) fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, Cow<'a, str>)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_VALUE),
                utf8_percent_encode(&value, QUERY_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn push_value<'a>(
    pairs: &mut Vec<(&'a str, Cow<'a, str>)>,
    key: &'a str,
    value: Option<&'a ParamValue>,
) {
    if let Some(value) = value {
        pairs.push((key, value.joined()));
    }
}

/// Validate `query` and build the search URL below `base_url`.
///
/// Keys are written in a fixed order: `id`, `season`, `episode`, `encoding`,
/// `language`, `format`, `source`, `release`, `filename`, `file`,
/// `fileName`, `origin`, `hi`, `refresh`, then the extra keys. Unset fields
/// are left out.
///
/// # Errors
///
/// Will return `Err` if the query is invalid (see [`SearchQuery::validate`])
/// or if `base_url` is not an absolute URL.
pub fn build_search_url(query: &SearchQuery, base_url: &str) -> Result<Url, QueryError> {
    let id = query.validate()?;
    let mut url = endpoint(base_url, SEARCH_PATH)?;

    let mut pairs: Vec<(&str, Cow<'_, str>)> = vec![("id", Cow::Owned(id.to_string()))];
    if let (Some(season), Some(episode)) = (query.season, query.episode) {
        pairs.push(("season", Cow::Owned(season.to_string())));
        pairs.push(("episode", Cow::Owned(episode.to_string())));
    }
    push_value(&mut pairs, "encoding", query.encoding.as_ref());
    push_value(&mut pairs, "language", query.language.as_ref());
    push_value(&mut pairs, "format", query.format.as_ref());
    push_value(&mut pairs, "source", query.source.as_ref());
    push_value(&mut pairs, "release", query.release.as_ref());
    push_value(&mut pairs, "filename", query.filename.as_ref());
    push_value(&mut pairs, "file", query.file.as_ref());
    push_value(&mut pairs, "fileName", query.file_name.as_ref());
    push_value(&mut pairs, "origin", query.origin.as_ref());
    if let Some(hi) = query.hi {
        pairs.push(("hi", Cow::Owned(hi.to_string())));
    }
    if let Some(refresh) = query.refresh {
        pairs.push(("refresh", Cow::Owned(refresh.to_string())));
    }
    pairs.extend(
        query
            .extra
            .iter()
            .map(|(key, value)| (key.as_str(), value.joined())),
    );

    url.set_query(Some(&encode_pairs(pairs)));
    debug!("Search URL: {url}");
    Ok(url)
}
