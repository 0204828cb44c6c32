//! `WebVTT` functionality
//!
//! Convert a SubRip document into `WebVTT` text.
//!
//! ```
//! let srt = "1\n00:00:01,000 --> 00:00:03,000\nHello there!\n";
//! let vtt = wyzie_subs::convert_to_vtt(srt).unwrap();
//! assert_eq!(vtt.as_str(), "WEBVTT\n\n00:00:01.000 --> 00:00:03.000\nHello there!\n\n");
//! ```
use log::debug;
use regex::Regex;
use std::{fmt, sync::LazyLock};
use thiserror::Error;

use crate::srt::{self, Cue};

/// Header line of every `WebVTT` file.
pub const HEADER: &str = "WEBVTT";

static EXTRA_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Error for Srt conversion.
#[derive(Debug, Error)]
pub enum SrtError {
    /// No line of the document looks like an Srt timing line.
    #[error("Invalid subtitle format: not SRT")]
    NotSrt,
}

/// A `WebVTT` document produced by [`convert_to_vtt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VttDocument {
    text: String,
    cue_count: usize,
}

impl VttDocument {
    /// Text of the document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of cues written in the document.
    #[must_use]
    pub const fn cue_count(&self) -> usize {
        self.cue_count
    }

    /// Take the text of the document.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for VttDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for VttDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<VttDocument> for String {
    fn from(value: VttDocument) -> Self {
        value.text
    }
}

/// Write a cue in `vtt` format
fn write_cue(out: &mut String, cue: &Cue) {
    out.push_str(cue.timing());
    out.push('\n');
    out.push_str(&cue.text().join("\n"));
    out.push_str("\n\n");
}

/// Convert SubRip text to `WebVTT`.
///
/// Blocks that are not a valid cue are dropped silently, only a document
/// with no timing line at all is refused.
///
/// # Errors
///
/// Will return [`SrtError::NotSrt`] if no line of `raw` is an Srt timing line.
#[profiling::function]
pub fn convert_to_vtt(raw: &str) -> Result<VttDocument, SrtError> {
    let text = srt::normalize_line_endings(raw);
    let blocks: Vec<&str> = srt::blocks(&text).collect();
    if !blocks.iter().any(|block| srt::has_timing_line(block)) {
        return Err(SrtError::NotSrt);
    }

    let cues: Vec<Cue> = blocks.iter().filter_map(|block| Cue::from_block(block)).collect();
    debug!("Srt to vtt: kept {} cue(s) of {} block(s)", cues.len(), blocks.len());

    let mut out = format!("{HEADER}\n\n");
    for cue in &cues {
        write_cue(&mut out, cue);
    }

    let out = EXTRA_BLANK_LINES.replace_all(&out, "\n\n");
    Ok(VttDocument {
        text: format!("{}\n\n", out.trim()),
        cue_count: cues.len(),
    })
}
