//! SubRip/Srt reading.
//!
//! An Srt document is a list of blocks separated by blank lines. A block is
//! an optional cue number, a timing line like `00:00:01,000 --> 00:00:03,000`
//! and one or more lines of text. Parsing here is lenient: blocks that
//! don't have this shape are skipped, not reported.
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a timing line. The hour field has one or two digits, the
/// millisecond separator is `,` or `.`. Digits are ASCII only.
static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{1,2}:[0-9]{2}:[0-9]{2}[,.][0-9]{3}[,.]?\s*-->\s*[0-9]{1,2}:[0-9]{2}:[0-9]{2}[,.][0-9]{3}",
    )
    .unwrap()
});
static CUE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
// Lines holding only spaces or tabs count as blank.
static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());
static SEPARATOR_BEFORE_ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,.](\s*-->)").unwrap());
static TRAILING_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,.]$").unwrap());
static COMMA_MILLIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",([0-9]{3})").unwrap());

/// Does `line` (already trimmed) look like an Srt timing line ?
#[must_use]
pub fn is_timing_line(line: &str) -> bool {
    TIMING_LINE.is_match(line)
}

/// Is `line` only made of digits, like a cue number ?
#[must_use]
pub fn is_cue_number(line: &str) -> bool {
    CUE_NUMBER.is_match(line)
}

/// Convert every line ending (`\r\n`, `\r`, `\n`) to `\n`, drop a leading
/// byte order mark and trim the whole text.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_start_matches('\u{feff}')
        .trim()
        .to_owned()
}

/// Split normalized text into blocks, on runs of blank or whitespace-only lines.
pub fn blocks(text: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR.split(text)
}

/// Does any line of `text` look like a timing line ?
#[must_use]
pub fn has_timing_line(text: &str) -> bool {
    text.lines().any(|line| is_timing_line(line.trim()))
}

/// Rewrite a timing line with `.` as millisecond separator.
///
/// A separator stuck before the arrow or at the end of the line is removed,
/// then every `,mmm` becomes `.mmm`. The rest of the line is kept as-is,
/// times are not checked or reformatted.
#[must_use]
pub fn to_vtt_timing(line: &str) -> String {
    let line = line.trim();
    let line = SEPARATOR_BEFORE_ARROW.replace(line, "$1");
    let line = TRAILING_SEPARATOR.replace(&line, "");
    COMMA_MILLIS.replace_all(&line, ".$1").into_owned()
}

/// A cue read from an Srt block, with its timing already in `WebVTT` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    timing: String,
    text: Vec<String>,
}

impl Cue {
    /// Read a cue from one block.
    ///
    /// Returns `None` when the block has less than two non-empty lines, no
    /// timing line, or no text after its timing line. Cue numbers found
    /// after the timing line are not text and are skipped.
    #[must_use]
    pub fn from_block(block: &str) -> Option<Self> {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() < 2 {
            trace!("Skip block with {} line(s)", lines.len());
            return None;
        }

        let Some(timing_pos) = lines.iter().position(|line| is_timing_line(line)) else {
            trace!("Skip block without timing line: {:?}", lines[0]);
            return None;
        };

        let text: Vec<String> = lines[timing_pos + 1..]
            .iter()
            .filter(|line| !is_cue_number(line))
            .map(|line| (*line).to_owned())
            .collect();
        if text.is_empty() {
            trace!("Skip block without text: {:?}", lines[timing_pos]);
            return None;
        }

        Some(Self {
            timing: to_vtt_timing(lines[timing_pos]),
            text,
        })
    }

    /// Timing line, `.` separated.
    #[must_use]
    pub fn timing(&self) -> &str {
        &self.timing
    }

    /// Text lines, in source order.
    #[must_use]
    pub fn text(&self) -> &[String] {
        &self.text
    }
}
