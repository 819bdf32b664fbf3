// src/extract.rs
//! Field extraction for one listing entry.
//!
//! The info paragraph of an entry looks like
//!
//! ```text
//! 导演: 弗兰克·德拉邦特 Frank Darabont   主演: 蒂姆·罗宾斯 Tim Robbins /...
//! 1994 / 美国 / 犯罪 剧情
//! ```
//!
//! Line 0 carries the credits, line 1 the year/country data and an optional
//! line 2 a `/`-separated genre list. Each field has its own rule function
//! `fn(&str) -> Option<_>`; [`FieldExtractor::extract`] applies them in a fixed
//! order and fills the sentinels where a rule yields nothing.

use thiserror::Error;

use crate::core::sanitize::{
    before, before_first_space, clean_title, has_ascii, is_all_ascii, is_numeric_token,
    segment_after,
};
use crate::data::{MovieRecord, RawItem, DEFAULT_GENRE, UNKNOWN};

pub const DIRECTOR_MARKER: &str = "导演: ";
/// Director text ends at this marker; note there is no trailing space.
pub const DIRECTOR_END_MARKER: &str = "主演:";
pub const STARRING_MARKER: &str = "主演: ";
pub const ELLIPSIS: &str = "...";
pub const MAX_ACTORS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionFailure {
    #[error("title node missing")]
    MissingTitle,
    #[error("title is blank")]
    BlankTitle,
    #[error("info paragraph missing")]
    MissingInfo,
}

/// What to do when a genre line is present but every piece gets filtered out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyGenre {
    /// Keep the (empty) filtered list as-is.
    #[default]
    Keep,
    /// Fall back to `["剧情"]`.
    Default,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FieldExtractor {
    pub empty_genre: EmptyGenre,
}

impl FieldExtractor {
    pub fn new(empty_genre: EmptyGenre) -> Self {
        Self { empty_genre }
    }

    pub fn extract(&self, raw: &RawItem) -> Result<MovieRecord, ExtractionFailure> {
        let title = raw.title.as_deref().ok_or(ExtractionFailure::MissingTitle)?;
        let title = clean_title(title);
        if title.is_empty() {
            return Err(ExtractionFailure::BlankTitle);
        }
        let info = raw.info.as_deref().ok_or(ExtractionFailure::MissingInfo)?;

        let lines: Vec<&str> = info.trim().split('\n').map(str::trim).collect();
        let credits = lines.first().copied().unwrap_or("");
        let year_country = lines.get(1).copied().unwrap_or("");

        let director = director_rule(credits).unwrap_or_else(|| s!(UNKNOWN));
        let actors = actors_rule(credits).unwrap_or_default();
        let country = country_rule(year_country).unwrap_or_else(|| s!(UNKNOWN));
        let genres = match lines.get(2).and_then(|l| genre_rule(l)) {
            Some(g) if g.is_empty() && self.empty_genre == EmptyGenre::Default => svec![DEFAULT_GENRE],
            Some(g) => g,
            None => svec![DEFAULT_GENRE],
        };

        Ok(MovieRecord { title, director, actors, country, genres })
    }
}

/// Director: text after `导演: `, cut at `主演:` when present.
/// Blank results count as "not found".
pub fn director_rule(credits: &str) -> Option<String> {
    let part = segment_after(credits, DIRECTOR_MARKER)?;
    let director = before(part, DIRECTOR_END_MARKER).trim();
    (!director.is_empty()).then(|| s!(director))
}

/// Actors: the first three `/`-separated names after `主演: `.
///
/// A name with a trailing romanized alias ("张国荣 Leslie Cheung") keeps only
/// its native part; names with no non-ASCII character are dropped.
pub fn actors_rule(credits: &str) -> Option<Vec<String>> {
    let part = segment_after(credits, STARRING_MARKER)?;
    let text = before(part, ELLIPSIS);

    let actors = text
        .split('/')
        .map(str::trim)
        .take(MAX_ACTORS)
        .filter_map(accept_actor)
        .map(|a| s!(a))
        .collect();
    Some(actors)
}

fn accept_actor(candidate: &str) -> Option<&str> {
    let name = if candidate.contains(' ') && has_ascii(candidate) {
        before_first_space(candidate)
    } else {
        candidate
    };
    (!name.is_empty() && !is_all_ascii(name)).then_some(name)
}

/// Country: second `/` segment of the year line, up to its first space.
pub fn country_rule(year_country: &str) -> Option<String> {
    if year_country.is_empty() {
        return None;
    }
    let part = year_country.split('/').nth(1)?.trim();
    let country = before_first_space(part);
    (!country.is_empty()).then(|| s!(country))
}

/// Genres: `/`-separated pieces, blanks and bare numbers removed.
/// `None` when the line is blank; `Some(vec![])` when everything was filtered.
pub fn genre_rule(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(
        line.split('/')
            .map(str::trim)
            .filter(|g| !g.is_empty() && !is_numeric_token(g))
            .map(|g| s!(g))
            .collect(),
    )
}
