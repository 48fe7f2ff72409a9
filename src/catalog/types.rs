//! Domain types for catalog queries and their normalized results.

use std::collections::HashSet;

use serde::Deserialize;

/// Curated list selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Popular,
        Category::TopRated,
        Category::NowPlaying,
        Category::Upcoming,
    ];

    /// Path segment the query surface expects.
    pub fn as_path(&self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::NowPlaying => "now_playing",
            Category::Upcoming => "upcoming",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::TopRated => "Top Rated",
            Category::NowPlaying => "Now Playing",
            Category::Upcoming => "Upcoming",
        }
    }

    /// Parse a category key as it appears in config and CLI arguments.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_path() == key)
    }
}

/// Supported content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Hi,
    Es,
    Fr,
    De,
}

impl Language {
    /// Every language, in display order.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Es,
        Language::Fr,
        Language::De,
    ];

    /// ISO 639-1 code as the query surface expects it.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
    }

    /// Next language in display order, wrapping around.
    pub fn cycled(&self) -> Language {
        let index = Language::ALL
            .iter()
            .position(|language| language == self)
            .unwrap_or(0);
        Language::ALL[(index + 1) % Language::ALL.len()]
    }
}

/// One movie row of a result page.
///
/// `id` is the render key and is unique within a page. Fields the
/// service omitted stay `None` so "no rating" is never confused with
/// "rating 0".
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub release_year: Option<String>,
    pub poster_ref: Option<String>,
    pub rating: Option<f64>,
}

/// One page of catalog results, replaced wholesale on every successful
/// fetch; pages are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub items: Vec<MovieSummary>,
    pub total_pages: u32,
}

/// Page payload as the service returns it.
#[derive(Debug, Deserialize)]
pub(crate) struct RawResultPage {
    #[serde(default)]
    pub results: Vec<RawMovie>,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl From<RawResultPage> for ResultPage {
    /// Normalizes a raw payload: duplicate ids are dropped (first
    /// occurrence wins) and `total_pages` is floored at 1.
    fn from(raw: RawResultPage) -> Self {
        let mut seen = HashSet::new();
        let items = raw
            .results
            .into_iter()
            .filter(|movie| seen.insert(movie.id))
            .map(MovieSummary::from)
            .collect();
        ResultPage {
            items,
            total_pages: raw.total_pages.max(1),
        }
    }
}

impl From<RawMovie> for MovieSummary {
    fn from(raw: RawMovie) -> Self {
        MovieSummary {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            release_year: raw.release_date.as_deref().and_then(release_year),
            poster_ref: raw.poster_path.filter(|path| !path.trim().is_empty()),
            rating: raw.vote_average,
        }
    }
}

/// Extract the year from a `YYYY-MM-DD` release date.
fn release_year(date: &str) -> Option<String> {
    let year = date.get(..4)?;
    if year.chars().all(|ch| ch.is_ascii_digit()) {
        Some(year.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: serde_json::Value) -> ResultPage {
        let raw: RawResultPage = serde_json::from_value(value).unwrap();
        ResultPage::from(raw)
    }

    #[test]
    fn absent_fields_stay_absent() {
        let page = normalize(json!({
            "results": [{ "id": 1 }],
            "total_pages": 2,
        }));
        let movie = &page.items[0];
        assert_eq!(movie.title, "");
        assert_eq!(movie.release_year, None);
        assert_eq!(movie.poster_ref, None);
        assert_eq!(movie.rating, None);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn zero_rating_is_a_present_rating() {
        let page = normalize(json!({
            "results": [{ "id": 1, "vote_average": 0.0 }],
            "total_pages": 1,
        }));
        assert_eq!(page.items[0].rating, Some(0.0));
    }

    #[test]
    fn duplicate_ids_keep_the_first_occurrence() {
        let page = normalize(json!({
            "results": [
                { "id": 7, "title": "first" },
                { "id": 7, "title": "second" },
                { "id": 8, "title": "third" },
            ],
            "total_pages": 1,
        }));
        let titles: Vec<&str> = page.items.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn total_pages_is_floored_at_one() {
        let page = normalize(json!({ "results": [], "total_pages": 0 }));
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn release_year_is_the_leading_four_digits() {
        assert_eq!(release_year("1999-10-22"), Some("1999".to_string()));
        assert_eq!(release_year(""), None);
        assert_eq!(release_year("19"), None);
        assert_eq!(release_year("abcd-01-01"), None);
    }

    #[test]
    fn blank_poster_path_is_treated_as_absent() {
        let page = normalize(json!({
            "results": [{ "id": 1, "poster_path": "   " }],
            "total_pages": 1,
        }));
        assert_eq!(page.items[0].poster_ref, None);
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.as_path()), Some(category));
        }
        assert_eq!(Category::from_key("bestest"), None);
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn language_cycling_wraps() {
        assert_eq!(Language::En.cycled(), Language::Hi);
        assert_eq!(Language::De.cycled(), Language::En);
    }
}
