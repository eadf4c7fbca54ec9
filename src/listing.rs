use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{MovieFilter, Sort},
};

/// Raw query string of `GET /movies`. Values stay strings so that malformed
/// input is reported through [`AppError`] rather than the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct MoviesQuery {
    pub projection: Option<String>,
    pub year: Option<String>,
    pub winner: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize", alias = "size")]
    pub page_size: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Projection {
    Listing,
    YearsWithMultipleWinners,
    StudiosWithWinCount,
    MaxMinWinIntervalForProducers,
}

impl Projection {
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        match raw.map(str::trim).unwrap_or_default() {
            "" => Ok(Projection::Listing),
            "years-with-multiple-winners" => Ok(Projection::YearsWithMultipleWinners),
            "studios-with-win-count" => Ok(Projection::StudiosWithWinCount),
            "max-min-win-interval-for-producers" => Ok(Projection::MaxMinWinIntervalForProducers),
            other => Err(AppError::bad_request(format!("unknown projection '{other}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    /// Zero-based.
    pub page: u64,
    pub page_size: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListingRequest {
    pub filter: MovieFilter,
    pub sort: Sort,
    /// Whether the caller asked for an explicit order.
    pub sorted: bool,
    pub pagination: Option<PageRequest>,
}

impl ListingRequest {
    pub fn from_query(
        query: &MoviesQuery,
        default_page_size: u64,
        max_page_size: u64,
    ) -> AppResult<Self> {
        let filter = MovieFilter {
            year: parse_year(query.year.as_deref())?,
            winner: query.winner.as_deref().and_then(parse_winner),
        };

        let sort_param = query.sort.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let sort = match sort_param {
            Some(raw) => Sort::parse(raw)
                .ok_or_else(|| AppError::bad_request(format!("unknown sort field '{raw}'")))?,
            None => Sort::default(),
        };

        let page = parse_number(query.page.as_deref(), "page")?;
        let page_size = parse_number(query.page_size.as_deref(), "pageSize")?;

        let pagination = if page.is_none() && page_size.is_none() {
            None
        } else {
            let page_size = page_size.unwrap_or(default_page_size);
            if page_size == 0 || page_size > max_page_size {
                return Err(AppError::bad_request(format!(
                    "pageSize must be between 1 and {max_page_size}"
                )));
            }
            let page = page.unwrap_or(0);
            // the row offset is bound as a signed 64-bit SQLite integer
            if page.checked_mul(page_size).is_none_or(|offset| offset > i64::MAX as u64) {
                return Err(AppError::bad_request(format!("page {page} is out of range")));
            }
            Some(PageRequest { page, page_size })
        };

        if pagination.is_none() && !filter.is_complete() {
            return Err(AppError::bad_request(
                "listing requires page/pageSize or both year and winner filters",
            ));
        }

        Ok(Self { filter, sort, sorted: sort_param.is_some(), pagination })
    }
}

fn parse_year(raw: Option<&str>) -> AppResult<Option<i32>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<i32>() {
        Ok(year) if year >= 0 => Ok(Some(year)),
        _ => Err(AppError::bad_request(format!(
            "year must be a non-negative integer, got '{raw}'"
        ))),
    }
}

/// Unrecognized values are ignored, as if the filter was not given.
fn parse_winner(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_number(raw: Option<&str>, name: &str) -> AppResult<Option<u64>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u64>().map(Some).map_err(|_| {
        AppError::bad_request(format!("{name} must be a non-negative integer, got '{raw}'"))
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SortState {
    pub sorted: bool,
    pub unsorted: bool,
}

impl SortState {
    fn new(sorted: bool) -> Self {
        Self { sorted, unsorted: !sorted }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub sort: SortState,
    pub page_size: u64,
    pub page_number: u64,
    pub offset: u64,
    pub paged: bool,
    pub unpaged: bool,
}

/// Paged response body for movie listings.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
    pub last: bool,
    pub total_pages: u64,
    pub first: bool,
    pub sort: SortState,
    pub number: u64,
    pub number_of_elements: usize,
    pub size: u64,
}

impl<T> PageEnvelope<T> {
    pub fn new(
        content: Vec<T>,
        request: PageRequest,
        total_elements: u64,
        total_pages: u64,
        sorted: bool,
    ) -> Self {
        let sort = SortState::new(sorted);
        Self {
            pageable: Pageable {
                sort,
                page_size: request.page_size,
                page_number: request.page,
                offset: request.page.saturating_mul(request.page_size),
                paged: true,
                unpaged: false,
            },
            total_elements,
            last: request.page.saturating_add(1) >= total_pages,
            total_pages,
            first: request.page == 0,
            sort,
            number: request.page,
            number_of_elements: content.len(),
            size: request.page_size,
            content,
        }
    }
}
