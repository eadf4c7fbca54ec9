use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MovieFilter {
    pub year: Option<i32>,
    pub winner: Option<bool>,
}

impl MovieFilter {
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.winner.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortKey {
    #[default]
    Id,
    Year,
    Title,
    Winner,
}

impl SortKey {
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "id" => Some(SortKey::Id),
            "year" => Some(SortKey::Year),
            "title" => Some(SortKey::Title),
            "winner" => Some(SortKey::Winner),
            _ => None,
        }
    }
}

/// Ordering for movie listings. A leading `-` on the field name sorts descending.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sort {
    pub key: SortKey,
    pub descending: bool,
}

impl Sort {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (field, descending) = match raw.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        SortKey::from_field(field).map(|key| Sort { key, descending })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MovieRecord {
    pub id: i32,
    pub year: i32,
    pub title: String,
    pub studios: Vec<String>,
    pub producers: Vec<String>,
    pub winner: bool,
}

#[derive(Clone, Debug)]
pub struct MoviePage {
    pub movies: Vec<MovieRecord>,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CatalogCounts {
    pub movies: u64,
    pub studios: u64,
    pub producers: u64,
}

/// One winning movie credited to one producer identity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProducerWin {
    pub producer: String,
    pub year: i32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioWinCount {
    pub name: String,
    pub win_count: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearWinnerCount {
    pub year: i32,
    pub winner_count: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i32,
    pub previous_year: i32,
    pub following_year: i32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ProducerIntervals {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

#[derive(Clone, Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<YearWinnerCount>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StudiosResponse {
    pub studios: Vec<StudioWinCount>,
}
