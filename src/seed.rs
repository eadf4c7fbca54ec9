//! Startup loader for the semicolon-delimited movie list.
//!
//! Every entity is looked up by its natural key before being created, so the
//! loader can run against an already seeded database without duplicating rows.

use std::{collections::HashMap, path::Path};

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait, sea_query::OnConflict,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::entities::{movie, movie_producer, movie_studio, producer, producer_alias, studio};

#[derive(Debug, Deserialize)]
struct SeedRow {
    year: i32,
    title: String,
    #[serde(default)]
    studios: String,
    #[serde(default)]
    producers: String,
    #[serde(default)]
    winner: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeedMovie {
    pub year: i32,
    pub title: String,
    pub winner: bool,
    pub studios: Vec<String>,
    pub producers: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeedReport {
    pub rows: usize,
    pub movies_created: usize,
    pub studios_created: usize,
    pub producers_created: usize,
}

pub fn parse_seed(input: &[u8]) -> anyhow::Result<Vec<SeedMovie>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut movies = Vec::new();
    for (idx, row) in reader.deserialize::<SeedRow>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let row = row.with_context(|| format!("seed row at line {line}"))?;

        if row.year < 0 {
            anyhow::bail!("seed row at line {line}: year must not be negative");
        }
        if row.title.is_empty() {
            anyhow::bail!("seed row at line {line}: title is empty");
        }

        movies.push(SeedMovie {
            year: row.year,
            winner: row.winner.eq_ignore_ascii_case("yes"),
            studios: split_names(&row.studios),
            producers: split_names(&row.producers),
            title: row.title,
        });
    }

    Ok(movies)
}

pub async fn load_from_path(db: &DatabaseConnection, path: &Path) -> anyhow::Result<SeedReport> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let movies = parse_seed(&bytes)?;
    load(db, &movies).await
}

pub async fn load(db: &DatabaseConnection, movies: &[SeedMovie]) -> anyhow::Result<SeedReport> {
    let txn = db.begin().await?;
    let mut loader = Loader::default();

    for seed in movies {
        let movie_id = loader.movie(&txn, seed).await?;

        for name in &seed.studios {
            let studio_id = loader.studio(&txn, name).await?;
            movie_studio::Entity::insert(movie_studio::ActiveModel {
                movie_id: Set(movie_id),
                studio_id: Set(studio_id),
            })
            .on_conflict(
                OnConflict::columns([movie_studio::Column::MovieId, movie_studio::Column::StudioId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        for name in &seed.producers {
            let producer_id = loader.producer(&txn, name).await?;
            movie_producer::Entity::insert(movie_producer::ActiveModel {
                movie_id: Set(movie_id),
                producer_id: Set(producer_id),
            })
            .on_conflict(
                OnConflict::columns([
                    movie_producer::Column::MovieId,
                    movie_producer::Column::ProducerId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    loader.report.rows = movies.len();
    info!(
        rows = loader.report.rows,
        movies_created = loader.report.movies_created,
        studios_created = loader.report.studios_created,
        producers_created = loader.report.producers_created,
        "seed data loaded"
    );

    Ok(loader.report)
}

/// Splits a producer credit on the standalone word "and".
///
/// "Bo Derek and John Derek" becomes two identities. This is a heuristic: a
/// single person whose name contains the word would be split as well.
pub fn split_producer_credits(name: &str) -> Vec<String> {
    let mut credits: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in name.split_whitespace() {
        if word == "and" {
            push_credit(&mut credits, &current);
            current.clear();
        } else {
            current.push(word);
        }
    }
    push_credit(&mut credits, &current);

    if credits.is_empty() && !name.trim().is_empty() {
        credits.push(name.trim().to_string());
    }
    credits
}

fn push_credit(credits: &mut Vec<String>, words: &[&str]) {
    if words.is_empty() {
        return;
    }
    let credit = words.join(" ");
    if !credits.contains(&credit) {
        credits.push(credit);
    }
}

fn split_names(field: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in field.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[derive(Default)]
struct Loader {
    studios: HashMap<String, i32>,
    producers: HashMap<String, i32>,
    report: SeedReport,
}

impl Loader {
    async fn movie(&mut self, txn: &DatabaseTransaction, seed: &SeedMovie) -> anyhow::Result<i32> {
        let existing = movie::Entity::find()
            .filter(movie::Column::Year.eq(seed.year))
            .filter(movie::Column::Title.eq(seed.title.as_str()))
            .filter(movie::Column::Winner.eq(seed.winner))
            .one(txn)
            .await?;

        if let Some(found) = existing {
            return Ok(found.id);
        }

        let created = movie::ActiveModel {
            id: Default::default(),
            title: Set(seed.title.clone()),
            year: Set(seed.year),
            winner: Set(seed.winner),
        }
        .insert(txn)
        .await?;

        debug!(id = created.id, title = %created.title, year = created.year, "created movie");
        self.report.movies_created += 1;
        Ok(created.id)
    }

    async fn studio(&mut self, txn: &DatabaseTransaction, name: &str) -> anyhow::Result<i32> {
        if let Some(id) = self.studios.get(name) {
            return Ok(*id);
        }

        let existing =
            studio::Entity::find().filter(studio::Column::Name.eq(name)).one(txn).await?;
        let id = match existing {
            Some(found) => found.id,
            None => {
                let created = studio::ActiveModel {
                    id: Default::default(),
                    name: Set(name.to_string()),
                }
                .insert(txn)
                .await?;
                self.report.studios_created += 1;
                created.id
            },
        };

        self.studios.insert(name.to_string(), id);
        Ok(id)
    }

    async fn producer(&mut self, txn: &DatabaseTransaction, name: &str) -> anyhow::Result<i32> {
        if let Some(id) = self.producers.get(name) {
            return Ok(*id);
        }

        let existing =
            producer::Entity::find().filter(producer::Column::Name.eq(name)).one(txn).await?;
        let id = match existing {
            Some(found) => found.id,
            None => {
                let created = producer::ActiveModel {
                    id: Default::default(),
                    name: Set(name.to_string()),
                }
                .insert(txn)
                .await?;
                self.report.producers_created += 1;
                created.id
            },
        };

        for alias in split_producer_credits(name) {
            producer_alias::Entity::insert(producer_alias::ActiveModel {
                producer_id: Set(id),
                alias: Set(alias),
            })
            .on_conflict(
                OnConflict::columns([
                    producer_alias::Column::ProducerId,
                    producer_alias::Column::Alias,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;
        }

        self.producers.insert(name.to_string(), id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_producer_credits_on_word() {
        assert_eq!(
            split_producer_credits("Bo Derek and John Derek"),
            vec!["Bo Derek", "John Derek"]
        );
        assert_eq!(
            split_producer_credits("Jerry Weintraub and  Matthew Vaughn and Jerry Weintraub"),
            vec!["Jerry Weintraub", "Matthew Vaughn"]
        );
    }

    #[test]
    fn split_producer_credits_leaves_embedded_substring() {
        assert_eq!(split_producer_credits("Randall Emmett"), vec!["Randall Emmett"]);
        assert_eq!(split_producer_credits("Sandra Andrews"), vec!["Sandra Andrews"]);
    }

    #[test]
    fn split_producer_credits_drops_empty_pieces() {
        assert_eq!(split_producer_credits("and Joel Silver and"), vec!["Joel Silver"]);
        assert_eq!(split_producer_credits("and"), vec!["and"]);
        assert!(split_producer_credits("   ").is_empty());
    }

    #[test]
    fn parse_seed_reads_semicolon_rows() {
        let input = b"year;title;studios;producers;winner\n\
            1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes\n\
            1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;\n\
            1984;Bolero;Cannon Films;Bo Derek;YES\n";

        let movies = parse_seed(input).unwrap();

        assert_eq!(movies.len(), 3);
        assert_eq!(
            movies[0],
            SeedMovie {
                year: 1980,
                title: "Can't Stop the Music".to_string(),
                winner: true,
                studios: vec!["Associated Film Distribution".to_string()],
                producers: vec!["Allan Carr".to_string()],
            }
        );
        assert!(!movies[1].winner);
        assert_eq!(movies[1].studios, vec!["Lorimar Productions", "United Artists"]);
        assert!(movies[2].winner);
    }

    #[test]
    fn parse_seed_treats_other_winner_values_as_false() {
        let input = b"year;title;studios;producers;winner\n\
            2001;Glitter;Columbia;Laurence Mark;no\n\
            2002;Swept Away;Screen Gems;Matthew Vaughn;maybe\n";

        let movies = parse_seed(input).unwrap();

        assert!(movies.iter().all(|m| !m.winner));
    }

    #[test]
    fn parse_seed_tolerates_missing_trailing_columns() {
        let input = b"year;title;studios;producers;winner\n1999;Wild Wild West;Warner Bros.\n";

        let movies = parse_seed(input).unwrap();

        assert_eq!(movies[0].studios, vec!["Warner Bros."]);
        assert!(movies[0].producers.is_empty());
        assert!(!movies[0].winner);
    }

    #[test]
    fn parse_seed_rejects_malformed_year() {
        let input = b"year;title;studios;producers;winner\nnineteen;Bad Row;Studio;Producer;yes\n";

        let err = parse_seed(input).unwrap_err();

        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn split_names_trims_and_dedupes() {
        assert_eq!(split_names(" A , B,,A ,"), vec!["A", "B"]);
        assert!(split_names("").is_empty());
    }
}
