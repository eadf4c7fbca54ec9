use std::collections::{BTreeMap, BTreeSet, HashMap};

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use crate::{
    entities::{movie, movie_producer, movie_studio, producer, producer_alias, studio},
    error::AppResult,
    models::{
        CatalogCounts, MovieFilter, MoviePage, MovieRecord, ProducerWin, Sort, SortKey,
        StudioWinCount,
    },
};

/// Read access to the seeded movie dataset.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list_movies(
        &self,
        filter: MovieFilter,
        sort: Sort,
    ) -> AppResult<Vec<MovieRecord>> {
        let movies = select_movies(filter, sort).all(&self.db).await?;
        self.with_credits(movies).await
    }

    /// `page` is zero-based. A page past the end comes back empty.
    pub async fn list_movies_page(
        &self,
        filter: MovieFilter,
        sort: Sort,
        page: u64,
        page_size: u64,
    ) -> AppResult<MoviePage> {
        let paginator = select_movies(filter, sort).paginate(&self.db, page_size);
        let totals = paginator.num_items_and_pages().await?;
        let movies = paginator.fetch_page(page).await?;

        Ok(MoviePage {
            movies: self.with_credits(movies).await?,
            total_elements: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    /// Winning movie count for every studio, in insertion order.
    pub async fn count_wins_by_studio(&self) -> AppResult<Vec<StudioWinCount>> {
        let links = movie_studio::Entity::find()
            .inner_join(movie::Entity)
            .filter(movie::Column::Winner.eq(true))
            .all(&self.db)
            .await?;

        let mut wins: HashMap<i32, u64> = HashMap::new();
        for link in links {
            *wins.entry(link.studio_id).or_default() += 1;
        }

        let studios = studio::Entity::find().order_by_asc(studio::Column::Id).all(&self.db).await?;

        Ok(studios
            .into_iter()
            .map(|s| StudioWinCount {
                win_count: wins.get(&s.id).copied().unwrap_or(0),
                name: s.name,
            })
            .collect())
    }

    /// One row per winning movie and credited producer identity.
    ///
    /// Identities come from the aliases recorded at load time, so a credit like
    /// "Bo Derek and John Derek" produces two rows. An identity reached through
    /// more than one producer row of the same movie is reported once.
    pub async fn list_winning_movies_with_producers(&self) -> AppResult<Vec<ProducerWin>> {
        let winners: HashMap<i32, i32> = movie::Entity::find()
            .filter(movie::Column::Winner.eq(true))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m.year))
            .collect();

        if winners.is_empty() {
            return Ok(Vec::new());
        }

        let links = movie_producer::Entity::find()
            .inner_join(movie::Entity)
            .filter(movie::Column::Winner.eq(true))
            .all(&self.db)
            .await?;

        let producer_ids: BTreeSet<i32> = links.iter().map(|l| l.producer_id).collect();
        let mut aliases: HashMap<i32, Vec<String>> = HashMap::new();
        for row in producer_alias::Entity::find()
            .filter(producer_alias::Column::ProducerId.is_in(producer_ids))
            .all(&self.db)
            .await?
        {
            aliases.entry(row.producer_id).or_default().push(row.alias);
        }

        let mut credits: BTreeMap<i32, BTreeSet<&str>> = BTreeMap::new();
        for link in &links {
            let names = credits.entry(link.movie_id).or_default();
            if let Some(list) = aliases.get(&link.producer_id) {
                names.extend(list.iter().map(String::as_str));
            }
        }

        let mut out = Vec::new();
        for (movie_id, names) in credits {
            let Some(year) = winners.get(&movie_id) else {
                continue;
            };
            out.extend(
                names.into_iter().map(|n| ProducerWin { producer: n.to_string(), year: *year }),
            );
        }

        Ok(out)
    }

    /// Release year of every winning movie, one entry per movie.
    pub async fn winning_years(&self) -> AppResult<Vec<i32>> {
        let years = movie::Entity::find()
            .select_only()
            .column(movie::Column::Year)
            .filter(movie::Column::Winner.eq(true))
            .into_tuple::<i32>()
            .all(&self.db)
            .await?;
        Ok(years)
    }

    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        Ok(CatalogCounts {
            movies: movie::Entity::find().count(&self.db).await?,
            studios: studio::Entity::find().count(&self.db).await?,
            producers: producer::Entity::find().count(&self.db).await?,
        })
    }

    async fn with_credits(&self, movies: Vec<movie::Model>) -> AppResult<Vec<MovieRecord>> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = movies.iter().map(|m| m.id).collect();

        let studio_links = movie_studio::Entity::find()
            .filter(movie_studio::Column::MovieId.is_in(ids.clone()))
            .all(&self.db)
            .await?;
        let producer_links = movie_producer::Entity::find()
            .filter(movie_producer::Column::MovieId.is_in(ids))
            .all(&self.db)
            .await?;

        let studio_names: HashMap<i32, String> = studio::Entity::find()
            .filter(studio::Column::Id.is_in(studio_links.iter().map(|l| l.studio_id)))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();
        let producer_names: HashMap<i32, String> = producer::Entity::find()
            .filter(producer::Column::Id.is_in(producer_links.iter().map(|l| l.producer_id)))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let studios_by_movie = group_links(studio_links.iter().map(|l| (l.movie_id, l.studio_id)));
        let producers_by_movie =
            group_links(producer_links.iter().map(|l| (l.movie_id, l.producer_id)));

        Ok(movies
            .into_iter()
            .map(|m| MovieRecord {
                studios: names_for(&studios_by_movie, &studio_names, m.id),
                producers: names_for(&producers_by_movie, &producer_names, m.id),
                id: m.id,
                year: m.year,
                title: m.title,
                winner: m.winner,
            })
            .collect())
    }
}

fn select_movies(filter: MovieFilter, sort: Sort) -> Select<movie::Entity> {
    let mut query = movie::Entity::find();

    if let Some(year) = filter.year {
        query = query.filter(movie::Column::Year.eq(year));
    }
    if let Some(winner) = filter.winner {
        query = query.filter(movie::Column::Winner.eq(winner));
    }

    let column = match sort.key {
        SortKey::Id => movie::Column::Id,
        SortKey::Year => movie::Column::Year,
        SortKey::Title => movie::Column::Title,
        SortKey::Winner => movie::Column::Winner,
    };
    let order = if sort.descending { Order::Desc } else { Order::Asc };
    query = query.order_by(column, order);

    // ties on the sort column must not move rows between pages
    if sort.key != SortKey::Id {
        query = query.order_by_asc(movie::Column::Id);
    }

    query
}

fn group_links(links: impl Iterator<Item = (i32, i32)>) -> HashMap<i32, BTreeSet<i32>> {
    let mut grouped: HashMap<i32, BTreeSet<i32>> = HashMap::new();
    for (movie_id, other_id) in links {
        grouped.entry(movie_id).or_default().insert(other_id);
    }
    grouped
}

fn names_for(
    links: &HashMap<i32, BTreeSet<i32>>,
    names: &HashMap<i32, String>,
    movie_id: i32,
) -> Vec<String> {
    links
        .get(&movie_id)
        .map(|ids| ids.iter().filter_map(|id| names.get(id).cloned()).collect())
        .unwrap_or_default()
}
