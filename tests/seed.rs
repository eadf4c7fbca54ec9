mod common;

use std::path::PathBuf;

use razzies::{
    catalog::Catalog,
    db,
    models::{MovieFilter, Sort},
    projections, seed,
};

use common::{FIXTURE, catalog_from};

#[tokio::test]
async fn seeding_twice_creates_nothing_new() {
    let catalog = catalog_from(FIXTURE).await;
    let before = catalog.counts().await.unwrap();

    let movies = seed::parse_seed(FIXTURE.as_bytes()).unwrap();
    let report = seed::load(catalog.db(), &movies).await.unwrap();

    assert_eq!(report.rows, 6);
    assert_eq!(report.movies_created, 0);
    assert_eq!(report.studios_created, 0);
    assert_eq!(report.producers_created, 0);
    assert_eq!(catalog.counts().await.unwrap(), before);
    assert_eq!(before.movies, 6);
    assert_eq!(before.studios, 3);
    assert_eq!(before.producers, 4);

    let listing = catalog.list_movies(MovieFilter::default(), Sort::default()).await.unwrap();
    assert_eq!(listing[1].studios, vec!["Studio One", "Studio Two"]);
    assert_eq!(listing[1].producers, vec!["Producer A"]);
}

#[tokio::test]
async fn first_load_reports_created_rows() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let movies = seed::parse_seed(FIXTURE.as_bytes()).unwrap();

    let report = seed::load(&db, &movies).await.unwrap();

    assert_eq!(report.movies_created, 6);
    assert_eq!(report.studios_created, 3);
    assert_eq!(report.producers_created, 4);
}

#[tokio::test]
async fn names_are_shared_across_rows() {
    let catalog = catalog_from(
        "year;title;studios;producers;winner
1990;One;Shared Studio;Shared Producer;yes
1991;Two;Shared Studio, Shared Studio;Shared Producer;yes
",
    )
    .await;

    let counts = catalog.counts().await.unwrap();
    assert_eq!(counts.studios, 1);
    assert_eq!(counts.producers, 1);

    let wins = catalog.count_wins_by_studio().await.unwrap();
    assert_eq!(wins.len(), 1);
    assert_eq!(wins[0].win_count, 2);
}

#[tokio::test]
async fn winning_credits_are_deduplicated_per_movie() {
    let catalog = catalog_from(
        "year;title;studios;producers;winner
2000;Joint;Studio;Ann Lee and Bob Ray, Ann Lee;yes
2004;Solo;Studio;Bob Ray;yes
2005;Loser;Studio;Ann Lee;no
",
    )
    .await;

    let mut wins: Vec<(String, i32)> = catalog
        .list_winning_movies_with_producers()
        .await
        .unwrap()
        .into_iter()
        .map(|w| (w.producer, w.year))
        .collect();
    wins.sort();

    assert_eq!(
        wins,
        vec![
            ("Ann Lee".to_string(), 2000),
            ("Bob Ray".to_string(), 2000),
            ("Bob Ray".to_string(), 2004),
        ]
    );
}

#[tokio::test]
async fn shipped_seed_file_loads() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/movielist.csv");

    let report = seed::load_from_path(&db, &path).await.unwrap();
    assert_eq!(report.rows, 28);

    let catalog = Catalog::new(db);
    let wins = catalog.list_winning_movies_with_producers().await.unwrap();
    let intervals = projections::producer_intervals(&wins);

    assert_eq!(intervals.max.len(), 1);
    assert_eq!(intervals.max[0].producer, "Matthew Vaughn");
    assert_eq!(intervals.max[0].interval, 13);
    assert_eq!(intervals.min.len(), 1);
    assert_eq!(intervals.min[0].producer, "Joel Silver");
    assert_eq!(intervals.min[0].interval, 1);

    let years = projections::years_with_multiple_winners(&catalog.winning_years().await.unwrap());
    let crowded: Vec<i32> = years.iter().filter(|y| y.winner_count > 1).map(|y| y.year).collect();
    assert_eq!(crowded, vec![1986, 1990, 2015]);

    let studios = projections::rank_studios(catalog.count_wins_by_studio().await.unwrap());
    assert_eq!(studios[0].name, "Paramount Pictures");
    assert_eq!(studios[0].win_count, 3);
    assert_eq!(studios[1].name, "20th Century Fox");
    assert_eq!(studios[1].win_count, 3);
}

#[tokio::test]
async fn missing_seed_file_is_an_error() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();

    let err = seed::load_from_path(&db, &PathBuf::from("does/not/exist.csv")).await.unwrap_err();

    assert!(format!("{err:#}").contains("does/not/exist.csv"));
}
