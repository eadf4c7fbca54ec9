#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use razzies::{AppState, build_router, catalog::Catalog, config::Config, db, seed};
use serde_json::Value;
use tower::ServiceExt;

pub const FIXTURE: &str = "year;title;studios;producers;winner
2015;Alpha;Studio One;Producer A;yes
2018;Beta;Studio One, Studio Two;Producer A;yes
2016;Gamma;Studio Two;Producer B;yes
2017;Delta;Studio Three;Producer B;yes
2017;Epsilon;Studio Three;Producer C;
2016;Zeta;Studio Two;Producer D;no
";

pub async fn catalog_from(csv: &str) -> Catalog {
    let db = db::connect_and_migrate("sqlite::memory:").await.expect("in-memory database");
    let movies = seed::parse_seed(csv.as_bytes()).expect("fixture parses");
    seed::load(&db, &movies).await.expect("fixture loads");
    Catalog::new(db)
}

pub async fn app_from(csv: &str) -> Router {
    let catalog = catalog_from(csv).await;
    build_router(Arc::new(AppState { config: Arc::new(Config::default()), catalog }))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

pub fn ids(movies: &Value) -> Vec<i64> {
    movies.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect()
}
