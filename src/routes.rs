use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    AppState,
    error::{AppError, AppResult},
    listing::{ListingRequest, MoviesQuery, PageEnvelope, Projection},
    models::{StudiosResponse, YearsResponse},
    projections,
};

pub async fn movies(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MoviesQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(q) = query?;
    match Projection::parse(q.projection.as_deref())? {
        Projection::Listing => list_movies(&state, &q).await,
        Projection::YearsWithMultipleWinners => {
            let winning_years = state.catalog.winning_years().await?;
            let years = projections::years_with_multiple_winners(&winning_years);
            debug!(winners = winning_years.len(), years = years.len(), "years projection");
            Ok(Json(YearsResponse { years }).into_response())
        },
        Projection::StudiosWithWinCount => {
            let counts = state.catalog.count_wins_by_studio().await?;
            let studios = projections::rank_studios(counts);
            debug!(studios = studios.len(), "studios projection");
            Ok(Json(StudiosResponse { studios }).into_response())
        },
        Projection::MaxMinWinIntervalForProducers => {
            let wins = state.catalog.list_winning_movies_with_producers().await?;
            let intervals = projections::producer_intervals(&wins);
            debug!(
                wins = wins.len(),
                min = intervals.min.len(),
                max = intervals.max.len(),
                "producer interval projection"
            );
            Ok(Json(intervals).into_response())
        },
    }
}

async fn list_movies(state: &AppState, q: &MoviesQuery) -> AppResult<Response> {
    let req = ListingRequest::from_query(
        q,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;

    let Some(page) = req.pagination else {
        let movies = state.catalog.list_movies(req.filter, req.sort).await?;
        return Ok(Json(movies).into_response());
    };

    let result =
        state.catalog.list_movies_page(req.filter, req.sort, page.page, page.page_size).await?;
    debug!(
        page = page.page,
        page_size = page.page_size,
        returned = result.movies.len(),
        total = result.total_elements,
        "movie listing"
    );

    Ok(Json(PageEnvelope::new(
        result.movies,
        page,
        result.total_elements,
        result.total_pages,
        req.sorted,
    ))
    .into_response())
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
