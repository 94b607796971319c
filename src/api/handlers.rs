use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{catalog, parse_watch_date, NewWatchEntry, Rating, WatchEntry};
use crate::services::stats::{self, RatingBucket, YearMonth};
use crate::services::{suggest, Recommendation};

use super::AppState;

// Request/Response types

/// Entry form submission; omitted fields take the form's defaults
#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub movie_title: String,
    /// `YYYY-MM-DD`, today when absent
    pub watch_date: Option<String>,
    /// 7 when absent
    pub rating: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MonthlyCount {
    pub month: YearMonth,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct BucketCount {
    pub bucket: RatingBucket,
    pub count: usize,
    /// Percentage of all entries, one decimal place
    pub share: f64,
}

/// Chart data. Both lists are empty when nothing has been logged yet.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub monthly: Vec<MonthlyCount>,
    pub ratings: Vec<BucketCount>,
}

impl StatsResponse {
    pub fn from_entries(entries: &[WatchEntry]) -> Self {
        let total = entries.len();

        let monthly = stats::monthly_counts(entries)
            .into_iter()
            .map(|(month, count)| MonthlyCount { month, count })
            .collect();

        let ratings = stats::rating_distribution(entries)
            .into_iter()
            .map(|(bucket, count)| BucketCount {
                bucket,
                count,
                share: stats::share_percent(count, total),
            })
            .collect();

        Self {
            total,
            monthly,
            ratings,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Titles that may be logged, in display order
pub async fn get_catalog(State(state): State<AppState>) -> Json<&'static [&'static str]> {
    Json(state.catalog)
}

/// All logged viewings, oldest first
pub async fn get_entries(State(state): State<AppState>) -> AppResult<Json<Vec<WatchEntry>>> {
    let entries = state.store.all().await?;
    Ok(Json(entries))
}

/// Log a viewing
pub async fn add_entry(
    State(state): State<AppState>,
    Json(request): Json<AddEntryRequest>,
) -> AppResult<(StatusCode, Json<WatchEntry>)> {
    let watch_date = match request.watch_date.as_deref() {
        Some(raw) => parse_watch_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let rating = match request.rating {
        Some(value) => Rating::new(value)?,
        None => Rating::default(),
    };
    let entry = NewWatchEntry::new(
        request.movie_title,
        watch_date,
        rating,
        request.notes.unwrap_or_default(),
    )?;

    // The store accepts any title; only catalog titles can be picked here.
    if !catalog::contains(state.catalog, entry.movie_title()) {
        return Err(AppError::validation(format!(
            "'{}' is not in the catalog",
            entry.movie_title()
        )));
    }

    let id = state.store.add(entry.clone()).await?;

    tracing::info!(
        id,
        title = %entry.movie_title(),
        watch_date = %entry.watch_date(),
        rating = %entry.rating(),
        "Watch entry added"
    );

    Ok((StatusCode::CREATED, Json(entry.with_id(id))))
}

/// Monthly viewing counts and rating distribution
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let entries = state.store.all().await?;
    Ok(Json(StatsResponse::from_entries(&entries)))
}

/// Random catalog title that has not been logged yet
pub async fn get_recommendation(State(state): State<AppState>) -> AppResult<Json<Recommendation>> {
    let entries = state.store.all().await?;
    let recommendation = suggest(
        state.catalog,
        entries.iter().map(|e| e.movie_title.as_str()),
        &mut rand::thread_rng(),
    );

    if let Recommendation::AllWatched = recommendation {
        tracing::info!(watched = entries.len(), "Whole catalog watched, nothing to recommend");
    }

    Ok(Json(recommendation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockWatchStore;
    use std::sync::Arc;

    fn state_with(store: MockWatchStore) -> AppState {
        AppState::new(Arc::new(store))
    }

    fn request(title: &str) -> AddEntryRequest {
        AddEntryRequest {
            movie_title: title.to_string(),
            watch_date: None,
            rating: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_add_entry_applies_form_defaults() {
        let mut store = MockWatchStore::new();
        store
            .expect_add()
            .withf(|e| e.rating().value() == 7 && e.notes().is_empty())
            .times(1)
            .returning(|_| Ok(12));

        let (status, Json(entry)) = add_entry(State(state_with(store)), Json(request("Земля (1930)")))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry.id, 12);
        assert_eq!(entry.movie_title, "Земля (1930)");
    }

    #[tokio::test]
    async fn test_add_entry_rejects_unknown_title_without_writing() {
        let mut store = MockWatchStore::new();
        store.expect_add().times(0);

        let err = add_entry(State(state_with(store)), Json(request("The Matrix (1999)")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_add_entry_rejects_bad_rating_and_date() {
        let mut store = MockWatchStore::new();
        store.expect_add().times(0);
        let state = state_with(store);

        let mut bad_rating = request("Земля (1930)");
        bad_rating.rating = Some(11);
        let err = add_entry(State(state.clone()), Json(bad_rating)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut bad_date = request("Земля (1930)");
        bad_date.watch_date = Some("2024-13-01".to_string());
        let err = add_entry(State(state), Json(bad_date)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut store = MockWatchStore::new();
        store
            .expect_all()
            .returning(|| Err(AppError::Storage(sqlx::Error::PoolClosed)));
        let state = state_with(store);

        assert!(matches!(
            get_stats(State(state.clone())).await.unwrap_err(),
            AppError::Storage(_)
        ));
        assert!(matches!(
            get_recommendation(State(state)).await.unwrap_err(),
            AppError::Storage(_)
        ));
    }

    #[test]
    fn test_stats_response_shares() {
        let entries: Vec<WatchEntry> = [2, 8, 10, 9]
            .iter()
            .enumerate()
            .map(|(i, r)| {
                NewWatchEntry::new(
                    "Земля (1930)",
                    parse_watch_date("2024-03-10").unwrap(),
                    Rating::new(*r).unwrap(),
                    "",
                )
                .unwrap()
                .with_id(i as i64 + 1)
            })
            .collect();

        let response = StatsResponse::from_entries(&entries);
        assert_eq!(response.total, 4);
        assert_eq!(response.monthly.len(), 1);
        assert_eq!(response.monthly[0].count, 4);

        let shares: Vec<(&str, usize, f64)> = response
            .ratings
            .iter()
            .map(|b| (b.bucket.label(), b.count, b.share))
            .collect();
        assert_eq!(shares, vec![("1–3", 1, 25.0), ("7–8", 1, 25.0), ("9–10", 2, 50.0)]);
    }
}
