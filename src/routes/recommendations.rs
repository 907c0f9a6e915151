use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::RecommendationResult,
    routes::AppState,
    services::recommendations::{self, Recommendation, DEFAULT_TOP_N},
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default = "default_top_n")]
    pub top_n: i64,
}

fn default_top_n() -> i64 {
    DEFAULT_TOP_N
}

/// Handler for recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(title): Path<String>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<RecommendationResult>> {
    tracing::info!(
        request_id = %request_id,
        title = %title,
        top_n = params.top_n,
        "Processing recommendation request"
    );

    match recommendations::recommend(&state.assets, &title, params.top_n)? {
        Recommendation::Found(result) => {
            tracing::info!(
                request_id = %request_id,
                count = result.recommendations.len(),
                "Recommendations ready"
            );
            Ok(Json(result))
        }
        Recommendation::NotFound(not_found) => {
            tracing::info!(
                request_id = %request_id,
                suggestions = not_found.suggestions.len(),
                "Movie not found"
            );
            Err(AppError::MovieNotFound(not_found))
        }
    }
}
