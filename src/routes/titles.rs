use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    middleware::RequestId,
    models::SearchResponse,
    routes::AppState,
    services::title_search,
};

/// Handler for title search endpoint
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(query): Path<String>,
) -> Json<SearchResponse> {
    let matches = title_search::search_titles(&state.assets, &query);

    tracing::debug!(
        request_id = %request_id,
        query = %query,
        matches = matches.len(),
        "Title search"
    );

    Json(SearchResponse { matches })
}
