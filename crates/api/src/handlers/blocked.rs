use axum::{
    extract::{OriginalUri, RawQuery, State},
    response::Html,
};
use tracing::{debug, instrument};
use zerospam_application::use_cases::BlockedTable;
use zerospam_domain::TableRequest;

use crate::{errors::ApiError, state::AppState, utils::parse_pairs};

#[instrument(skip_all, name = "api_get_blocked_table")]
pub async fn get_blocked_table(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, ApiError> {
    let request = TableRequest::from_pairs(
        parse_pairs(query.as_deref().unwrap_or_default()),
        request_uri(&uri),
    );
    render_table(&state, &request).await
}

/// Form submissions: the bulk action, ids and nonce arrive in the body,
/// paging and filters may also sit in the query string. Body values win for
/// single-valued fields; selected ids are only taken from the body.
#[instrument(skip_all, name = "api_post_blocked_table")]
pub async fn post_blocked_table(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    body: String,
) -> Result<Html<String>, ApiError> {
    let mut pairs: Vec<(String, String)> = parse_pairs(query.as_deref().unwrap_or_default())
        .into_iter()
        .filter(|(key, _)| !is_ids_key(key))
        .collect();
    pairs.extend(parse_pairs(&body));

    let request = TableRequest::from_pairs(pairs, request_uri(&uri));
    render_table(&state, &request).await
}

async fn render_table(state: &AppState, request: &TableRequest) -> Result<Html<String>, ApiError> {
    let page = state.blocked_table.prepare_items(request).await?;
    debug!(prepared = page.is_some(), "Blocked table prepared");

    let mut view = state.blocked_table.build_view(page.as_ref(), request);
    view.nonce = Some(state.nonces.issue(BlockedTable::NONCE_ACTION));

    Ok(Html(state.renderer.render(&view)))
}

fn is_ids_key(key: &str) -> bool {
    matches!(key, "ids[]" | "ids")
}

fn request_uri(uri: &axum::http::Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
