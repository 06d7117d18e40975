mod repositories;
mod use_cases;

pub use repositories::Repositories;
pub use use_cases::UseCases;

use std::sync::Arc;
use zerospam_api::{AppState, HtmlTableRenderer};

pub fn build_app_state(repos: &Repositories, use_cases: &UseCases) -> AppState {
    AppState {
        blocked_table: use_cases.blocked_table.clone(),
        renderer: Arc::new(HtmlTableRenderer::new()),
        nonces: repos.nonces.clone(),
    }
}
