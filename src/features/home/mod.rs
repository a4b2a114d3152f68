pub mod articles;
pub mod content;

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use tracing::error;

pub use content::HOME;

pub fn home_router() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

// the loader step: read the clock, shift into the display offset, render
async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let now = state
        .clock
        .now()
        .with_timezone(&state.config.display_offset);

    match state.composer.render(now) {
        Ok(document) => Ok(Html(document.into_string())),
        Err(e) => {
            error!("Home: failed to render page: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
