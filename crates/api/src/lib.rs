pub mod errors;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;
pub mod utils;

pub use render::HtmlTableRenderer;
pub use routes::create_api_routes;
pub use state::AppState;
