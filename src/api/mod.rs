//! API layer - HTTP endpoint handlers.

mod health;
mod overlay;
mod routes;

pub use health::health;
pub use overlay::{render_overlay, CONTENT_SOURCE_HEADER};
pub use routes::api_routes;
