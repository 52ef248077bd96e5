//! Destination roulette HTTP presentation layer
//!
//! Serves the single-page UI and the JSON API it talks to.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
