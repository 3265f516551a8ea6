//! HTTP transport for haulage.
//!
//! Routes live under `/rest/v1`. Every body, success or error, is wrapped
//! as `{ "data": ... }`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod schemas;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
