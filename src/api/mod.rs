//! HTTP API module for the compensation engine.
//!
//! This module exposes amount words, words parsing, salary structuring and
//! currency formatting as JSON endpoints for letter generators.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FormatRequest, NumbersRequest, SalaryStructureRequest, WordsRequest};
pub use response::{ApiError, ApiErrorResponse, FormatResponse, NumbersResponse, WordsResponse};
pub use state::AppState;
