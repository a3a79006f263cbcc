//! HTTP API module for the pay calculator.
//!
//! Exposes `POST /calculate`, which prices a batch of schedule lines with
//! the same pipeline as the command line tool.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, RecordResponse};
pub use state::AppState;
