//! HTTP API module for the payroll engine.
//!
//! This module exposes the salary calculations over a small REST API. It
//! is an adapter only; every computation lives in [`crate::calculation`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyAmountRequest, SalaryRangeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
