//! # API Layer
//!
//! Per-resource routers and handlers. Each handler validates its input,
//! translates between HTTP bodies and store calls, and shapes the uniform
//! response envelope. Failures are typed as [`error::ApiError`] and shaped
//! by its `IntoResponse` impl; nothing here panics on bad input.

pub mod cars;
pub mod dealers;
pub mod error;
pub mod extract;
pub mod items;
pub mod lists;
pub mod makes;
pub mod response;

pub use error::{ApiError, ApiResult};
pub use response::{ErrorResponse, SuccessResponse};
