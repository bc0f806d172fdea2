//! Calculation Service Library (calcsrv)
//!
//! HTTP front end for `radix-calc`:
//!
//! - `POST /binary/operation`: fixed-width arithmetic on bit patterns in
//!   unsigned, sign-magnitude, ones' complement or two's complement form
//! - `POST /convert`: numeral conversion between bases 2 and 36
//! - `GET /health` and `GET /api-docs/openapi.json`
//!
//! Every domain failure is answered with the shared JSON error envelope
//! (`error`, `kind`, `error_code`, `category`, `detail`) and a non-2xx status.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dto;
pub mod error;
pub mod service;

pub use api::routes::create_router;
pub use app_state::AppState;
pub use config::CalcSrvConfig;
pub use error::{CalcSrvError, Result};
