//! API request handlers, one module per endpoint group

pub mod binary_handlers;
pub mod conversion_handlers;
pub mod health;

pub use binary_handlers::binary_operation;
pub use conversion_handlers::convert_number;
pub use health::health_check;
