//! calcsrv error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use errors::{ErrorCategory, ServiceErrorTrait};
use radix_calc::{CalcError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcSrvError {
    /// Validation or arithmetic failure from the calculation core
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Request body could not be read as the expected JSON
    #[error("Invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CalcSrvError>;

impl CalcSrvError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<JsonRejection> for CalcSrvError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<figment::Error> for CalcSrvError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

// ============================================================================
// CalcSrvError implements ServiceErrorTrait
// ============================================================================

impl ServiceErrorTrait for CalcSrvError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Calc(err) => match err.kind() {
                ErrorKind::InvalidDigit => "INVALID_DIGIT",
                ErrorKind::LengthMismatch => "LENGTH_MISMATCH",
                ErrorKind::OutOfRange => "OUT_OF_RANGE",
                ErrorKind::Overflow => "OVERFLOW",
                ErrorKind::DivisionByZero => "DIVISION_BY_ZERO",
                ErrorKind::InvalidBase => "INVALID_BASE",
                ErrorKind::UnsupportedOperation => "UNSUPPORTED_OPERATION",
                ErrorKind::UnsupportedRepresentation => "UNSUPPORTED_REPRESENTATION",
                ErrorKind::InvalidWidth => "INVALID_WIDTH",
                ErrorKind::EmptyNumeral => "EMPTY_NUMERAL",
                ErrorKind::InputTooLarge => "INPUT_TOO_LARGE",
            },
            Self::InvalidRequest { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "PAYLOAD_TOO_LARGE"
            },
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Calc(err) => match err.kind() {
                ErrorKind::InputTooLarge => ErrorCategory::PayloadTooLarge,
                kind if kind.is_arithmetic() => ErrorCategory::Calculation,
                _ => ErrorCategory::Validation,
            },
            Self::InvalidRequest { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                ErrorCategory::PayloadTooLarge
            },
            Self::InvalidRequest { .. } => ErrorCategory::Validation,
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Io(_) | Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    fn kind(&self) -> String {
        match self {
            Self::Calc(err) => err.kind().as_str().to_string(),
            other => other.error_code().to_ascii_lowercase(),
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Calc(CalcError::InvalidDigit {
                digit, position, ..
            }) => Some(format!("digit '{}' at position {}", digit, position)),
            Self::Calc(CalcError::OutOfRange {
                min,
                max,
                width,
                representation,
                ..
            })
            | Self::Calc(CalcError::Overflow {
                min,
                max,
                width,
                representation,
                ..
            }) => Some(format!(
                "valid range for {}-bit {}: [{}, {}]",
                width, representation, min, max
            )),
            Self::Calc(CalcError::InputTooLarge { what, limit, .. }) => {
                Some(format!("{} limit is {}", what, limit))
            },
            _ => None,
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { status, .. } => *status,
            _ => errors::status_for_category(self.category()),
        }
    }
}

impl From<CalcSrvError> for common::AppError {
    fn from(err: CalcSrvError) -> Self {
        common::AppError::from_service_error(&err)
    }
}

impl IntoResponse for CalcSrvError {
    fn into_response(self) -> Response {
        common::AppError::from(self).into_response()
    }
}
