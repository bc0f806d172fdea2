//! Base conversion endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::app_state::AppState;
use crate::dto::{ConversionRequest, ConversionResponse};
use crate::error::CalcSrvError;
use crate::service::run_conversion;

/// Convert a numeral between bases 2 and 36
///
/// @route POST /convert
/// @input `Json<ConversionRequest>` - numeral, source base, target base
/// @output `Json<ConversionResponse>` - converted numeral in `result`
/// @status 200 - Converted
/// @status 400 - Invalid base, invalid digit or empty numeral
/// @status 413 - Numeral longer than the configured limit
#[utoipa::path(
    post,
    path = "/convert",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "Numeral converted", body = ConversionResponse,
            example = json!({
                "kind": "conversion",
                "number": "255",
                "from_base": 10,
                "to_base": 16,
                "result": "FF"
            })
        ),
        (status = 400, description = "Invalid input", body = errors::ErrorInfo,
            example = json!({
                "error": "Invalid digit '2' at position 1 for base 2",
                "kind": "invalid_digit",
                "error_code": "INVALID_DIGIT",
                "category": "validation",
                "detail": "digit '2' at position 1"
            })
        ),
        (status = 413, description = "Input exceeds configured limits", body = errors::ErrorInfo)
    ),
    tag = "conversion"
)]
pub async fn convert_number(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Json<ConversionResponse>, CalcSrvError> {
    let Json(request) = payload?;
    let response = run_conversion(&state.converter, &request)?;
    Ok(Json(response))
}
