//! Fixed-width binary arithmetic endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::app_state::AppState;
use crate::dto::{BinaryOperationRequest, BinaryOperationResponse};
use crate::error::CalcSrvError;
use crate::service::run_binary_operation;

/// Run one arithmetic operation on two bit patterns
///
/// Width, operation and representation are validated before either operand
/// is decoded.
///
/// @route POST /binary/operation
/// @input `Json<BinaryOperationRequest>` - operands, width, operation, representation
/// @output `Json<BinaryOperationResponse>` - `kind: "result"` or `kind: "division"`
/// @status 200 - Computed
/// @status 400 - Invalid digit, length mismatch, width, operation or representation
/// @status 413 - Width or operand longer than the configured limit
/// @status 422 - Overflow or division by zero
#[utoipa::path(
    post,
    path = "/binary/operation",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "Operation computed", body = BinaryOperationResponse,
            example = json!({
                "kind": "division",
                "operation": "division",
                "representation": "twosComplement",
                "description": "2's complement division",
                "num_bits": 8,
                "quotient": "11111101",
                "remainder": "11111111",
                "quotient_decimal": "-3",
                "remainder_decimal": "-1"
            })
        ),
        (status = 400, description = "Invalid input", body = errors::ErrorInfo),
        (status = 413, description = "Input exceeds configured limits", body = errors::ErrorInfo),
        (status = 422, description = "Overflow or division by zero", body = errors::ErrorInfo,
            example = json!({
                "error": "Overflow: addition result 16 outside [0, 15] for 4-bit unsigned",
                "kind": "overflow",
                "error_code": "OVERFLOW",
                "category": "calculation",
                "detail": "valid range for 4-bit unsigned: [0, 15]"
            })
        )
    ),
    tag = "binary"
)]
pub async fn binary_operation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> Result<Json<BinaryOperationResponse>, CalcSrvError> {
    let Json(request) = payload?;
    let response = run_binary_operation(&state.engine, &request)?;
    Ok(Json(response))
}
