//! Data Transfer Objects for the calcsrv API

use radix_calc::{OperationOutput, OperationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_representation() -> String {
    "unsigned".to_string()
}

/// Binary arithmetic request
///
/// `num_bits` is signed on the wire so that zero and negative widths reach
/// validation and come back as `invalid_width` instead of a body rejection.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[schema(example = json!({
    "binary1": "11111001",
    "binary2": "00000010",
    "num_bits": 8,
    "operation": "division",
    "representation": "twosComplement"
}))]
pub struct BinaryOperationRequest {
    /// First operand as a bit pattern of exactly `num_bits` digits
    pub binary1: String,
    /// Second operand as a bit pattern of exactly `num_bits` digits
    pub binary2: String,
    pub num_bits: i64,
    /// addition, subtraction, multiplication or division
    pub operation: String,
    /// unsigned, signOnly, onesComplement or twosComplement
    #[serde(default = "default_representation")]
    pub representation: String,
}

/// Binary arithmetic response, discriminated by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BinaryOperationResponse {
    /// Addition, subtraction and multiplication
    Result {
        operation: String,
        representation: String,
        description: String,
        num_bits: u32,
        result: String,
        result_bits: u32,
        result_decimal: String,
    },
    /// Truncating division; quotient and remainder always travel together
    Division {
        operation: String,
        representation: String,
        description: String,
        num_bits: u32,
        quotient: String,
        remainder: String,
        quotient_decimal: String,
        remainder_decimal: String,
    },
}

impl From<OperationResult> for BinaryOperationResponse {
    fn from(result: OperationResult) -> Self {
        let description = result.description();
        let operation = result.operation.as_str().to_string();
        let representation = result.representation.as_str().to_string();
        let num_bits = result.width.get();

        match result.output {
            OperationOutput::Value { bits, value } => Self::Result {
                operation,
                representation,
                description,
                num_bits,
                result_bits: bits.len() as u32,
                result: bits,
                result_decimal: value.to_string(),
            },
            OperationOutput::Division {
                quotient_bits,
                quotient,
                remainder_bits,
                remainder,
            } => Self::Division {
                operation,
                representation,
                description,
                num_bits,
                quotient: quotient_bits,
                remainder: remainder_bits,
                quotient_decimal: quotient.to_string(),
                remainder_decimal: remainder.to_string(),
            },
        }
    }
}

/// Base conversion request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[schema(example = json!({"number": "-ff.8", "from_base": 16, "to_base": 2}))]
pub struct ConversionRequest {
    /// Numeral in `from_base`; may carry a leading `-` and one `.`
    pub number: String,
    pub from_base: i64,
    pub to_base: i64,
}

/// Base conversion response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ConversionResponse {
    /// Always `"conversion"`
    pub kind: String,
    /// Input numeral as received
    pub number: String,
    pub from_base: u32,
    pub to_base: u32,
    /// Converted numeral in `to_base`
    pub result: String,
}

impl ConversionResponse {
    pub fn new(number: String, from_base: u32, to_base: u32, result: String) -> Self {
        Self {
            kind: "conversion".to_string(),
            number,
            from_base,
            to_base,
            result,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use radix_calc::{BinaryEngine, BitWidth, Operation, Representation};
    use serde_json::json;

    fn run(op: Operation, a: &str, b: &str, width: u32, repr: Representation) -> serde_json::Value {
        let result = BinaryEngine::default()
            .execute(op, a, b, BitWidth::new(width).unwrap(), repr)
            .unwrap();
        serde_json::to_value(BinaryOperationResponse::from(result)).unwrap()
    }

    #[test]
    fn test_result_shape() {
        let body = run(
            Operation::Addition,
            "0011",
            "0100",
            4,
            Representation::Unsigned,
        );
        assert_eq!(
            body,
            json!({
                "kind": "result",
                "operation": "addition",
                "representation": "unsigned",
                "description": "unsigned addition",
                "num_bits": 4,
                "result": "0111",
                "result_bits": 4,
                "result_decimal": "7"
            })
        );
    }

    #[test]
    fn test_division_shape() {
        let body = run(
            Operation::Division,
            "11111001",
            "00000010",
            8,
            Representation::TwosComplement,
        );
        assert_eq!(body["kind"], "division");
        assert_eq!(body["quotient"], "11111101");
        assert_eq!(body["remainder"], "11111111");
        assert_eq!(body["quotient_decimal"], "-3");
        assert_eq!(body["remainder_decimal"], "-1");
        assert_eq!(body["description"], "2's complement division");
        assert!(body.get("result").is_none());
    }

    #[test]
    fn test_request_defaults_to_unsigned() {
        let request: BinaryOperationRequest = serde_json::from_value(json!({
            "binary1": "1",
            "binary2": "0",
            "num_bits": 1,
            "operation": "addition"
        }))
        .unwrap();
        assert_eq!(request.representation, "unsigned");
    }

    #[test]
    fn test_conversion_response_kind() {
        let body = serde_json::to_value(ConversionResponse::new(
            "255".into(),
            10,
            16,
            "FF".into(),
        ))
        .unwrap();
        assert_eq!(body["kind"], "conversion");
        assert_eq!(body["result"], "FF");
    }
}
