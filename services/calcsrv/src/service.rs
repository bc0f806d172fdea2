//! Request evaluation shared by the HTTP handlers and library-mode callers
//!
//! Request fields are validated in a fixed order: width or bases first, then
//! operation and representation names, then operand digits.

use radix_calc::{validate_base, BaseConverter, BinaryEngine, BitWidth, Operation, Representation};

use crate::dto::{
    BinaryOperationRequest, BinaryOperationResponse, ConversionRequest, ConversionResponse,
};
use crate::error::Result;

pub fn run_binary_operation(
    engine: &BinaryEngine,
    request: &BinaryOperationRequest,
) -> Result<BinaryOperationResponse> {
    let width = BitWidth::try_from(request.num_bits)?;
    let operation: Operation = request.operation.parse()?;
    let representation: Representation = request.representation.parse()?;

    let result = engine.execute(
        operation,
        request.binary1.trim(),
        request.binary2.trim(),
        width,
        representation,
    )?;

    Ok(BinaryOperationResponse::from(result))
}

pub fn run_conversion(
    converter: &BaseConverter,
    request: &ConversionRequest,
) -> Result<ConversionResponse> {
    let from_base = validate_base(request.from_base)?;
    let to_base = validate_base(request.to_base)?;
    let result = converter.convert(&request.number, from_base, to_base)?;

    Ok(ConversionResponse::new(
        request.number.clone(),
        from_base,
        to_base,
        result,
    ))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::CalcSrvError;
    use radix_calc::CalcError;

    fn request(num_bits: i64, operation: &str, representation: &str) -> BinaryOperationRequest {
        BinaryOperationRequest {
            binary1: "x".into(),
            binary2: "0".into(),
            num_bits,
            operation: operation.into(),
            representation: representation.into(),
        }
    }

    #[test]
    fn test_width_checked_before_names_and_digits() {
        let engine = BinaryEngine::default();
        let err = run_binary_operation(&engine, &request(0, "modulo", "excess3")).unwrap_err();
        assert!(matches!(err, CalcSrvError::Calc(CalcError::InvalidWidth(0))));

        let err = run_binary_operation(&engine, &request(1, "modulo", "excess3")).unwrap_err();
        assert!(matches!(
            err,
            CalcSrvError::Calc(CalcError::UnsupportedOperation(_))
        ));

        let err = run_binary_operation(&engine, &request(1, "addition", "excess3")).unwrap_err();
        assert!(matches!(
            err,
            CalcSrvError::Calc(CalcError::UnsupportedRepresentation(_))
        ));

        let err = run_binary_operation(&engine, &request(1, "addition", "unsigned")).unwrap_err();
        assert!(matches!(
            err,
            CalcSrvError::Calc(CalcError::InvalidDigit { digit: 'x', .. })
        ));
    }

    #[test]
    fn test_operands_are_trimmed() {
        let engine = BinaryEngine::default();
        let mut req = request(4, "addition", "unsigned");
        req.binary1 = " 0001 ".into();
        req.binary2 = "0010\n".into();
        let response = run_binary_operation(&engine, &req).unwrap();
        match response {
            BinaryOperationResponse::Result { result, .. } => assert_eq!(result, "0011"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_bases_checked_before_digits() {
        let converter = BaseConverter::default();
        let err = run_conversion(
            &converter,
            &ConversionRequest {
                number: "zz".into(),
                from_base: 40,
                to_base: 2,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CalcSrvError::Calc(CalcError::InvalidBase(40))));

        let response = run_conversion(
            &converter,
            &ConversionRequest {
                number: "zz".into(),
                from_base: 36,
                to_base: 10,
            },
        )
        .unwrap();
        assert_eq!(response.result, "1295");
        assert_eq!(response.number, "zz");
    }
}
