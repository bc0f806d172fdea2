//! CSV batch runners
//!
//! Arithmetic input columns: `num1,num2,representation,operation,bit_width`.
//! Conversion input columns: `number,base_1,base_2`; each numeral is converted
//! to `base_2` and back, and the round trip is checked.

use std::path::Path;

use anyhow::{Context, Result};
use calcsrv::dto::{BinaryOperationRequest, BinaryOperationResponse, ConversionRequest};
use calcsrv::service::{run_binary_operation, run_conversion as service_run_conversion};
use calcsrv::CalcSrvError;
use errors::ServiceErrorTrait;
use radix_calc::{BaseConverter, BinaryEngine, ErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Relative tolerance for fractional round trips
const FRACTION_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Deserialize)]
struct ArithmeticRow {
    num1: String,
    num2: String,
    representation: String,
    operation: String,
    bit_width: String,
}

#[derive(Debug, Serialize)]
struct ArithmeticRecord {
    num1: String,
    num2: String,
    representation: String,
    operation: String,
    bit_width: String,
    result: String,
    overflow: bool,
    error: String,
}

#[derive(Debug, Deserialize)]
struct ConversionRow {
    number: String,
    base_1: String,
    base_2: String,
}

#[derive(Debug, Serialize)]
struct ConversionRecord {
    number: String,
    base_1: String,
    base_2: String,
    output1: String,
    output2: String,
    #[serde(rename = "match")]
    matched: bool,
    error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub rows: usize,
    pub failed: usize,
}

fn parse_int(field: &str, value: &str) -> std::result::Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid {}: '{}'", field, value))
}

fn format_response(response: BinaryOperationResponse) -> String {
    match response {
        BinaryOperationResponse::Result { result, .. } => result,
        BinaryOperationResponse::Division {
            quotient,
            remainder,
            ..
        } => format!("Quotient: {}, Remainder: {}", quotient, remainder),
    }
}

fn evaluate_arithmetic(engine: &BinaryEngine, row: ArithmeticRow) -> ArithmeticRecord {
    let mut record = ArithmeticRecord {
        num1: row.num1,
        num2: row.num2,
        representation: row.representation,
        operation: row.operation,
        bit_width: row.bit_width,
        result: String::new(),
        overflow: false,
        error: String::new(),
    };

    let num_bits = match parse_int("bit_width", &record.bit_width) {
        Ok(bits) => bits,
        Err(message) => {
            record.error = message;
            return record;
        },
    };
    let request = BinaryOperationRequest {
        binary1: record.num1.clone(),
        binary2: record.num2.clone(),
        num_bits,
        operation: record.operation.clone(),
        representation: record.representation.clone(),
    };

    match run_binary_operation(engine, &request) {
        Ok(response) => record.result = format_response(response),
        Err(err) => {
            record.overflow = err.kind() == ErrorKind::Overflow.as_str();
            record.error = err.to_string();
        },
    }
    record
}

fn convert(
    converter: &BaseConverter,
    number: &str,
    from_base: i64,
    to_base: i64,
) -> std::result::Result<String, CalcSrvError> {
    let request = ConversionRequest {
        number: number.to_string(),
        from_base,
        to_base,
    };
    service_run_conversion(converter, &request).map(|response| response.result)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= FRACTION_TOLERANCE * a.abs().max(b.abs())
}

/// Integers must come back digit for digit (after normalization); numerals
/// with a fraction are compared by value within a relative tolerance.
fn round_trip_matches(
    converter: &BaseConverter,
    original: &str,
    returned: &str,
    base: i64,
) -> std::result::Result<bool, CalcSrvError> {
    if original.contains('.') {
        let a = convert(converter, original, base, 10)?;
        let b = convert(converter, returned, base, 10)?;
        Ok(match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(a), Ok(b)) => approx_eq(a, b),
            _ => a == b,
        })
    } else {
        Ok(convert(converter, original, base, base)? == returned)
    }
}

fn evaluate_conversion(converter: &BaseConverter, row: ConversionRow) -> ConversionRecord {
    let mut record = ConversionRecord {
        number: row.number,
        base_1: row.base_1,
        base_2: row.base_2,
        output1: String::new(),
        output2: String::new(),
        matched: false,
        error: String::new(),
    };

    let bases = parse_int("base_1", &record.base_1)
        .and_then(|b1| parse_int("base_2", &record.base_2).map(|b2| (b1, b2)));
    let (base_1, base_2) = match bases {
        Ok(bases) => bases,
        Err(message) => {
            record.error = message;
            return record;
        },
    };

    let outcome = convert(converter, &record.number, base_1, base_2).and_then(|output1| {
        let output2 = convert(converter, &output1, base_2, base_1)?;
        let matched = round_trip_matches(converter, &record.number, &output2, base_1)?;
        Ok((output1, output2, matched))
    });
    match outcome {
        Ok((output1, output2, matched)) => {
            record.output1 = output1;
            record.output2 = output2;
            record.matched = matched;
        },
        Err(err) => record.error = err.to_string(),
    }
    record
}

fn open_reader(input: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(input)
        .with_context(|| format!("Failed to open {}", input.display()))
}

fn open_writer(output: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::Writer::from_path(output).with_context(|| format!("Failed to create {}", output.display()))
}

pub fn run_arithmetic(input: &Path, output: &Path) -> Result<BatchSummary> {
    let engine = BinaryEngine::default();
    let mut reader = open_reader(input)?;
    let mut writer = open_writer(output)?;
    let mut summary = BatchSummary::default();

    for row in reader.deserialize::<ArithmeticRow>() {
        let record = evaluate_arithmetic(&engine, row?);
        summary.rows += 1;
        if !record.error.is_empty() {
            debug!(row = summary.rows, error = %record.error, "arithmetic row failed");
            summary.failed += 1;
        }
        writer.serialize(&record)?;
    }
    writer.flush()?;

    info!(
        rows = summary.rows,
        failed = summary.failed,
        output = %output.display(),
        "arithmetic batch complete"
    );
    Ok(summary)
}

pub fn run_conversion(input: &Path, output: &Path) -> Result<BatchSummary> {
    let converter = BaseConverter::default();
    let mut reader = open_reader(input)?;
    let mut writer = open_writer(output)?;
    let mut summary = BatchSummary::default();

    for row in reader.deserialize::<ConversionRow>() {
        let record = evaluate_conversion(&converter, row?);
        summary.rows += 1;
        if !record.error.is_empty() || !record.matched {
            debug!(row = summary.rows, error = %record.error, "conversion row failed");
            summary.failed += 1;
        }
        writer.serialize(&record)?;
    }
    writer.flush()?;

    info!(
        rows = summary.rows,
        failed = summary.failed,
        output = %output.display(),
        "conversion batch complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::fs;

    fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_arithmetic_batch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("binary_arithmetic_input.csv");
        let output = dir.path().join("binary_arithmetic_output.csv");
        fs::write(
            &input,
            "num1,num2,representation,operation,bit_width\n\
             0011,0100,unsigned,add,4\n\
             1111,0001,unsigned,add,4\n\
             11111001,00000010,twos_complement,div,8\n\
             1011,0010,signed_magnitude,add,4\n\
             0110,0000,ones_complement,div,4\n\
             01,01,unsigned,mod,2\n\
             01,01,unsigned,add,two\n",
        )
        .unwrap();

        let summary = run_arithmetic(&input, &output).unwrap();
        assert_eq!(summary, BatchSummary { rows: 7, failed: 4 });

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with(
            "num1,num2,representation,operation,bit_width,result,overflow,error"
        ));

        let rows = read_rows(&output);
        assert_eq!(&rows[0][5], "0111");
        assert_eq!(&rows[0][6], "false");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[1][6], "true");
        assert!(rows[1][7].starts_with("Overflow"));
        assert_eq!(&rows[2][5], "Quotient: 11111101, Remainder: 11111111");
        assert_eq!(&rows[3][5], "1001");
        assert_eq!(&rows[4][7], "Division by zero");
        assert_eq!(&rows[4][6], "false");
        assert!(rows[5][7].starts_with("Unsupported operation"));
        assert_eq!(&rows[6][7], "Invalid bit_width: 'two'");
    }

    #[test]
    fn test_conversion_batch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("base_conversion_input.csv");
        let output = dir.path().join("base_conversion_output.csv");
        fs::write(
            &input,
            "number,base_1,base_2\n\
             255,10,16\n\
             -1010,2,7\n\
             0.5,10,2\n\
             007,8,2\n\
             12,2,10\n\
             10,10,40\n",
        )
        .unwrap();

        let summary = run_conversion(&input, &output).unwrap();
        assert_eq!(summary, BatchSummary { rows: 6, failed: 2 });

        let rows = read_rows(&output);
        assert_eq!(&rows[0][3], "FF");
        assert_eq!(&rows[0][4], "255");
        assert_eq!(&rows[0][5], "true");
        assert_eq!(&rows[1][3], "-13");
        assert_eq!(&rows[1][4], "-1010");
        assert_eq!(&rows[2][3], "0.1");
        assert_eq!(&rows[2][4], "0.5");
        assert_eq!(&rows[2][5], "true");
        // leading zeros are normalized on both sides of the comparison
        assert_eq!(&rows[3][4], "7");
        assert_eq!(&rows[3][5], "true");
        assert_eq!(&rows[4][5], "false");
        assert!(rows[4][6].starts_with("Invalid digit '2'"));
        assert!(rows[5][6].starts_with("Invalid base 40"));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_arithmetic(&dir.path().join("missing.csv"), &dir.path().join("out.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
