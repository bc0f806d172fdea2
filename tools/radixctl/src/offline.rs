//! Library mode: evaluate requests in-process through calcsrv's service layer

use anyhow::Result;
use calcsrv::dto::{BinaryOperationRequest, ConversionRequest};
use calcsrv::service::{run_binary_operation, run_conversion};
use calcsrv::CalcSrvError;
use errors::ServiceErrorTrait;
use radix_calc::{BaseConverter, BinaryEngine};
use serde::Serialize;

use crate::client::Reply;

fn into_reply<T: Serialize>(outcome: std::result::Result<T, CalcSrvError>) -> Result<Reply> {
    let reply = match outcome {
        Ok(body) => Reply {
            status: 200,
            body: serde_json::to_value(body)?,
        },
        Err(err) => Reply {
            status: err.http_status().as_u16(),
            body: serde_json::to_value(err.to_error_info())?,
        },
    };
    Ok(reply)
}

pub fn binary_operation(request: &BinaryOperationRequest) -> Result<Reply> {
    into_reply(run_binary_operation(&BinaryEngine::default(), request))
}

pub fn convert(request: &ConversionRequest) -> Result<Reply> {
    into_reply(run_conversion(&BaseConverter::default(), request))
}
