//! HTTP API: handlers, router and OpenAPI document

pub mod handlers;
pub mod routes;
pub mod swagger;
