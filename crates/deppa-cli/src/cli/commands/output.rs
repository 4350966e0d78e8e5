//! Printing of call outcomes.
//!
//! stdout always gets one JSON document: the service data on success, an
//! error object otherwise. The exit code carries the failure kind.

use deppa_client::{ApiResponse, ErrorKind, RequestError, RequestResult};
use serde::Serialize;
use serde_json::Value;

use crate::exit_codes::SUCCESS;

#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub error: bool,
    pub kind: ErrorKind,
    pub code: u16,
    pub diagnostic: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Value>,
}

impl<'a> From<&'a RequestError> for ErrorReport<'a> {
    fn from(err: &'a RequestError) -> Self {
        let data = match err {
            RequestError::UnexpectedStatus { data, .. } => Some(data),
            _ => None,
        };
        Self {
            error: true,
            kind: err.kind(),
            code: err.kind().code(),
            diagnostic: err.diagnostic(),
            detail: err.to_string(),
            http_status: err.http_status(),
            raw_body: err.raw_body(),
            data,
        }
    }
}

pub fn render(result: &RequestResult<ApiResponse>) -> anyhow::Result<String> {
    let text = match result {
        Ok(response) => serde_json::to_string_pretty(&response.data)?,
        Err(err) => serde_json::to_string_pretty(&ErrorReport::from(err))?,
    };
    Ok(text)
}

pub fn report(result: RequestResult<ApiResponse>) -> anyhow::Result<i32> {
    println!("{}", render(&result)?);
    match result {
        Ok(_) => Ok(SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err);
            Ok(err.exit_code())
        }
    }
}
