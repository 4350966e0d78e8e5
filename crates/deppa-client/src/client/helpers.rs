//! Pure helpers: credential merge, body decoding and classification (no HTTP).

use serde_json::Value;

use crate::error::{RequestError, RequestResult};
use crate::types::{ApiResponse, FormParams};

pub(crate) const KEY_USERNAME: &str = "usuario";
pub(crate) const KEY_PASSWORD: &str = "password";
pub(crate) const KEY_INSTITUTION: &str = "codigo_unidad";

/// Keys injected from the client config on every request.
pub const RESERVED_KEYS: [&str; 3] = [KEY_USERNAME, KEY_PASSWORD, KEY_INSTITUTION];

/// Credential fields appended to every request body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub institution_code: i64,
}

/// Merge caller fields with credentials.
///
/// Caller fields keep their order with reserved keys dropped; the three
/// credential fields follow in `usuario`, `password`, `codigo_unidad` order.
/// Credentials always win on key collision.
pub(crate) fn merge_credentials(params: &FormParams, creds: Credentials<'_>) -> FormParams {
    let mut merged: FormParams = params
        .iter()
        .filter(|(k, _)| !RESERVED_KEYS.contains(k))
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();

    merged.insert(KEY_USERNAME, creds.username);
    merged.insert(KEY_PASSWORD, creds.password);
    merged.insert(KEY_INSTITUTION, creds.institution_code);
    merged
}

/// Copy of the fields safe to write to logs.
pub(crate) fn redact(params: &FormParams) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| {
            let shown = if k == KEY_PASSWORD {
                "***".to_string()
            } else {
                v.to_string()
            };
            (k.to_string(), shown)
        })
        .collect()
}

/// Whether a decoded body carries no usable data.
///
/// `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` count as empty.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Decode a raw body as UTF-8.
///
/// Invalid UTF-8 is a `MalformedResponse`; the lossy text is kept as
/// `raw_body` for diagnostics only.
pub(crate) fn decode_body(status: u16, bytes: Vec<u8>) -> RequestResult<String> {
    String::from_utf8(bytes).map_err(|e| RequestError::MalformedResponse {
        status,
        message: format!("body is not valid UTF-8: {}", e.utf8_error()),
        raw_body: String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Turn a received status and body into the call outcome.
///
/// Order: empty body, JSON parse, empty value, status.
pub(crate) fn classify_body(status: u16, body: String) -> RequestResult<ApiResponse> {
    if body.trim().is_empty() {
        return Err(RequestError::EmptyOrInvalidBody {
            status,
            raw_body: body,
        });
    }

    let data: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            return Err(RequestError::MalformedResponse {
                status,
                message: e.to_string(),
                raw_body: body,
            })
        }
    };

    if is_empty_value(&data) {
        return Err(RequestError::EmptyOrInvalidBody {
            status,
            raw_body: body,
        });
    }

    if !(200..300).contains(&status) {
        return Err(RequestError::UnexpectedStatus {
            status,
            data,
            raw_body: body,
        });
    }

    Ok(ApiResponse { status, data })
}
