//! Evaluation service client.
//!
//! Public API: no status code knowledge. This module builds the reqwest
//! client; http.rs performs the exchange and helpers.rs classifies the body.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ConfigError, ConfigResult, RequestResult};
use crate::types::{ApiResponse, EvaluationLinkRequest, FormParams};

mod helpers;
mod http;

pub use helpers::RESERVED_KEYS;

use helpers::{merge_credentials, redact, Credentials};
use http::HttpBackend;

/// User agent sent unless the config overrides it.
pub const USER_AGENT_VALUE: &str = concat!("deppa-client/", env!("CARGO_PKG_VERSION"));

/// Endpoint paths, appended verbatim to the base URL.
pub mod endpoints {
    pub const ACTIVE_PERIOD: &str = "/PeriodoEvaluacion";
    pub const EVALUATION_LINK: &str = "/EnlaceEvaluacionEnLinea";
    pub const EVALUATION_STATUS: &str = "/EstadoEvaluacion";
}

/// Client for the teacher-evaluation service.
///
/// Cheap to clone; calls never mutate the client, so one instance can be
/// shared across tasks. Dropping a call's future aborts the request.
#[derive(Debug, Clone)]
pub struct DeppaClient {
    http: HttpBackend,
    config: ClientConfig,
}

impl DeppaClient {
    pub fn new(config: ClientConfig) -> ConfigResult<Self> {
        config.validate()?;

        let transport = &config.transport;
        let mut default_headers = HeaderMap::new();
        let user_agent = match &transport.user_agent {
            Some(ua) => HeaderValue::from_str(ua).map_err(|e| ConfigError::Invalid {
                name: "user_agent",
                message: e.to_string(),
            })?,
            None => HeaderValue::from_static(USER_AGENT_VALUE),
        };
        default_headers.insert(USER_AGENT, user_agent);

        for (name, value) in &transport.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::Invalid {
                name: "headers",
                message: format!("{}: {}", name, e),
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| ConfigError::Invalid {
                name: "headers",
                message: format!("{}: {}", name, e),
            })?;
            default_headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(transport.timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .default_headers(default_headers);

        if let Some(secs) = transport.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        if let Some(proxy) = &transport.proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| ConfigError::Invalid {
                name: "proxy",
                message: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            message: e.to_string(),
        })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http: HttpBackend { client, base_url },
            config,
        })
    }

    pub fn from_env() -> ConfigResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Send `params` plus the credential fields to `endpoint`.
    ///
    /// Caller values for `usuario`, `password` and `codigo_unidad` are
    /// replaced by the configured credentials.
    pub async fn send(&self, endpoint: &str, params: &FormParams) -> RequestResult<ApiResponse> {
        let fields = merge_credentials(
            params,
            Credentials {
                username: &self.config.username,
                password: &self.config.password,
                institution_code: self.config.institution_code,
            },
        );

        debug!(endpoint, fields = fields.len(), "sending request");
        if self.config.transport.log_parameters {
            debug!(endpoint, params = ?redact(&fields), "outgoing parameters");
        }

        self.http.post_form(endpoint, &fields).await
    }

    /// Ask whether an evaluation period is active on `fecha` (`YYYY-MM-DD`).
    pub async fn check_active_period(&self, fecha: &str) -> RequestResult<ApiResponse> {
        let params = FormParams::new().with("fecha", fecha);
        self.send(endpoints::ACTIVE_PERIOD, &params).await
    }

    pub async fn check_active_period_on(&self, date: NaiveDate) -> RequestResult<ApiResponse> {
        self.check_active_period(&date.format("%Y-%m-%d").to_string())
            .await
    }

    /// Reserve an evaluation ticket and get the link to show the evaluator.
    pub async fn create_evaluation_link(
        &self,
        request: &EvaluationLinkRequest,
    ) -> RequestResult<ApiResponse> {
        self.send(endpoints::EVALUATION_LINK, &request.to_params())
            .await
    }

    /// Query the state of survey `sid` for the evaluator `token`.
    pub async fn check_evaluation_status(
        &self,
        sid: i64,
        token: &str,
    ) -> RequestResult<ApiResponse> {
        let params = FormParams::new().with("sid", sid).with("token", token);
        self.send(endpoints::EVALUATION_STATUS, &params).await
    }

    pub fn base_url(&self) -> &str {
        &self.http.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
