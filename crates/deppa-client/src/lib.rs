//! Client for the DEPPA teacher-evaluation web service.
//!
//! The service exposes three form-encoded POST endpoints answering with JSON.
//! Every request carries the academic unit's credentials; this crate injects
//! them, sends the request and sorts the answer into one uniform result:
//!
//! - `Ok(ApiResponse)` with the decoded body, passed through untouched
//! - `Err(RequestError)` carrying an [`ErrorKind`], a diagnostic and, when a
//!   response arrived, its status and raw body
//!
//! Failures are values: callers match on the result, nothing panics and
//! nothing is retried.
//!
//! # Quick Start
//!
//! ```no_run
//! use deppa_client::{ClientConfig, DeppaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("https://deppa.example.edu/ws", "ingenieria", "s3cret", 8);
//! let client = DeppaClient::new(config)?;
//!
//! match client.check_active_period("2024-03-01").await {
//!     Ok(response) => println!("period: {}", response.data),
//!     Err(e) => eprintln!("{} ({})", e.diagnostic(), e.kind().code()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `DEPPA_URL` | Service base URL |
//! | `DEPPA_USUARIO` | Username issued to the unit |
//! | `DEPPA_PASSWORD` | Password issued to the unit |
//! | `DEPPA_CODIGO_UNIDAD` | Academic unit code |
//! | `DEPPA_TIMEOUT` | Request timeout in seconds (default: 30) |
//! | `DEPPA_LOG_PARAMETERS` | Log outgoing parameters, password redacted |

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{endpoints, DeppaClient, RESERVED_KEYS, USER_AGENT_VALUE as CLIENT_USER_AGENT};
pub use config::{ClientConfig, TransportOptions};
pub use error::{ConfigError, ConfigResult, ErrorKind, RequestError, RequestResult};
pub use types::{ApiResponse, EvaluationLinkRequest, FormParams, FormValue};
