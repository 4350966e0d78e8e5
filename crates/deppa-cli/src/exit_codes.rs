//! Process exit codes for the `deppa` binary.
//!
//! Request failures use `RequestError::exit_code` from the client crate
//! (5 transport, 6 unusable body, 7 error status).

pub const SUCCESS: i32 = 0;
pub const CONFIG_ERROR: i32 = 2; // Missing/invalid settings or client build failure
