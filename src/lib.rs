//! Builds request bodies for the FCM legacy HTTP gateway.
//!
//! The transport layer that serializes the body, attaches credentials and
//! performs the HTTP call is a separate concern and lives outside this crate.

pub mod error;
pub mod models;
pub mod request;
pub mod utils;
