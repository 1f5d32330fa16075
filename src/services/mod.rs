//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Background HTTP requests against the portal API
//! - Transcript (KHS) PDF download and save
//! - System browser launching for navigation shortcuts
//! - Form validation helpers

pub mod browser;
pub mod download;
pub mod http;
pub mod validate;

pub use browser::open_url;
pub use download::KhsRunner;
pub use http::{ApiPayload, ApiRequest, ApiRunner, HttpMethod, RequestContext};
pub use validate::{validate_email, validate_nim};
