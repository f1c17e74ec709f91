//! SAML 2.0 types and data structures.
//!
//! This module contains the request-side SAML types: constants, name
//! identifiers, per-request options and the built message.

mod authn_request;
mod constants;
mod name_id;

pub use authn_request::*;
pub use constants::*;
pub use name_id::*;
