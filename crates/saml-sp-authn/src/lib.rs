//! SAML 2.0 AuthnRequest construction for service providers.
//!
//! This crate builds the authentication request a service provider sends
//! to an identity provider and prepares it for transport:
//!
//! - **Settings** - an immutable settings value describing SP, IdP and policy
//! - **AuthnRequest building** - a canonical `samlp:AuthnRequest` document
//! - **Extensions** - pluggable providers for `samlp:Extensions` content
//! - **Transport encoding** - raw DEFLATE and base64 for the Redirect and POST bindings
//!
//! # Architecture
//!
//! - [`settings`] - Settings model and JSON loading
//! - [`types`] - Core SAML types, options and the built message
//! - [`builder`] - The AuthnRequest builder
//! - [`extensions`] - Extension provider capability and registry
//! - [`bindings`] - Transport encoding and binding helpers
//! - [`id`] / [`time`] - Identifier generation and SAML time formatting
//! - [`xml`] - Document tree and serializer
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use saml_sp_authn::{AuthnRequestBuilder, AuthnRequestOptions, Settings};
//!
//! let settings = Settings::from_file("saml-settings.json")?;
//! let message = AuthnRequestBuilder::new(&settings)
//!     .build(&AuthnRequestOptions::new().force_authn(true));
//!
//! let saml_request = message.request(None)?;
//! remember_request_id(message.id());
//! ```
//!
//! Signing, response validation and network transport are left to the
//! caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bindings;
pub mod builder;
pub mod error;
pub mod extensions;
pub mod id;
pub mod settings;
pub mod time;
pub mod types;
pub mod xml;

pub use builder::AuthnRequestBuilder;
pub use error::{SamlError, SamlResult};
pub use settings::Settings;
pub use types::*;
