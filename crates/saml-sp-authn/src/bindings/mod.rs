//! SAML bindings implementation.
//!
//! This module prepares outbound requests for transport:
//!
//! - [`encode`] / [`decode`] - optional raw DEFLATE plus base64, and its inverse
//! - **HTTP-Redirect Binding** - the encoded request as a query parameter
//! - **HTTP-POST Binding** - the encoded request in an auto-submitting form
//!
//! # Usage
//!
//! ```rust,ignore
//! use saml_sp_authn::bindings::{encode, HttpRedirectBinding};
//!
//! let encoded = encode(message.xml(), true)?;
//! let url = HttpRedirectBinding::request_url(message.destination(), &encoded, Some("relay"));
//! ```

mod post;
mod redirect;

use std::io::{Read, Write};

use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::{SamlError, SamlResult};

pub use post::*;
pub use redirect::*;

/// Form and query parameter carrying an encoded request.
pub const SAML_REQUEST_PARAM: &str = "SAMLRequest";

/// Parameter carrying opaque caller state across the round trip.
pub const RELAY_STATE_PARAM: &str = "RelayState";

/// Encodes a message for transport.
///
/// With `deflate` the UTF-8 bytes are raw-DEFLATE compressed (no zlib or
/// gzip framing) before standard base64 encoding; without it the bytes are
/// base64-encoded directly. No URL escaping is applied.
pub fn encode(xml: &str, deflate: bool) -> SamlResult<String> {
    let encoded = if deflate {
        let compressed = deflate_compress(xml.as_bytes())?;
        base64::engine::general_purpose::STANDARD.encode(&compressed)
    } else {
        base64::engine::general_purpose::STANDARD.encode(xml.as_bytes())
    };

    tracing::trace!(
        xml_len = xml.len(),
        encoded_len = encoded.len(),
        deflate,
        "Encoded SAML message"
    );

    Ok(encoded)
}

/// Decodes a message produced by [`encode`].
///
/// `inflate` must match the `deflate` flag used when encoding.
pub fn decode(encoded: &str, inflate: bool) -> SamlResult<String> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;

    let bytes = if inflate {
        deflate_decompress(&bytes)?
    } else {
        bytes
    };

    String::from_utf8(bytes)
        .map_err(|e| SamlError::InvalidRequest(format!("Invalid UTF-8 in message: {e}")))
}

/// Compresses data using DEFLATE (raw, no zlib header).
fn deflate_compress(data: &[u8]) -> SamlResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompresses raw DEFLATE data.
fn deflate_decompress(data: &[u8]) -> SamlResult<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}
