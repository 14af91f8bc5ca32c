use serde_json::{Map, Value};
use thiserror::Error;

use crate::utils::base64_decode_bytes;

/// Scheme prefix every vmess share link starts with.
pub const VMESS_SCHEME: &str = "vmess://";

/// Failure to turn a share link into a decoded field map.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("link must start with \"vmess://\"")]
    InvalidScheme,

    #[error("unable to decode vmess link: {0}")]
    Decode(#[from] DecodeError),
}

/// Underlying cause of a decode failure, preserved for diagnostics.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decoded fields of a vmess link, exactly as received.
///
/// No schema is enforced here; missing or oddly typed fields are the
/// generator's concern.
pub type VmessFields = Map<String, Value>;

/// Parses a vmess share link into its raw field map.
///
/// The payload after the `vmess://` prefix is base64 (padded or unpadded)
/// wrapping a UTF-8 JSON object.
pub fn decode_vmess_link(link: &str) -> Result<VmessFields, LinkError> {
    let encoded = link
        .strip_prefix(VMESS_SCHEME)
        .ok_or(LinkError::InvalidScheme)?;

    let decoded = decode_payload(encoded)?;
    Ok(decoded)
}

fn decode_payload(encoded: &str) -> Result<VmessFields, DecodeError> {
    let bytes = base64_decode_bytes(encoded)?;
    let text = String::from_utf8(bytes)?;
    let fields: VmessFields = serde_json::from_str(&text)?;
    Ok(fields)
}
