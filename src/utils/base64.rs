use base64::{engine::general_purpose, DecodeError, Engine as _};

/// Decodes a standard Base64 string to raw bytes.
///
/// Share links in the wild are produced both with and without `=` padding, so
/// the padded alphabet is tried first and the unpadded one as a fallback.
pub fn base64_decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    general_purpose::STANDARD
        .decode(input)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(input))
}

/// Encodes a string to standard (padded) Base64.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}
