pub mod base64;
pub mod file;

// Re-export common utilities
pub use base64::{base64_decode_bytes, base64_encode};
pub use file::write_atomically;
