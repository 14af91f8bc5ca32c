pub mod vmess;

pub use vmess::{decode_vmess_link, DecodeError, LinkError, VmessFields};
