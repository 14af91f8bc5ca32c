pub mod constants;
pub mod generator;
pub mod parser;
pub mod utils;

// Re-export the pipeline entry points for easier access
pub use generator::{build_clash_config, ClashConfig};
pub use parser::{decode_vmess_link, DecodeError, LinkError, VmessFields};

/// Runs the full conversion pipeline: link in, Clash document out.
pub fn convert_link(link: &str) -> Result<ClashConfig, LinkError> {
    let fields = decode_vmess_link(link)?;
    Ok(build_clash_config(&fields))
}
