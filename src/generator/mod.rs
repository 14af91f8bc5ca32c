pub mod clash;

pub use clash::{build_clash_config, ClashConfig, ProxyGroup, ProxyGroupType, VmessProxy, WsOpts};
