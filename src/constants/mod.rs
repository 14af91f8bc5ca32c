// Fixed defaults baked into every generated configuration. These mirror the
// stock Clash example config and are not runtime-configurable.

/// HTTP proxy listening port.
pub const HTTP_PORT: u16 = 7890;

/// SOCKS5 proxy listening port.
pub const SOCKS_PORT: u16 = 7891;

/// Clash operating mode.
pub const MODE: &str = "rule";

/// Clash log level.
pub const LOG_LEVEL: &str = "info";

/// RESTful controller bind address.
pub const EXTERNAL_CONTROLLER: &str = "127.0.0.1:9090";

/// Name of the manual-select proxy group.
pub const SELECT_GROUP_NAME: &str = "PROXY";

/// Name of the automatic latency-test proxy group.
pub const URL_TEST_GROUP_NAME: &str = "自动选择";

/// Health-check URL used by the url-test group.
pub const URL_TEST_URL: &str = "http://www.gstatic.com/generate_204";

/// Health-check interval in seconds.
pub const URL_TEST_INTERVAL: u32 = 300;

/// Catch-all routing rule.
pub const MATCH_RULE: &str = "MATCH,PROXY";

/// Fallback display name for a node whose link carries no `ps` field.
pub const DEFAULT_NODE_NAME: &str = "Vmess节点";

/// Output path used when none is supplied on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "config.yaml";
