use serde::Serialize;
use serde_json::Value;

use crate::constants::{
    DEFAULT_NODE_NAME, EXTERNAL_CONTROLLER, HTTP_PORT, LOG_LEVEL, MATCH_RULE, MODE,
    SELECT_GROUP_NAME, SOCKS_PORT, URL_TEST_GROUP_NAME, URL_TEST_INTERVAL, URL_TEST_URL,
};
use crate::parser::VmessFields;

/// Represents a complete Clash configuration output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashConfig {
    pub port: u16,
    pub socks_port: u16,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,
    pub proxies: Vec<VmessProxy>,
    pub proxy_groups: Vec<ProxyGroup>,
    pub rules: Vec<String>,
}

/// A single vmess proxy entry in Clash configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VmessProxy {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: String,
    pub server: String,
    pub port: u16,
    pub uuid: String,
    #[serde(rename = "alterId")]
    pub alter_id: u32,
    pub cipher: String,
    pub udp: bool,
    pub tls: bool,
    pub skip_cert_verify: bool,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOpts>,
}

/// WebSocket transport options, attached only when `network` is "ws"
#[derive(Debug, Clone, Serialize)]
pub struct WsOpts {
    pub path: String,
    pub headers: WsHeaders,
}

#[derive(Debug, Clone, Serialize)]
pub struct WsHeaders {
    pub host: String,
}

/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProxyGroupType {
    Select,
    UrlTest,
}

/// A named group of proxies the client selects among
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProxyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: ProxyGroupType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    pub proxies: Vec<String>,
}

impl ClashConfig {
    /// Document skeleton with the stock defaults: listening ports, rule mode,
    /// the catch-all rule, and the two predefined proxy groups. The select
    /// group starts out pointing at the url-test group.
    fn skeleton() -> Self {
        ClashConfig {
            port: HTTP_PORT,
            socks_port: SOCKS_PORT,
            allow_lan: true,
            mode: MODE.to_string(),
            log_level: LOG_LEVEL.to_string(),
            external_controller: EXTERNAL_CONTROLLER.to_string(),
            proxies: Vec::new(),
            proxy_groups: vec![
                ProxyGroup {
                    name: SELECT_GROUP_NAME.to_string(),
                    group_type: ProxyGroupType::Select,
                    url: None,
                    interval: None,
                    proxies: vec![URL_TEST_GROUP_NAME.to_string()],
                },
                ProxyGroup {
                    name: URL_TEST_GROUP_NAME.to_string(),
                    group_type: ProxyGroupType::UrlTest,
                    url: Some(URL_TEST_URL.to_string()),
                    interval: Some(URL_TEST_INTERVAL),
                    proxies: Vec::new(),
                },
            ],
            rules: vec![MATCH_RULE.to_string()],
        }
    }
}

/// Builds a full Clash configuration from the decoded vmess fields.
///
/// Never fails: every expected field has a declared default, and values of
/// the wrong type fall back to the same defaults as absence. A link missing
/// its server or uuid still produces a (not very useful) entry.
pub fn build_clash_config(fields: &VmessFields) -> ClashConfig {
    let proxy = build_vmess_proxy(fields);

    let mut config = ClashConfig::skeleton();
    for group in &mut config.proxy_groups {
        group.proxies.push(proxy.name.clone());
    }
    config.proxies.push(proxy);
    config
}

/// Maps the raw vmess fields to a Clash proxy entry, applying defaults.
fn build_vmess_proxy(fields: &VmessFields) -> VmessProxy {
    let network = str_field(fields, "net").unwrap_or("tcp").to_string();

    let ws_opts = if network == "ws" {
        Some(WsOpts {
            path: str_field(fields, "path").unwrap_or("/").to_string(),
            headers: WsHeaders {
                host: str_field(fields, "host").unwrap_or("").to_string(),
            },
        })
    } else {
        None
    };

    VmessProxy {
        name: str_field(fields, "ps").unwrap_or(DEFAULT_NODE_NAME).to_string(),
        proxy_type: "vmess".to_string(),
        server: str_field(fields, "add").unwrap_or("").to_string(),
        port: int_field(fields, "port").unwrap_or(443) as u16,
        uuid: str_field(fields, "id").unwrap_or("").to_string(),
        alter_id: int_field(fields, "aid").unwrap_or(0) as u32,
        cipher: resolve_cipher(fields),
        udp: true,
        tls: str_field(fields, "tls") == Some("tls"),
        skip_cert_verify: true,
        network,
        ws_opts,
    }
}

/// Cipher comes from `scy`, falling back to the older `security` spelling.
/// Some producers emit "zero", which Clash does not accept; map it to "auto".
fn resolve_cipher(fields: &VmessFields) -> String {
    let cipher = str_field(fields, "scy")
        .filter(|s| !s.is_empty())
        .or_else(|| str_field(fields, "security"))
        .filter(|s| !s.is_empty())
        .unwrap_or("auto");

    if cipher.eq_ignore_ascii_case("zero") {
        "auto".to_string()
    } else {
        cipher.to_string()
    }
}

fn str_field<'a>(fields: &'a VmessFields, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// Reads an integer field that producers emit either as a JSON number or as
/// a quoted decimal string.
fn int_field(fields: &VmessFields, key: &str) -> Option<u64> {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
