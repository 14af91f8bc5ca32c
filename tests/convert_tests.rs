use std::fs;
use std::path::Path;

use vmess2clash::utils::{base64_encode, write_atomically};
use vmess2clash::{convert_link, decode_vmess_link, LinkError};

fn link_from_json(json: &str) -> String {
    format!("vmess://{}", base64_encode(json))
}

#[test]
fn test_end_to_end_example() {
    let link = link_from_json(
        r#"{"ps":"Test","add":"1.2.3.4","port":"10086","id":"abc-123","aid":"0","net":"ws","path":"/path","host":"a.com","tls":"tls"}"#,
    );

    let config = convert_link(&link).unwrap();

    assert_eq!(config.proxies.len(), 1);
    let proxy = &config.proxies[0];
    assert_eq!(proxy.name, "Test");
    assert_eq!(proxy.server, "1.2.3.4");
    assert_eq!(proxy.port, 10086);
    assert_eq!(proxy.uuid, "abc-123");
    assert_eq!(proxy.alter_id, 0);
    assert_eq!(proxy.network, "ws");
    assert!(proxy.tls);
    assert_eq!(proxy.cipher, "auto");

    let ws = proxy.ws_opts.as_ref().unwrap();
    assert_eq!(ws.path, "/path");
    assert_eq!(ws.headers.host, "a.com");
}

#[test]
fn test_proxy_name_in_both_groups() {
    let config = convert_link(&link_from_json(r#"{"ps":"Node A"}"#)).unwrap();

    let membership: Vec<usize> = config
        .proxy_groups
        .iter()
        .enumerate()
        .filter(|(_, g)| g.proxies.iter().any(|p| p == "Node A"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(membership, vec![0, 1]);

    // Every group member resolves to a real proxy or another group.
    let known: Vec<&str> = config
        .proxies
        .iter()
        .map(|p| p.name.as_str())
        .chain(config.proxy_groups.iter().map(|g| g.name.as_str()))
        .collect();
    for group in &config.proxy_groups {
        for member in &group.proxies {
            assert!(known.contains(&member.as_str()), "dangling member {}", member);
        }
    }

    // The select group keeps its reference to the url-test group.
    assert_eq!(config.proxy_groups[0].proxies[0], config.proxy_groups[1].name);
}

#[test]
fn test_invalid_scheme_is_distinguishable() {
    let err = convert_link("trojan://whatever").unwrap_err();
    assert!(matches!(err, LinkError::InvalidScheme));
}

#[test]
fn test_decode_failures_are_unified() {
    let bad_base64 = "vmess://***";
    let bad_utf8 = "vmess:///w==";
    let bad_json = link_from_json("nope");
    let non_object = link_from_json("42");

    for link in [bad_base64, bad_utf8, bad_json.as_str(), non_object.as_str()] {
        let err = convert_link(link).unwrap_err();
        assert!(matches!(err, LinkError::Decode(_)), "link {:?}: {}", link, err);
    }
}

#[test]
fn test_unpadded_link_accepted() {
    let link = link_from_json(r#"{"add":"example.com"}"#);
    let unpadded = link.trim_end_matches('=').to_string();

    let config = convert_link(&unpadded).unwrap();
    assert_eq!(config.proxies[0].server, "example.com");
}

#[test]
fn test_decode_then_map_matches_decode_output() {
    let link = link_from_json(r#"{"ps":"x","port":443}"#);
    let fields = decode_vmess_link(&link).unwrap();

    let via_pipeline = convert_link(&link).unwrap();
    let via_stages = vmess2clash::build_clash_config(&fields);
    assert_eq!(via_pipeline.proxies[0].name, via_stages.proxies[0].name);
    assert_eq!(via_pipeline.proxies[0].port, via_stages.proxies[0].port);
}

#[test]
fn test_serialized_document_loads_back() {
    let link = link_from_json(
        r#"{"ps":"RT","add":"h.example","port":"8443","id":"u","net":"ws","tls":"tls"}"#,
    );
    let yaml = serde_yaml::to_string(&convert_link(&link).unwrap()).unwrap();

    // The emitted text is a well-formed YAML mapping with the expected shape.
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["port"], serde_yaml::Value::from(7890));
    assert_eq!(value["proxies"][0]["type"], serde_yaml::Value::from("vmess"));
    assert_eq!(value["proxies"][0]["ws-opts"]["path"], serde_yaml::Value::from("/"));
    assert_eq!(value["rules"][0], serde_yaml::Value::from("MATCH,PROXY"));
    assert_eq!(value["proxy-groups"][1]["interval"], serde_yaml::Value::from(300));
}

#[test]
fn test_written_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("config.yaml");

    let link = link_from_json(r#"{"ps":"file-test","add":"1.1.1.1"}"#);
    let yaml = serde_yaml::to_string(&convert_link(&link).unwrap()).unwrap();
    write_atomically(&out, &yaml).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, yaml);
    assert!(!Path::new(&format!("{}.tmp", out.display())).exists());
}
