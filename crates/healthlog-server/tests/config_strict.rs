#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use healthlog_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:3000"
  max_body_bytez: 4096 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");
    assert_eq!(cfg.server.max_body_bytes, 65536);
    assert_eq!(cfg.log.filter, "info");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:8088"
  max_body_bytes: 2048
log:
  filter: "healthlog_server=debug"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:8088");
    assert_eq!(cfg.server.max_body_bytes, 2048);
    assert_eq!(cfg.log.filter, "healthlog_server=debug");
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn out_of_range_values_rejected() {
    for bad in [
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nserver:\n  max_body_bytes: 10\n",
        "version: 1\nlog:\n  filter: \"  \"\n",
    ] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "yaml={bad}");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let (cfg, found) = config::load_or_default("does/not/exist/healthlog.yaml").unwrap();
    assert!(!found);
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");

    let err = config::load_from_file("does/not/exist/healthlog.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
