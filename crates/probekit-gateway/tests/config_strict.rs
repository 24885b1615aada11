#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use probekit_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
basicAuth:
  active: true
  username: admin
  pasword: typo   # typo should fail
scripts:
  - name: "ping"
    script: "/bin/true"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
scripts:
  - name: "ping"
    script: "/bin/ping -c 1"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.scripts[0].name, "ping");
    assert_eq!(cfg.get_script("ping"), Some("/bin/ping -c 1"));
    assert_eq!(cfg.get_script("PING"), None);
    assert!(!cfg.basic_auth.active);
    assert!(!cfg.bearer_auth.active);
    assert!(!cfg.tls.active);
}

#[test]
fn full_config_parses() {
    let ok = r#"
tls:
  active: false
  crt: server.crt
  key: server.key
basicAuth:
  active: true
  username: admin
  password: admin
bearerAuth:
  active: true
  signingKey: my_secret_key
scripts:
  - name: test
    script: ./examples/test.sh
  - name: ping
    script: ./examples/ping.sh
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.scripts.len(), 2);
    assert_eq!(cfg.basic_auth.username, "admin");
    assert_eq!(cfg.bearer_auth.signing_key, "my_secret_key");
    assert_eq!(cfg.tls.crt, "server.crt");
}

#[test]
fn rejects_invalid_semantics() {
    let cases = [
        "scripts: []\n",
        "scripts:\n  - { name: a, script: x }\n  - { name: a, script: y }\n",
        "scripts:\n  - { name: '', script: x }\n",
        "scripts:\n  - { name: a, script: '  ' }\n",
        "bearerAuth: { active: true }\nscripts:\n  - { name: a, script: x }\n",
        "basicAuth: { active: true, password: p }\nscripts:\n  - { name: a, script: x }\n",
        "tls: { active: true, crt: c }\nscripts:\n  - { name: a, script: x }\n",
    ];
    for yaml in cases {
        let err = config::load_from_str(yaml).expect_err(yaml);
        assert_eq!(err.client_code().as_str(), "INVALID_CONFIG", "{yaml}");
    }
}

#[test]
fn listen_address_forms() {
    assert_eq!(config::listen_addr(":9469").unwrap().port(), 9469);
    assert!(config::listen_addr(":9469").unwrap().ip().is_unspecified());
    assert_eq!(config::listen_addr("127.0.0.1:8080").unwrap().port(), 8080);
    assert!(config::listen_addr("nope").is_err());
}
